//! Static zone and group lookup

use std::collections::HashMap;

use bluos_api::Zone;

use crate::config::SystemConfig;

/// Static mapping of zone ids to endpoints, plus named group aliases
///
/// Loaded once at startup and immutable for the process lifetime. Pure
/// lookup: resolution never errors, and an empty result is a normal signal
/// meaning the caller applies its own fallback or reports unavailability.
#[derive(Debug, Clone, Default)]
pub struct ZoneRegistry {
    /// Configuration order; resolution with no target falls back to the
    /// first entry.
    zones: Vec<Zone>,
    groups: HashMap<String, Vec<String>>,
    default_zone: Option<String>,
}

impl ZoneRegistry {
    pub fn from_config(config: &SystemConfig) -> Self {
        let zones = config
            .zones
            .iter()
            .map(|zone| Zone::new(&zone.id, &zone.name, &zone.address, zone.port))
            .collect();
        let groups = config
            .groups
            .iter()
            .map(|group| (group.name.clone(), group.members.clone()))
            .collect();
        Self {
            zones,
            groups,
            default_zone: config.default_zone.clone(),
        }
    }

    /// Look a single zone up by id
    pub fn zone(&self, id: &str) -> Option<&Zone> {
        self.zones.iter().find(|zone| zone.id == id)
    }

    /// All configured zones, in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Resolve a target to the zones it names
    ///
    /// - no target: the configured default zone if present, else the first
    ///   configured zone, else empty;
    /// - a group name: its member zones in list order, with ids missing
    ///   from the registry silently dropped;
    /// - anything else: a single zone id, `[zone]` or empty.
    pub fn resolve(&self, target: Option<&str>) -> Vec<Zone> {
        match target {
            None => {
                if let Some(default) = self.default_zone.as_deref().and_then(|id| self.zone(id)) {
                    return vec![default.clone()];
                }
                self.zones.first().cloned().into_iter().collect()
            }
            Some(target) => {
                if let Some(members) = self.groups.get(target) {
                    return members
                        .iter()
                        .filter_map(|id| self.zone(id))
                        .cloned()
                        .collect();
                }
                self.zone(target).cloned().into_iter().collect()
            }
        }
    }
}
