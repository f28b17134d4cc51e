//! Configuration types for the assistant
//!
//! The host loads these from wherever it keeps configuration and hands them
//! over already deserialized; this crate performs no file I/O of its own.
//! Zones and groups are immutable for the process lifetime - changing them
//! requires a restart.

use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use bluos_api::DEFAULT_PORT;

use crate::error::SdkError;

/// One configured zone endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Extra user-facing phrases for this zone, beyond its id and name.
    #[serde(default)]
    pub aliases: Vec<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// A named, ordered group of zones
///
/// The first member acts as group leader when the group is played.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    pub name: String,
    pub members: Vec<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Full assistant configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
    /// Zone targeted when a command names none; falls back to the first
    /// configured zone when unset.
    #[serde(default)]
    pub default_zone: Option<String>,
}

impl SystemConfig {
    /// Validate cross-references within the configuration
    ///
    /// Group members naming unknown zones are deliberately not an error;
    /// resolution silently drops them at runtime.
    pub fn validate(&self) -> Result<(), SdkError> {
        let mut ids = HashSet::new();
        for zone in &self.zones {
            if !ids.insert(zone.id.as_str()) {
                return Err(SdkError::InvalidConfig(format!(
                    "duplicate zone id '{}'",
                    zone.id
                )));
            }
        }

        for group in &self.groups {
            if ids.contains(group.name.as_str()) {
                return Err(SdkError::InvalidConfig(format!(
                    "group name '{}' collides with a zone id",
                    group.name
                )));
            }
        }

        if let Some(default) = &self.default_zone {
            if !ids.contains(default.as_str()) {
                return Err(SdkError::InvalidConfig(format!(
                    "default zone '{}' is not a configured zone",
                    default
                )));
            }
        }

        Ok(())
    }

    /// Build the alias table handed to the command parser
    ///
    /// Each zone contributes its id, its lowercased name, and its configured
    /// aliases, all mapping to the zone id. Each group contributes its name
    /// and aliases, mapping to the group name.
    pub fn alias_table(&self) -> HashMap<String, String> {
        let mut table = HashMap::new();

        for zone in &self.zones {
            table.insert(zone.id.to_lowercase(), zone.id.clone());
            table.insert(zone.name.to_lowercase(), zone.id.clone());
            for alias in &zone.aliases {
                table.insert(alias.to_lowercase(), zone.id.clone());
            }
        }

        for group in &self.groups {
            table.insert(group.name.to_lowercase(), group.name.clone());
            for alias in &group.aliases {
                table.insert(alias.to_lowercase(), group.name.clone());
            }
        }

        table
    }
}
