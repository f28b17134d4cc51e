//! Command execution against the registry and controller
//!
//! Dispatch is a direct match on the parsed action - six handlers, no
//! polymorphism. Every handler resolves zones through the registry, applies
//! the shared fallback rules, and composes a human-readable reply. Remote
//! failures surface as reply text, never as errors.

use bluos_api::{Controller, Zone};
use bluos_nlp::{Command, PlaybackAction};

use crate::registry::ZoneRegistry;

pub struct CommandExecutor {
    registry: ZoneRegistry,
    controller: Controller,
}

impl CommandExecutor {
    pub fn new(registry: ZoneRegistry, controller: Controller) -> Self {
        Self {
            registry,
            controller,
        }
    }

    /// Execute a parsed command and produce the reply text
    pub async fn execute(&self, command: &Command) -> String {
        tracing::info!(%command, "executing music command");
        match command.action {
            PlaybackAction::Play => self.handle_play(command).await,
            PlaybackAction::Pause => self.handle_pause(command).await,
            PlaybackAction::Resume => self.handle_resume(command).await,
            PlaybackAction::Stop => self.handle_stop(command).await,
            PlaybackAction::Skip => self.handle_skip(command).await,
            PlaybackAction::Back => self.handle_back(command).await,
        }
    }

    /// Leader zone for single-zone actions
    ///
    /// Resolves the command's target, falling back to the registry default
    /// (or first configured zone) when the target yields nothing. Additional
    /// resolved zones are ignored - single-zone actions only drive the
    /// leader.
    fn leader_zone(&self, command: &Command) -> Option<Zone> {
        let mut zones = self.registry.resolve(command.zone_target.as_deref());
        if zones.is_empty() {
            zones = self.registry.resolve(None);
        }
        zones.into_iter().next()
    }

    async fn handle_pause(&self, command: &Command) -> String {
        let Some(leader) = self.leader_zone(command) else {
            return "No zones available.".to_string();
        };
        if self.controller.pause(&leader).await {
            "Paused.".to_string()
        } else {
            "Failed to pause playback.".to_string()
        }
    }

    async fn handle_resume(&self, command: &Command) -> String {
        let Some(leader) = self.leader_zone(command) else {
            return "No zones available.".to_string();
        };
        if self.controller.play(&leader).await {
            "Resumed.".to_string()
        } else {
            "Failed to resume playback.".to_string()
        }
    }

    async fn handle_stop(&self, command: &Command) -> String {
        let Some(leader) = self.leader_zone(command) else {
            return "No zones available.".to_string();
        };
        if self.controller.stop(&leader).await {
            "Stopped.".to_string()
        } else {
            "Failed to stop playback.".to_string()
        }
    }

    async fn handle_skip(&self, command: &Command) -> String {
        let Some(leader) = self.leader_zone(command) else {
            return "No zones available.".to_string();
        };
        if self.controller.skip(&leader).await {
            "Skipped to next track.".to_string()
        } else {
            "Failed to skip track.".to_string()
        }
    }

    async fn handle_back(&self, command: &Command) -> String {
        let Some(leader) = self.leader_zone(command) else {
            return "No zones available.".to_string();
        };
        if self.controller.back(&leader).await {
            "Went back to previous track.".to_string()
        } else {
            "Failed to go back.".to_string()
        }
    }

    /// The play path: group the resolved zones, apply volume, resume the
    /// leader, and describe what happened.
    async fn handle_play(&self, command: &Command) -> String {
        let zones = self.registry.resolve(command.zone_target.as_deref());
        if zones.is_empty() {
            return "No valid zone specified.".to_string();
        }

        let leader = &zones[0];
        let followers = &zones[1..];

        // Group failure is logged but does not abort the command; the
        // leader can still play on its own.
        if !followers.is_empty() && !self.controller.create_group(leader, followers).await {
            tracing::warn!(
                leader = %leader.id,
                followers = followers.len(),
                "group formation failed; continuing"
            );
        }

        let mut volume_msg = String::new();
        if let Some(volume) = command.volume {
            let results = self.controller.set_volumes(&zones, volume as i32).await;
            let successful = results.values().filter(|ok| **ok).count();
            if successful == zones.len() {
                volume_msg = format!(" at {}%", volume);
            } else {
                volume_msg = format!(" (volume set on {}/{} zones)", successful, zones.len());
            }
        }

        self.controller.play(leader).await;

        let zone_desc = describe_zones(&zones);
        if command.content_query.is_some() {
            // No catalog search here: the zones are primed, but playback of
            // the requested content has to start from the user's app.
            format!("BluOS zones ready {zone_desc}{volume_msg}. Start playback from your streaming app.")
        } else {
            format!("Resumed playback {zone_desc}{volume_msg}")
        }
    }
}

/// Human-readable zone list: "in the Gym", "in the Gym and Pool",
/// "in Gym, Pool, and Deck"
fn describe_zones(zones: &[Zone]) -> String {
    match zones {
        [] => String::new(),
        [only] => format!("in the {}", only.name),
        [first, second] => format!("in the {} and {}", first.name, second.name),
        _ => {
            let names: Vec<&str> = zones.iter().map(|zone| zone.name.as_str()).collect();
            let (last, rest) = names.split_last().unwrap_or((&"", &[]));
            format!("in {}, and {}", rest.join(", "), last)
        }
    }
}
