//! Device controller for the BluOS REST control surface
//!
//! One controller drives any number of zones over a single shared HTTP
//! session. Remote unavailability is never an error at this boundary: every
//! operation reports its outcome as a value and logs the offending zone id,
//! so one zone's outage cannot disturb its siblings or the host.

use std::collections::HashMap;

use zone_client::{ClientError, ZoneClient};

use crate::status::{parse_status, ZoneStatus};
use crate::zone::Zone;

/// Issues control requests to zone endpoints
///
/// Cheap to clone; all clones share the same HTTP session.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    client: ZoneClient,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            client: ZoneClient::new(),
        }
    }

    /// Create a controller over an existing transport client
    pub fn with_client(client: ZoneClient) -> Self {
        Self { client }
    }

    /// Fetch and parse a zone's current status
    ///
    /// `None` covers an unreachable zone, a non-200 response, and a
    /// malformed or hostile status document alike.
    pub async fn status(&self, zone: &Zone) -> Option<ZoneStatus> {
        let body = self.request(zone, "/Status", &[]).await?;
        parse_status(&body)
    }

    /// Set a zone's volume, clamping the level to 0-100 before sending
    pub async fn set_volume(&self, zone: &Zone, level: i32) -> bool {
        let level = level.clamp(0, 100);
        let ok = self
            .request(zone, "/Volume", &[("level", level.to_string())])
            .await
            .is_some();
        if ok {
            tracing::info!(zone = %zone.id, level, "volume set");
        }
        ok
    }

    /// Resume playback on a zone
    pub async fn play(&self, zone: &Zone) -> bool {
        self.transport(zone, "/Play").await
    }

    /// Pause playback on a zone
    pub async fn pause(&self, zone: &Zone) -> bool {
        self.transport(zone, "/Pause").await
    }

    /// Stop playback on a zone
    pub async fn stop(&self, zone: &Zone) -> bool {
        self.transport(zone, "/Stop").await
    }

    /// Skip to the next track
    pub async fn skip(&self, zone: &Zone) -> bool {
        self.transport(zone, "/Skip").await
    }

    /// Go back to the previous track
    pub async fn back(&self, zone: &Zone) -> bool {
        self.transport(zone, "/Back").await
    }

    /// Add a follower to the addressed leader
    pub async fn add_follower(
        &self,
        leader: &Zone,
        follower_addr: &str,
        follower_port: u16,
    ) -> bool {
        self.request(
            leader,
            "/AddSlave",
            &[
                ("slave", follower_addr.to_string()),
                ("port", follower_port.to_string()),
            ],
        )
        .await
        .is_some()
    }

    /// Remove a follower from the addressed leader
    pub async fn remove_follower(&self, leader: &Zone, follower_addr: &str) -> bool {
        self.request(leader, "/RemoveSlave", &[("slave", follower_addr.to_string())])
            .await
            .is_some()
    }

    /// Form a group: `leader` receives the audio stream and fans it out
    ///
    /// Any existing group on the leader is dissolved first (a no-op success
    /// when it has no followers). Followers are then added one at a time,
    /// in input order. Returns true only if every add succeeded; followers
    /// added before a failure stay joined - there is no rollback, and
    /// partial success is reported as overall failure.
    ///
    /// Nothing here prevents a zone from ending up following two different
    /// leaders; topology lives on the devices and they are the source of
    /// truth.
    pub async fn create_group(&self, leader: &Zone, followers: &[Zone]) -> bool {
        // Dissolve result deliberately ignored: an unreachable status query
        // must not block forming the new group.
        self.dissolve_group(leader).await;

        let mut success = true;
        for follower in followers {
            if self
                .add_follower(leader, &follower.address, follower.port)
                .await
            {
                tracing::info!(leader = %leader.id, follower = %follower.id, "follower added");
            } else {
                tracing::error!(leader = %leader.id, follower = %follower.id, "failed to add follower");
                success = false;
            }
        }
        success
    }

    /// Dissolve any group led by `leader`
    ///
    /// Queries the leader's status to discover followers; no followers is a
    /// no-op success with no remove requests issued. Individual removal
    /// failures are logged but do not fail the overall operation. An
    /// unreachable leader reports failure.
    pub async fn dissolve_group(&self, leader: &Zone) -> bool {
        let status = match self.status(leader).await {
            Some(status) => status,
            None => return false,
        };

        if status.follower_addresses.is_empty() {
            return true;
        }

        for addr in &status.follower_addresses {
            if !self.remove_follower(leader, addr).await {
                tracing::warn!(leader = %leader.id, follower_addr = %addr, "failed to remove follower");
            }
        }
        tracing::info!(leader = %leader.id, "group dissolved");
        true
    }

    /// Set the volume on several zones concurrently
    ///
    /// One task per zone; each zone's outcome is captured independently, so
    /// a failure (or even a panic) in one zone's request cannot suppress or
    /// corrupt the entry reported for any sibling. Completion order carries
    /// no meaning - correlate by zone id.
    pub async fn set_volumes(&self, zones: &[Zone], level: i32) -> HashMap<String, bool> {
        let tasks: Vec<_> = zones
            .iter()
            .map(|zone| {
                let controller = self.clone();
                let zone = zone.clone();
                let id = zone.id.clone();
                let task = tokio::spawn(async move { controller.set_volume(&zone, level).await });
                (id, task)
            })
            .collect();

        join_outcomes(tasks).await
    }

    /// Shut the shared session down; see [`ZoneClient::close`]
    pub fn close(&self) {
        self.client.close();
    }

    /// Issue one GET against a zone
    ///
    /// Returns the body on HTTP 200 and `None` for every other outcome,
    /// logged with the offending zone id.
    async fn request(&self, zone: &Zone, path: &str, params: &[(&str, String)]) -> Option<String> {
        match self.client.get(&zone.base_url(), path, params).await {
            Ok(body) => Some(body),
            Err(ClientError::Status(code)) => {
                tracing::warn!(zone = %zone.id, path, status = code, "zone request failed");
                None
            }
            Err(e) => {
                tracing::error!(zone = %zone.id, path, error = %e, "zone request error");
                None
            }
        }
    }

    async fn transport(&self, zone: &Zone, path: &str) -> bool {
        let ok = self.request(zone, path, &[]).await.is_some();
        if ok {
            tracing::info!(zone = %zone.id, path, "transport request ok");
        }
        ok
    }
}

/// Join per-zone tasks into an outcome map
///
/// A task that failed to complete - a panic included - records `false` for
/// its zone without disturbing any sibling's entry.
async fn join_outcomes(
    tasks: Vec<(String, tokio::task::JoinHandle<bool>)>,
) -> HashMap<String, bool> {
    let mut results = HashMap::with_capacity(tasks.len());
    for (zone_id, task) in tasks {
        let ok = match task.await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::error!(zone = %zone_id, error = %e, "volume task failed");
                false
            }
        };
        results.insert(zone_id, ok);
    }
    results
}
