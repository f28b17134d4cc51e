//! Zone endpoint description

use serde::{Deserialize, Serialize};

/// Default port of the BluOS control surface
pub const DEFAULT_PORT: u16 = 11000;

/// An individually addressable BluOS audio endpoint
///
/// Immutable after construction. The registry owns the configured zones;
/// the controller and executor work with borrowed or cloned copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Zone {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            port,
        }
    }

    /// Base URL of this zone's control surface
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.address, self.port)
    }
}
