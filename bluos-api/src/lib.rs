//! Typed client for the BluOS zone REST control surface
//!
//! This crate wraps the private `zone-client` transport with the operations
//! the control surface actually exposes: status queries, transport control,
//! volume, and the leader/follower grouping protocol. Expected remote
//! failures (timeouts, unreachable zones, non-200 responses, hostile status
//! documents) never surface as errors - each operation reports its outcome
//! as a value and logs the zone involved.
//!
//! ```rust,no_run
//! use bluos_api::{Controller, Zone, DEFAULT_PORT};
//!
//! #[tokio::main]
//! async fn main() {
//!     let controller = Controller::new();
//!     let gym = Zone::new("gym", "Gym", "192.168.1.40", DEFAULT_PORT);
//!
//!     if let Some(status) = controller.status(&gym).await {
//!         println!("{} is {} at volume {}", gym.name, status.state, status.volume);
//!     }
//!     controller.close();
//! }
//! ```

pub mod controller;
pub mod status;
pub mod zone;

pub use controller::Controller;
pub use status::{parse_status, ZoneStatus};
pub use zone::{Zone, DEFAULT_PORT};
