//! # BluOS SDK - natural-language multi-room control
//!
//! Parses free-text playback commands, resolves named zones and groups, and
//! drives the BluOS REST control surface: transport control, volume, and
//! dynamic leader/follower grouping.
//!
//! ```rust,no_run
//! use bluos_sdk::{MusicAssistant, SystemConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bluos_sdk::SdkError> {
//!     // The host supplies the configuration already loaded.
//!     let config: SystemConfig = SystemConfig::default();
//!     let assistant = MusicAssistant::new(config)?;
//!
//!     let text = "play some jazz in the kitchen at 30%";
//!     if assistant.is_command(text) {
//!         let reply = assistant.handle_message("user", text).await;
//!         println!("{reply}");
//!     }
//!
//!     assistant.close();
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! bluos-sdk   (assistant, executor, registry, config)
//!     |
//! bluos-nlp   (free text -> Command)     bluos-api  (controller, protocol)
//!                                            |
//!                                        zone-client (shared HTTP session)
//! ```
//!
//! Remote zone failures never escape as errors: the controller reports them
//! as values, the executor turns them into reply text, and the assistant is
//! a final containment boundary so a misbehaving or unreachable zone can
//! never crash the host.

pub mod assistant;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod registry;

pub use assistant::MusicAssistant;
pub use config::{GroupConfig, SystemConfig, ZoneConfig};
pub use error::SdkError;
pub use executor::CommandExecutor;
pub use registry::ZoneRegistry;

// Re-export the layers hosts commonly touch.
pub use bluos_api::{Controller, Zone, ZoneStatus, DEFAULT_PORT};
pub use bluos_nlp::{Command, CommandParser, ContentType, PlaybackAction};
