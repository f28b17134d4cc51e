//! Natural language parsing for BluOS playback commands
//!
//! This crate turns free text like "play some chill music outside at 40%"
//! into a structured [`Command`]: an action, an optional content query with
//! an inferred [`ContentType`], an optional zone target, and an optional
//! clamped volume. It has no network dependencies; resolving zone targets
//! and executing commands is the job of the crates above it.
//!
//! ```rust
//! use std::collections::HashMap;
//! use bluos_nlp::{CommandParser, PlaybackAction};
//!
//! let mut aliases = HashMap::new();
//! aliases.insert("kitchen".to_string(), "kitchen".to_string());
//!
//! let parser = CommandParser::new(aliases);
//! let command = parser.parse("play miles davis in the kitchen").unwrap();
//! assert_eq!(command.action, PlaybackAction::Play);
//! assert_eq!(command.zone_target.as_deref(), Some("kitchen"));
//! ```

pub mod command;
pub mod parser;

pub use command::{Command, ContentType, PlaybackAction};
pub use parser::CommandParser;
