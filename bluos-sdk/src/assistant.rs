//! Host-facing entry point
//!
//! The host hands in `(sender, text)` and delivers whatever string comes
//! back; this core never initiates outbound messages of its own. The
//! assistant is also the outermost containment boundary: no fault below it,
//! a panic included, is allowed to reach the host process.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use bluos_api::Controller;
use bluos_nlp::CommandParser;

use crate::config::SystemConfig;
use crate::error::SdkError;
use crate::executor::CommandExecutor;
use crate::registry::ZoneRegistry;

pub struct MusicAssistant {
    parser: CommandParser,
    executor: CommandExecutor,
    controller: Controller,
    zone_ids: Vec<String>,
}

impl MusicAssistant {
    /// Wire the assistant up from an already-loaded configuration
    pub fn new(config: SystemConfig) -> Result<Self, SdkError> {
        config.validate()?;

        let parser = CommandParser::new(config.alias_table());
        let registry = ZoneRegistry::from_config(&config);
        let controller = Controller::new();
        let executor = CommandExecutor::new(registry, controller.clone());
        let zone_ids = config.zones.iter().map(|zone| zone.id.clone()).collect();

        Ok(Self {
            parser,
            executor,
            controller,
            zone_ids,
        })
    }

    /// Fast pre-filter for host-side message routing
    pub fn is_command(&self, text: &str) -> bool {
        self.parser.is_command(text)
    }

    /// Handle one inbound message and produce the reply for the host
    ///
    /// An unparseable message gets a "couldn't understand" reply. A defect
    /// anywhere below this point is converted into a failure reply rather
    /// than crashing the host.
    pub async fn handle_message(&self, sender: &str, text: &str) -> String {
        tracing::debug!(sender, "music message received");

        let Some(command) = self.parser.parse(text) else {
            return "I couldn't understand that music command.".to_string();
        };

        match AssertUnwindSafe(self.executor.execute(&command))
            .catch_unwind()
            .await
        {
            Ok(reply) => reply,
            Err(panic) => {
                let message = panic_message(&panic);
                tracing::error!(%command, message, "music command panicked");
                format!("Music command failed: {message}")
            }
        }
    }

    /// Command summary for the host's help output
    pub fn help_text(&self) -> String {
        let zones = if self.zone_ids.is_empty() {
            "none configured".to_string()
        } else {
            self.zone_ids.join(", ")
        };
        format!(
            "Music commands:\n  Available zones: {zones}\n  \
             play <song/artist> [in <zone>] [at <volume>%]\n  \
             pause/resume/stop [zone]\n  skip/back [zone]"
        )
    }

    /// Shut the controller session down; terminal
    pub fn close(&self) {
        self.controller.close();
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}
