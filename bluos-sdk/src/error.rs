use thiserror::Error;

/// Errors surfaced while wiring the assistant together
///
/// Remote zone failures never appear here: they are reported to the user in
/// reply text and logged, per the controller's value-based error model.
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
