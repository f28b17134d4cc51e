//! Error types for the zone HTTP transport

use thiserror::Error;

/// Errors that can occur while talking to a zone endpoint
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// Zone answered with a non-success HTTP status
    #[error("HTTP status {0}")]
    Status(u16),

    /// The shared session has been shut down
    #[error("Client session is closed")]
    Closed,
}
