//! Private HTTP transport for BluOS zone communication
//!
//! This crate provides a minimal HTTP client specifically designed for the
//! BluOS control surface: plain GET requests against a zone's base URL with
//! optional query parameters. It owns the single shared session that is
//! reused across all zones.

mod error;

pub use error::ClientError;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

#[derive(Debug, Default)]
struct Session {
    client: Option<reqwest::Client>,
    closed: bool,
}

/// A minimal HTTP client for BluOS zone communication
///
/// Cheap to clone; all clones share the same underlying session. The session
/// is created lazily on first use and torn down with [`close`](Self::close).
/// Closing is terminal: afterwards every request fails with
/// [`ClientError::Closed`] rather than silently recreating the session.
#[derive(Debug, Clone, Default)]
pub struct ZoneClient {
    session: Arc<Mutex<Session>>,
}

impl ZoneClient {
    /// Create a new zone client with default timeouts
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a GET request to a zone endpoint and return the response body
    ///
    /// `params` are appended as query parameters. Any response status other
    /// than 200 is reported as [`ClientError::Status`].
    pub async fn get(
        &self,
        base_url: &str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<String, ClientError> {
        let client = self.client()?;
        let url = format!("{}{}", base_url, path);

        let mut request = client.get(&url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(ClientError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Shut the shared session down
    ///
    /// Terminal operation: subsequent requests on this client or any clone
    /// of it fail with [`ClientError::Closed`].
    pub fn close(&self) {
        let mut session = self.session.lock();
        session.client = None;
        session.closed = true;
        tracing::debug!("zone client session closed");
    }

    /// Whether the session has been shut down
    pub fn is_closed(&self) -> bool {
        self.session.lock().closed
    }

    // The lock is never held across an await: a cheap handle to the
    // connection pool is cloned out instead.
    fn client(&self) -> Result<reqwest::Client, ClientError> {
        let mut session = self.session.lock();
        if session.closed {
            return Err(ClientError::Closed);
        }
        match &session.client {
            Some(client) => Ok(client.clone()),
            None => {
                let client = reqwest::Client::builder()
                    .connect_timeout(Duration::from_secs(5))
                    .timeout(Duration::from_secs(10))
                    .build()
                    .map_err(|e| ClientError::Network(e.to_string()))?;
                session.client = Some(client.clone());
                Ok(client)
            }
        }
    }
}
