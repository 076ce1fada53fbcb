#[cfg(test)]
#[path = "transport_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;

use super::FetchError;

#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Passes 2xx responses through. Anything else becomes a
    /// [`FetchError::Server`] carrying only the status code.
    pub fn validate(self) -> Result<String, FetchError> {
        if (200..=299).contains(&self.status) {
            return Ok(self.body);
        }

        tracing::debug!(status = self.status, body = self.body, "Rejected response");
        return Err(FetchError::Server(self.status));
    }
}

#[async_trait]
pub trait Transport {
    /// Used at startup to verify the endpoint and credential are configured.
    async fn health_check(&self) -> Result<()>;

    /// Sends one encoded chat request and waits for the full buffered
    /// response. Never retries.
    async fn send(&self, body: String) -> Result<RawResponse, FetchError>;
}

pub type TransportBox = Box<dyn Transport + Send + Sync>;
