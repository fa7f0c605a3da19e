//! Collect transport.
//!
//! The dispatcher talks to the collection endpoints through the
//! [`CollectTransport`] seam so tests can record instead of send. The
//! production implementation is a thin reqwest wrapper.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::TransportError;

/// Async POST seam for collect payloads.
#[async_trait]
pub trait CollectTransport: Send + Sync {
    /// POSTs `body` as JSON to `url`.
    async fn post_json(&self, url: &str, body: Value) -> Result<(), TransportError>;
}

/// reqwest-backed transport used outside of tests.
#[derive(Debug, Clone)]
pub struct HttpCollectTransport {
    client: reqwest::Client,
}

impl HttpCollectTransport {
    /// Wraps a pre-built client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CollectTransport for HttpCollectTransport {
    async fn post_json(&self, url: &str, body: Value) -> Result<(), TransportError> {
        self.client
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
