//! The configured-client strategy: build once, reuse per call.

use getkit_core::{RawResponse, RequestSpec, Transport, TransportError, TransportFuture};
use reqwest::Client;

use crate::simple::map_reqwest;

/// A [`reqwest::Client`] configured at construction and shared across
/// requests: connection pooling, TLS, and a stable user agent come with it.
///
/// Requests remain independent at the contract level; pooling is an
/// internal detail of this strategy.
#[derive(Debug, Clone)]
pub struct ClientTransport {
    client: Client,
}

impl ClientTransport {
    /// Build the strategy around a default client.
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Build the strategy around an already-configured client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for ClientTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for ClientTransport {
    fn name(&self) -> &'static str {
        "client"
    }

    fn fetch<'a>(&'a self, spec: &'a RequestSpec) -> TransportFuture<'a> {
        Box::pin(async move {
            let response = self
                .client
                .get(spec.url())
                .header("accept", "application/json")
                .send()
                .await
                .map_err(map_reqwest)?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?;
            Ok(RawResponse { status, body })
        })
    }
}
