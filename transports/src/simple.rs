//! The shortcut strategy: one call, one throwaway client.

use getkit_core::{RawResponse, RequestSpec, Transport, TransportError, TransportFuture};

/// The [`reqwest::get`] convenience entry point.
///
/// Builds and discards a client per request, which is exactly what the
/// shortcut is for: no configuration, no reuse, no state between calls.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleTransport;

impl SimpleTransport {
    /// Build the shortcut strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for SimpleTransport {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn fetch<'a>(&'a self, spec: &'a RequestSpec) -> TransportFuture<'a> {
        Box::pin(async move {
            let response = reqwest::get(spec.url()).await.map_err(map_reqwest)?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?;
            Ok(RawResponse { status, body })
        })
    }
}

/// Map reqwest's pre-response failure surface onto [`TransportError`].
///
/// Shared with [`ClientTransport`](crate::ClientTransport); both reqwest
/// strategies fail the same way before a response exists.
pub(crate) fn map_reqwest(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::InvalidUrl(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else {
        TransportError::Io(err.to_string())
    }
}
