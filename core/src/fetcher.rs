//! The request-lifecycle adapter: one `issue`, one outcome.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::outcome::{Failure, FailureKind, Outcome, Success};
use crate::request::RequestSpec;
use crate::transport::{RawResponse, Transport, TransportError};

/// Issues GET requests through one transport strategy and normalizes every
/// result into an [`Outcome`].
///
/// The strategy is fixed at construction. Each [`issue`](Self::issue) call
/// is independent: concurrent calls share nothing and complete in any
/// order. A `Fetcher` is cheap to clone and share.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
}

impl Fetcher {
    /// Build a fetcher around a transport strategy.
    #[must_use]
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Build a fetcher around an already-shared transport.
    #[must_use]
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// The name of the underlying strategy, for logs and demo output.
    #[must_use]
    pub fn transport_name(&self) -> &'static str {
        self.transport.name()
    }

    /// Perform one GET against `url` and resolve with exactly one
    /// [`Outcome`], exactly once.
    ///
    /// Failures are returned, never raised: a refused connection, a non-2xx
    /// status, and an unparsable body all come back as
    /// [`Outcome::Failure`] with the matching [`FailureKind`]. There is no
    /// retry and no caching; issuing the same URL twice performs two
    /// independent requests.
    pub async fn issue(&self, url: impl Into<String>) -> Outcome {
        let spec = RequestSpec::get(url);
        debug!(transport = self.transport.name(), %spec, "issuing request");

        let outcome = classify(self.transport.fetch(&spec).await);

        match &outcome {
            Outcome::Success(ok) => {
                debug!(transport = self.transport.name(), status = ok.status, "request succeeded");
            }
            Outcome::Failure(err) => {
                warn!(
                    transport = self.transport.name(),
                    kind = %err.kind,
                    detail = %err.detail,
                    "request failed"
                );
            }
        }
        outcome
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("transport", &self.transport.name())
            .finish()
    }
}

/// Map a transport result to its terminal [`Outcome`].
///
/// This is the single normalization step every strategy shares:
/// transport error → network failure; non-2xx status → http failure with
/// the status as detail; 2xx with invalid JSON → parse failure; otherwise
/// success. Total over its input, and pure.
#[must_use]
pub fn classify(result: Result<RawResponse, TransportError>) -> Outcome {
    match result {
        Err(err) => Outcome::Failure(Failure {
            kind: FailureKind::Network,
            detail: err.to_string(),
        }),
        Ok(raw) if !(200..=299).contains(&raw.status) => Outcome::Failure(Failure {
            kind: FailureKind::Http,
            detail: raw.status.to_string(),
        }),
        Ok(raw) => match serde_json::from_slice(&raw.body) {
            Ok(body) => Outcome::Success(Success {
                status: raw.status,
                body,
            }),
            Err(err) => Outcome::Failure(Failure {
                kind: FailureKind::Parse,
                detail: err.to_string(),
            }),
        },
    }
}
