//! The seam between the request lifecycle and the wire.
//!
//! A [`Transport`] is one concrete mechanism for performing an HTTP GET and
//! obtaining a complete response. It reports *how the bytes moved*, nothing
//! more: status classification and JSON parsing belong to the
//! [`Fetcher`](crate::Fetcher), so every strategy shares them.

use bytes::Bytes;
use futures::future::BoxFuture;
use thiserror::Error;

use crate::request::RequestSpec;

/// A complete response as a transport saw it on the wire.
///
/// Produced only when a server answered with a full status line and body;
/// anything short of that is a [`TransportError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code, unclassified.
    pub status: u16,
    /// Raw body bytes, unparsed.
    pub body: Bytes,
}

impl RawResponse {
    /// Bundle a status and body.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failures where no complete response was obtained from any server.
///
/// The lifecycle classifies every variant here as a network failure; the
/// split exists so transports can report what they actually saw.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The URL could not be understood by the transport.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The URL scheme is not supported by the selected transport.
    #[error("unsupported scheme `{0}` for this transport")]
    UnsupportedScheme(String),

    /// Connecting to the server failed (DNS, refused, unreachable).
    #[error("connect failed: {0}")]
    Connect(String),

    /// The connection was established but the exchange did not complete.
    #[error("request failed: {0}")]
    Io(String),
}

/// The future a transport returns: one shot, one result.
pub type TransportFuture<'a> = BoxFuture<'a, Result<RawResponse, TransportError>>;

/// One concrete mechanism for performing an HTTP GET.
///
/// Implementations are selected at construction time and driven through
/// `Arc<dyn Transport>`, hence the boxed future. Each `fetch` call is
/// independent: no shared mutable state is required by the contract, and a
/// strategy may open and tear down its own connection per call or pool
/// internally as it sees fit.
pub trait Transport: Send + Sync {
    /// A short stable name for logs (`"tcp"`, `"simple"`, ...).
    fn name(&self) -> &'static str;

    /// Perform the GET described by `spec` and resolve once with either a
    /// complete [`RawResponse`] or a [`TransportError`].
    fn fetch<'a>(&'a self, spec: &'a RequestSpec) -> TransportFuture<'a>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch<'a>(&'a self, spec: &'a RequestSpec) -> TransportFuture<'a> {
        (**self).fetch(spec)
    }
}
