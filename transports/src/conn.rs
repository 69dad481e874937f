//! The platform-primitive strategy: hyper's HTTP/1 machinery, driven by hand.

use bytes::Bytes;
use getkit_core::{RawResponse, RequestSpec, Transport, TransportError, TransportFuture};
use http_body_util::{BodyExt, Empty};
use hyper::client::conn::http1;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;
use tracing::trace;

/// A per-request `hyper` HTTP/1 connection handshake over a fresh
/// [`TcpStream`].
///
/// Sits one level below the reqwest strategies: protocol handling is real
/// HTTP/1 state machinery, but connection setup, the request line, and
/// body collection are all explicit here. Plain `http` URLs only.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConnTransport;

impl ConnTransport {
    /// Build the connection-level strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for ConnTransport {
    fn name(&self) -> &'static str {
        "conn"
    }

    fn fetch<'a>(&'a self, spec: &'a RequestSpec) -> TransportFuture<'a> {
        Box::pin(async move {
            let (host, port, target) = crate::http_endpoint(spec.url())?;

            let stream = TcpStream::connect((host.as_str(), port))
                .await
                .map_err(|e| TransportError::Connect(e.to_string()))?;

            let (mut sender, connection) = http1::handshake(TokioIo::new(stream))
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?;

            // The connection task owns the socket until the exchange ends.
            tokio::spawn(async move {
                if let Err(err) = connection.await {
                    trace!(%err, "connection ended with error");
                }
            });

            let authority = if port == 80 {
                host
            } else {
                format!("{host}:{port}")
            };
            let request = hyper::Request::builder()
                .method(RequestSpec::METHOD)
                .uri(target)
                .header(hyper::header::HOST, authority)
                .header(hyper::header::ACCEPT, "application/json")
                .body(Empty::<Bytes>::new())
                .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

            let response = sender
                .send_request(request)
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?;
            let status = response.status().as_u16();
            let body = response
                .into_body()
                .collect()
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?
                .to_bytes();

            Ok(RawResponse { status, body })
        })
    }
}
