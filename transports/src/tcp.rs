//! The raw strategy: a GET written by hand onto a TCP socket.

use bytes::Bytes;
use getkit_core::{RawResponse, RequestSpec, Transport, TransportError, TransportFuture};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::trace;

/// Hand-written HTTP/1.0 over [`TcpStream`], one connection per request.
///
/// The request asks for `Connection: close`, so the body is everything
/// after the header terminator and framing needs no chunked decoding.
/// Plain `http` URLs only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TcpTransport;

impl TcpTransport {
    /// Build the raw socket strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for TcpTransport {
    fn name(&self) -> &'static str {
        "tcp"
    }

    fn fetch<'a>(&'a self, spec: &'a RequestSpec) -> TransportFuture<'a> {
        Box::pin(async move {
            let (host, port, target) = crate::http_endpoint(spec.url())?;

            let mut stream = TcpStream::connect((host.as_str(), port))
                .await
                .map_err(|e| TransportError::Connect(e.to_string()))?;
            trace!(%host, port, "socket connected");

            let request = format!(
                "{method} {target} HTTP/1.0\r\nHost: {host}\r\nAccept: application/json\r\nConnection: close\r\n\r\n",
                method = RequestSpec::METHOD,
            );
            stream
                .write_all(request.as_bytes())
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?;

            // Close-delimited response: read until the server hangs up.
            let mut wire = Vec::new();
            stream
                .read_to_end(&mut wire)
                .await
                .map_err(|e| TransportError::Io(e.to_string()))?;

            parse_close_delimited(&wire)
        })
    }
}

/// Split a close-delimited HTTP response into status and body.
fn parse_close_delimited(wire: &[u8]) -> Result<RawResponse, TransportError> {
    let header_end = wire
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .ok_or_else(|| TransportError::Io("response missing header terminator".to_string()))?;

    let head = String::from_utf8_lossy(&wire[..header_end]);
    let status_line = head.lines().next().unwrap_or_default();
    let status = status_line
        .split_whitespace()
        .nth(1)
        .and_then(|code| code.parse::<u16>().ok())
        .ok_or_else(|| TransportError::Io(format!("malformed status line `{status_line}`")))?;

    let body = Bytes::copy_from_slice(&wire[header_end + 4..]);
    Ok(RawResponse { status, body })
}
