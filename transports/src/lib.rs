//! # getkit transports
//!
//! The four concrete [`Transport`](getkit_core::Transport) strategies, one
//! per mechanism the lifecycle abstracts over:
//!
//! - [`TcpTransport`]: a hand-written HTTP/1.0 GET straight over a
//!   [`tokio::net::TcpStream`]. The rawest mechanism; `http` URLs only.
//! - [`SimpleTransport`]: the [`reqwest::get`] one-call shortcut, a fresh
//!   throwaway client per request.
//! - [`ClientTransport`]: a [`reqwest::Client`] configured once and reused,
//!   connection pooling and TLS included.
//! - [`ConnTransport`]: a per-request `hyper` HTTP/1 connection handshake,
//!   driving the protocol machinery directly; `http` URLs only.
//!
//! Every strategy reports only how the bytes moved — a complete
//! [`RawResponse`](getkit_core::RawResponse) or a
//! [`TransportError`](getkit_core::TransportError). Status classification
//! and body parsing happen uniformly in the core lifecycle, never here.

pub mod client;
pub mod conn;
pub mod simple;
pub mod tcp;

pub use client::ClientTransport;
pub use conn::ConnTransport;
pub use simple::SimpleTransport;
pub use tcp::TcpTransport;

use getkit_core::TransportError;
use url::Url;

/// Split an `http` URL into what the socket-level strategies need:
/// host, port, and the origin-form request target.
///
/// `https` is refused here rather than half-supported: the socket
/// strategies speak plaintext only.
pub(crate) fn http_endpoint(raw: &str) -> Result<(String, u16, String), TransportError> {
    let url = Url::parse(raw).map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

    if url.scheme() != "http" {
        return Err(TransportError::UnsupportedScheme(url.scheme().to_string()));
    }

    let host = url
        .host_str()
        .ok_or_else(|| TransportError::InvalidUrl(format!("no host in `{raw}`")))?
        .to_string();
    let port = url.port_or_known_default().unwrap_or(80);

    let target = match url.query() {
        Some(query) => format!("{}?{query}", url.path()),
        None => url.path().to_string(),
    };

    Ok((host, port, target))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_splits_host_port_and_target() {
        let (host, port, target) =
            http_endpoint("http://dog.ceo:8080/api/breeds/image/random?x=1").unwrap();
        assert_eq!(host, "dog.ceo");
        assert_eq!(port, 8080);
        assert_eq!(target, "/api/breeds/image/random?x=1");
    }

    #[test]
    fn endpoint_defaults_port_80() {
        let (_, port, target) = http_endpoint("http://example.com").unwrap();
        assert_eq!(port, 80);
        assert_eq!(target, "/");
    }

    #[test]
    fn endpoint_refuses_https() {
        let err = http_endpoint("https://randomuser.me/api/").unwrap_err();
        assert!(matches!(err, TransportError::UnsupportedScheme(s) if s == "https"));
    }

    #[test]
    fn endpoint_refuses_garbage() {
        assert!(matches!(
            http_endpoint("not a url"),
            Err(TransportError::InvalidUrl(_))
        ));
    }
}
