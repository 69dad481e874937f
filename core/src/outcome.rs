//! Terminal results of one issued request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The terminal result of one request: exactly one of these is produced per
/// [`issue`](crate::Fetcher::issue) call, delivered exactly once, then
/// discarded by the render side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// The server answered with a 2xx status and a JSON body.
    Success(Success),
    /// Anything else, classified. See [`FailureKind`].
    Failure(Failure),
}

impl Outcome {
    /// Whether this outcome is a [`Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The success value, if any.
    #[must_use]
    pub const fn success(&self) -> Option<&Success> {
        match self {
            Self::Success(ok) => Some(ok),
            Self::Failure(_) => None,
        }
    }

    /// The failure value, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }
}

/// A completed 2xx response with its parsed JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Success {
    /// HTTP status code, in `200..=299`.
    pub status: u16,
    /// The response body, passed through as untyped JSON.
    pub body: Value,
}

/// A classified, terminal failure of one request.
///
/// Failures are reported as values, never thrown; the caller decides what
/// to do with one (log it, show a placeholder). Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// Which stage of the lifecycle failed.
    pub kind: FailureKind,
    /// Human-readable detail; for [`FailureKind::Http`] this is the status
    /// code as a string (e.g. `"404"`).
    pub detail: String,
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.detail)
    }
}

impl std::error::Error for Failure {}

/// The three ways a request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The transport never obtained a complete response from a server.
    Network,
    /// The server responded with a status outside `200..=299`.
    Http,
    /// The 2xx response body is not valid JSON.
    Parse,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network => f.write_str("network error"),
            Self::Http => f.write_str("http error"),
            Self::Parse => f.write_str("parse error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_accessors() {
        let outcome = Outcome::Success(Success {
            status: 200,
            body: json!(["quote"]),
        });
        assert!(outcome.is_success());
        assert!(outcome.failure().is_none());
        assert_eq!(
            outcome.success().map(|ok| ok.status),
            Some(200),
        );
    }

    #[test]
    fn failure_displays_kind_and_detail() {
        let failure = Failure {
            kind: FailureKind::Http,
            detail: "404".to_string(),
        };
        assert_eq!(failure.to_string(), "http error: 404");
    }
}
