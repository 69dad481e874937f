//! The immutable description of one outbound request.

use serde::{Deserialize, Serialize};

/// One GET request, created per invocation and never mutated.
///
/// The method is fixed: this crate models nothing but `GET`. The URL is
/// carried as given; validation beyond what the selected transport enforces
/// is deliberately not performed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSpec {
    url: String,
}

impl RequestSpec {
    /// The only method this crate issues.
    pub const METHOD: &'static str = "GET";

    /// Describe a GET request for `url`.
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The target URL, exactly as supplied by the caller.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl std::fmt::Display for RequestSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", Self::METHOD, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_carries_url_verbatim() {
        let spec = RequestSpec::get("http://localhost:9000/v2/quotes?x=1");
        assert_eq!(spec.url(), "http://localhost:9000/v2/quotes?x=1");
    }

    #[test]
    fn spec_displays_as_request_line() {
        let spec = RequestSpec::get("https://randomuser.me/api/");
        assert_eq!(spec.to_string(), "GET https://randomuser.me/api/");
    }
}
