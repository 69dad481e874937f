//! A scripted transport for fast, deterministic lifecycle tests.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap on its own locks
#![allow(clippy::missing_panics_doc)] // Lock poisoning is the only panic source

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use getkit_core::{RawResponse, RequestSpec, Transport, TransportError, TransportFuture};

/// A [`Transport`] that replays a scripted FIFO of results.
///
/// Each `fetch` pops the next scripted entry and records the issued
/// [`RequestSpec`]. When the script runs dry the mock reports a connect
/// error rather than panicking, so an over-eager caller shows up as a
/// classified network failure in the test's assertions.
///
/// Clones share the same script and the same recording; script a mock,
/// clone it into the fetcher, and assert on the original.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<VecDeque<ScriptEntry>>>,
    issued: Arc<Mutex<Vec<RequestSpec>>>,
}

#[derive(Debug, Clone)]
enum ScriptEntry {
    Respond { status: u16, body: Bytes },
    Refuse(String),
}

impl MockTransport {
    /// Create a mock with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a complete response to the script.
    #[must_use]
    pub fn with_response(self, status: u16, body: impl Into<Bytes>) -> Self {
        self.script.lock().unwrap().push_back(ScriptEntry::Respond {
            status,
            body: body.into(),
        });
        self
    }

    /// Append a connection-level failure to the script.
    #[must_use]
    pub fn with_refusal(self, detail: impl Into<String>) -> Self {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptEntry::Refuse(detail.into()));
        self
    }

    /// Every spec issued so far, in order.
    #[must_use]
    pub fn issued(&self) -> Vec<RequestSpec> {
        self.issued.lock().unwrap().clone()
    }

    /// Number of scripted entries not yet consumed.
    ///
    /// Useful for asserting a test consumed exactly what it scripted.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }

    /// Reset script and recording (for test isolation).
    pub fn clear(&self) {
        self.script.lock().unwrap().clear();
        self.issued.lock().unwrap().clear();
    }
}

impl Transport for MockTransport {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn fetch<'a>(&'a self, spec: &'a RequestSpec) -> TransportFuture<'a> {
        self.issued.lock().unwrap().push(spec.clone());
        let entry = self.script.lock().unwrap().pop_front();

        Box::pin(async move {
            match entry {
                Some(ScriptEntry::Respond { status, body }) => {
                    Ok(RawResponse { status, body })
                }
                Some(ScriptEntry::Refuse(detail)) => Err(TransportError::Connect(detail)),
                None => Err(TransportError::Connect(
                    "mock script exhausted".to_string(),
                )),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_script_in_order() {
        let mock = MockTransport::new()
            .with_response(200, "[]")
            .with_refusal("down for maintenance");

        let spec = RequestSpec::get("http://mock/first");
        let first = mock.fetch(&spec).await.unwrap();
        assert_eq!(first.status, 200);

        let second = mock.fetch(&spec).await;
        assert!(matches!(second, Err(TransportError::Connect(d)) if d == "down for maintenance"));
        assert_eq!(mock.remaining(), 0);
    }

    #[tokio::test]
    async fn records_issued_specs() {
        let mock = MockTransport::new().with_response(200, "{}");
        let spec = RequestSpec::get("http://mock/api?page=1");
        mock.fetch(&spec).await.unwrap();

        let issued = mock.issued();
        assert_eq!(issued.len(), 1);
        assert_eq!(issued[0].url(), "http://mock/api?page=1");
    }

    #[tokio::test]
    async fn exhausted_script_refuses_instead_of_panicking() {
        let mock = MockTransport::new();
        let spec = RequestSpec::get("http://mock/none");
        assert!(matches!(
            mock.fetch(&spec).await,
            Err(TransportError::Connect(_))
        ));
    }

    #[tokio::test]
    async fn clear_resets_script_and_recording() {
        let mock = MockTransport::new().with_response(200, "{}");
        let spec = RequestSpec::get("http://mock/once");
        mock.fetch(&spec).await.unwrap();

        mock.clear();
        assert_eq!(mock.remaining(), 0);
        assert!(mock.issued().is_empty());
    }
}
