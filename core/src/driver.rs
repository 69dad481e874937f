//! Wires the two external collaborators — trigger and render — to a fetcher.

use crate::fetcher::Fetcher;
use crate::outcome::Outcome;

/// Maps zero-argument trigger signals onto a fixed URL and hands each
/// outcome to a render callback, exactly once per signal.
///
/// Both collaborators are injected explicitly: the trigger side calls
/// [`activate`](Self::activate) (a button, a stdin line, a test), and the
/// render side is the closure given at construction. The driver itself
/// holds no page or global state.
pub struct Driver<R> {
    fetcher: Fetcher,
    url: String,
    render: R,
}

impl<R: FnMut(Outcome)> Driver<R> {
    /// Bind a fetcher, a target URL, and the render collaborator.
    #[must_use]
    pub fn new(fetcher: Fetcher, url: impl Into<String>, render: R) -> Self {
        Self {
            fetcher,
            url: url.into(),
            render,
        }
    }

    /// Handle one trigger signal: issue the GET and render its outcome.
    ///
    /// Every activation is an independent request; activating twice renders
    /// two independent outcomes.
    pub async fn activate(&mut self) {
        let outcome = self.fetcher.issue(self.url.as_str()).await;
        (self.render)(outcome);
    }

    /// The URL this driver targets.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
