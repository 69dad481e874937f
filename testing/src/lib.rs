//! # getkit testing
//!
//! Deterministic test doubles for the request lifecycle.
//!
//! The one piece of infrastructure everything here provides is
//! [`MockTransport`]: a scripted [`Transport`](getkit_core::Transport)
//! that replays a FIFO of canned results and records every
//! [`RequestSpec`](getkit_core::RequestSpec) it was asked to fetch.
//!
//! ## Example
//!
//! ```
//! use getkit_core::Fetcher;
//! use getkit_testing::MockTransport;
//!
//! # async fn example() {
//! let mock = MockTransport::new().with_response(200, r#"["a quote"]"#);
//! let fetcher = Fetcher::new(mock.clone());
//!
//! let outcome = fetcher.issue("http://mock/quotes").await;
//! assert!(outcome.is_success());
//! assert_eq!(mock.issued().len(), 1);
//! # }
//! ```

pub mod mock_transport;

pub use mock_transport::MockTransport;
