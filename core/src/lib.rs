//! # getkit core
//!
//! A uniform asynchronous request lifecycle for a single HTTP GET:
//! issue a request, get back exactly one [`Outcome`] (success or a
//! classified failure), hand it to a render callback.
//!
//! The actual wire mechanism lives behind the [`Transport`] trait, chosen
//! at construction time. The [`Fetcher`] adapter normalizes every
//! transport's result into the same contract:
//!
//! - transport-level failure (DNS, refused connection, aborted socket)
//!   → [`FailureKind::Network`]
//! - a completed response with a non-2xx status → [`FailureKind::Http`]
//! - a 2xx response whose body is not valid JSON → [`FailureKind::Parse`]
//! - a 2xx response with a JSON body → [`Success`]
//!
//! ## Example
//!
//! ```ignore
//! use getkit_core::{Fetcher, Outcome};
//! use getkit_transports::ClientTransport;
//!
//! #[tokio::main]
//! async fn main() {
//!     let fetcher = Fetcher::new(ClientTransport::new());
//!     match fetcher.issue("https://dog.ceo/api/breeds/image/random").await {
//!         Outcome::Success(ok) => println!("{}", ok.body["message"]),
//!         Outcome::Failure(err) => eprintln!("{err}"),
//!     }
//! }
//! ```
//!
//! No retries, no caching, no cancellation, no timeouts: once issued, a
//! request runs to a single terminal outcome and the value is discarded
//! after rendering.

pub mod driver;
pub mod fetcher;
pub mod outcome;
pub mod request;
pub mod transport;

// Re-export the working surface for convenience
pub use driver::Driver;
pub use fetcher::Fetcher;
pub use outcome::{Failure, FailureKind, Outcome, Success};
pub use request::RequestSpec;
pub use transport::{RawResponse, Transport, TransportError, TransportFuture};
