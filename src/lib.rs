//! Paginated client for the managed records endpoint.
//!
//! The endpoint serves an ordered collection of records, each carrying an
//! `id`, a `color`, and a `disposition` (`"open"` or `"closed"`). This crate
//! fetches one display page at a time, over-fetching by a single sentinel row
//! to detect whether a next page exists, and reshapes the raw payload into a
//! [`RecordPage`] view model: record ids, open records annotated with a
//! primary-color flag, a closed-primary count, and previous/next page links.
//!
//! ```no_run
//! use managed_records::{RecordsClient, RetrieveOptions};
//! use url::Url;
//!
//! # async fn run() {
//! let endpoint = Url::parse("http://localhost:3000/records").unwrap();
//! let client = RecordsClient::new(endpoint);
//!
//! // `None` means the request failed; failures never surface as errors.
//! let page = client
//!     .retrieve(&RetrieveOptions::new().page(2).colors(["red", "blue"]))
//!     .await;
//! # let _ = page;
//! # }
//! ```

// modules
pub mod client;
pub mod query;
pub mod transform;
pub mod transport;

// Public API
pub use client::RecordsClient;
pub use query::{RecordQuery, RetrieveOptions, DEFAULT_LIMIT, PAGE_SIZE};
pub use transform::{is_primary_color, OpenRecord, RecordPage};
pub use transport::{
    MockTransport, ReqwestTransport, RetrieveError, Transport, TransportResponse,
};
