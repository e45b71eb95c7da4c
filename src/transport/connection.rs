//! Defines the abstract `Transport` trait and the retrieval error type.

use futures::future::BoxFuture;
use mockall::automock;
use serde_json::Value;
use std::fmt;
use url::Url;

/// An error type for record retrieval operations.
#[derive(Debug, Clone)]
pub enum RetrieveError {
    /// The server answered with a non-success status code.
    Status { code: u16 },
    /// The response body could not be parsed as a JSON record array.
    Parse(String),
    /// The request never produced a response.
    Transport(String),
}

impl fmt::Display for RetrieveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrieveError::Status { code } => write!(f, "unexpected status code {}", code),
            RetrieveError::Parse(msg) => write!(f, "malformed response body: {}", msg),
            RetrieveError::Transport(msg) => write!(f, "transport failure: {}", msg),
        }
    }
}

impl std::error::Error for RetrieveError {}

impl RetrieveError {
    /// Creates a new transport-level error.
    pub fn transport(msg: impl Into<String>) -> Self {
        RetrieveError::Transport(msg.into())
    }
}

/// A raw HTTP response: the status line plus a body that can be parsed once.
pub trait TransportResponse: Send {
    /// The numeric status code of the response.
    fn status(&self) -> u16;

    /// Consume the response and parse its body as JSON.
    fn json(self: Box<Self>) -> BoxFuture<'static, Result<Value, RetrieveError>>;
}

/// Abstracts the HTTP GET primitive via async returns but remains object-safe.
#[automock]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Issue a single GET against `url` and resolve with the raw response.
    ///
    /// Implementations must not retry or enforce timeouts here; a failed
    /// request surfaces as [`RetrieveError::Transport`].
    fn get(&self, url: &Url)
        -> BoxFuture<'static, Result<Box<dyn TransportResponse>, RetrieveError>>;
}
