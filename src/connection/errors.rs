//! Transport-level error types.
//!
//! This module contains the two failure shapes a request can produce:
//!
//! - [`HttpError`]: the server answered, but with an error status (400-599)
//!   and the connection's [`RaiseError`](super::RaiseError) policy is active
//! - [`TransportError`]: no usable answer was obtained at all (connection
//!   refused, timeout, TLS failure, malformed request, broken adapter)
//!
//! # Example
//!
//! ```rust,ignore
//! use http_resource::{Error, Resource, ResourceOptions};
//!
//! let orders = Resource::new("http://example.com/orders", ResourceOptions::default());
//! match orders.get(None) {
//!     Ok(response) => println!("{}", response.text()),
//!     Err(Error::Http(e)) => println!("status {}: {}", e.status, e.body),
//!     Err(Error::Transport(e)) => println!("{:?}: {}", e.kind, e),
//! }
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::connection::http_request::Method;

/// Error returned when a response carries a client or server error status.
///
/// The response is kept intact (headers and body text) so callers can inspect
/// whatever diagnostics the server sent.
///
/// # Example
///
/// ```rust
/// use http_resource::{HttpError, Method};
/// use std::collections::HashMap;
///
/// let error = HttpError {
///     method: Method::Get,
///     url: "http://example.com/orders/1".to_string(),
///     status: 404,
///     headers: HashMap::new(),
///     body: "not found".to_string(),
/// };
///
/// assert!(error.is_client_error());
/// assert_eq!(error.to_string(), "the server responded with status 404");
/// ```
#[derive(Clone, Debug, Error)]
#[error("the server responded with status {status}")]
pub struct HttpError {
    /// The method of the failed request.
    pub method: Method,
    /// The url of the failed request.
    pub url: String,
    /// The HTTP status code of the response.
    pub status: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// Response body, decoded as lossy UTF-8.
    pub body: String,
}

impl HttpError {
    /// Returns `true` for 4xx statuses.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status <= 499
    }

    /// Returns `true` for 5xx statuses.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status <= 599
    }
}

/// Broad classification of a [`TransportError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// The connection could not be opened (refused, DNS failure, TLS handshake).
    ConnectionFailed,
    /// The connect or request timeout elapsed.
    Timeout,
    /// The request could not be built (bad url, invalid header name or value).
    InvalidRequest,
    /// The configured adapter could not be constructed.
    Adapter,
    /// Any other failure reported by the adapter, including reading the body.
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConnectionFailed => write!(f, "connection failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::InvalidRequest => write!(f, "invalid request"),
            Self::Adapter => write!(f, "adapter error"),
            Self::Other => write!(f, "transport error"),
        }
    }
}

/// Error returned when the transport fails to produce a response.
///
/// The underlying cause, when there is one, is available through
/// [`std::error::Error::source`]. The error is `Clone` so a connection whose
/// adapter failed to build can report the same failure on every request.
#[derive(Clone, Debug, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    /// What kind of failure this is.
    pub kind: TransportErrorKind,
    /// Human readable description.
    pub message: String,
    #[source]
    source: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl TransportError {
    /// Creates an error without an underlying cause.
    #[must_use]
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates an error wrapping an underlying cause.
    #[must_use]
    pub fn with_source(
        kind: TransportErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if the connect or request timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        self.kind == TransportErrorKind::Timeout
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let kind = if error.is_timeout() {
            TransportErrorKind::Timeout
        } else if error.is_connect() {
            TransportErrorKind::ConnectionFailed
        } else if error.is_builder() {
            TransportErrorKind::InvalidRequest
        } else {
            TransportErrorKind::Other
        };
        Self::with_source(kind, error.to_string(), error)
    }
}
