//! Error type returned by resource requests.
//!
//! Every request method on [`Resource`](crate::Resource) returns
//! `Result<Response, Error>`. Construction never fails: options are accepted
//! permissively, and problems such as an unusable adapter configuration are
//! reported by the first request instead.
//!
//! # Example
//!
//! ```rust
//! use http_resource::error::{Error, TransportError, TransportErrorKind};
//!
//! let error: Error = TransportError::new(TransportErrorKind::Timeout, "too slow").into();
//! assert!(error.status().is_none());
//! assert!(matches!(error, Error::Transport(ref e) if e.is_timeout()));
//! ```

use thiserror::Error;

pub use crate::connection::{HttpError, TransportError, TransportErrorKind};

/// Unified error for all request failures.
///
/// Nothing is retried or recovered by this crate; the error reaches the
/// caller exactly as the transport reported it.
#[derive(Clone, Debug, Error)]
pub enum Error {
    /// The server responded with a 4xx or 5xx status.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The transport could not obtain a response.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    /// Returns the response status for [`Error::Http`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => Some(e.status),
            Self::Transport(_) => None,
        }
    }
}
