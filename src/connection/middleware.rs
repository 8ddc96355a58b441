//! Request/response middleware.

use std::fmt;

use crate::connection::errors::HttpError;
use crate::connection::http_request::Request;
use crate::connection::http_response::Response;
use crate::error::Error;

/// A step run around every request a [`Connection`](super::Connection) sends.
///
/// Request hooks run in installation order before the adapter is called;
/// response hooks run in installation order after it returns. The first
/// response hook that returns an error aborts the request with that error.
///
/// # Example
///
/// ```rust
/// use http_resource::{Middleware, Request};
///
/// #[derive(Debug)]
/// struct RequestId(&'static str);
///
/// impl Middleware for RequestId {
///     fn on_request(&self, request: &mut Request) {
///         request.headers.insert("X-Request-Id", self.0);
///     }
/// }
/// ```
pub trait Middleware: Send + Sync + fmt::Debug {
    /// Inspects or rewrites the outgoing request.
    fn on_request(&self, _request: &mut Request) {}

    /// Inspects the response, optionally rejecting it.
    ///
    /// # Errors
    ///
    /// Any error returned here is propagated to the caller unchanged.
    fn on_response(&self, _request: &Request, _response: &Response) -> Result<(), Error> {
        Ok(())
    }
}

/// Rejects 4xx and 5xx responses with [`HttpError`].
///
/// Installed on every connection by default; remove it with
/// [`ConnectionBuilder::clear_middleware`](super::ConnectionBuilder::clear_middleware)
/// to receive error responses as ordinary [`Response`] values.
#[derive(Clone, Copy, Debug, Default)]
pub struct RaiseError;

impl Middleware for RaiseError {
    fn on_response(&self, request: &Request, response: &Response) -> Result<(), Error> {
        if (400..=599).contains(&response.status) {
            return Err(HttpError {
                method: request.method,
                url: request.url.clone(),
                status: response.status,
                headers: response.headers.clone(),
                body: response.text(),
            }
            .into());
        }
        Ok(())
    }
}
