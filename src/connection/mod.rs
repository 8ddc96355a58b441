//! Transport layer: the configured HTTP client a resource sends through.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Connection`]: an immutable, configured client bound to a url
//! - [`ConnectionBuilder`]: its mutable configuration, handed to
//!   customization hooks
//! - [`Headers`]: case-insensitive header map
//! - [`Request`] / [`Response`]: what adapters and middleware see
//! - [`Middleware`] and the default [`RaiseError`] policy
//! - [`Adapter`], [`AdapterFactory`], [`TransportKind`]: pluggable backends
//! - [`HttpError`] / [`TransportError`]: the two failure shapes
//!
//! # Example
//!
//! ```rust,ignore
//! use http_resource::{Connection, Headers, Method};
//!
//! let connection = Connection::builder("http://example.com").build();
//! let response = connection.run_request(
//!     Method::Get,
//!     "http://example.com/orders",
//!     None,
//!     Headers::from([("Accept", "application/json")]),
//! )?;
//! ```

mod adapter;
mod errors;
mod headers;
mod http_request;
mod http_response;
mod middleware;
mod transport;

pub use adapter::{
    Adapter, AdapterFactory, AdapterOptions, AdapterSettings, ReqwestAdapter,
    ReqwestAdapterFactory, TransportKind,
};
pub use errors::{HttpError, TransportError, TransportErrorKind};
pub use headers::Headers;
pub use http_request::{Method, Request};
pub use http_response::Response;
pub use middleware::{Middleware, RaiseError};
pub use transport::{Connection, ConnectionBuilder};
