//! # HTTP Resource
//!
//! A small HTTP resource abstraction: a [`Resource`] is a url plus a
//! configured connection, able to issue GET, HEAD, POST, PUT, PATCH and
//! DELETE requests and to derive sub-resources that inherit its
//! configuration.
//!
//! ## Overview
//!
//! This crate provides:
//! - Strongly typed, immutable options via [`ResourceOptions`] and
//!   [`ResourceOptionsBuilder`]
//! - Basic authentication, TLS verification, timeouts and default headers
//!   baked into each resource's [`Connection`]
//! - Sub-resource derivation by path joining, sharing the parent's options
//! - Customization hooks that adjust the [`ConnectionBuilder`] directly
//! - Pluggable backends through [`TransportKind`], with a blocking reqwest
//!   client as the default
//! - Request bodies prepared as JSON, or passed through when already raw
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use http_resource::{Headers, Resource, ResourceOptions};
//! use serde_json::json;
//!
//! let orders = Resource::new(
//!     "http://example.com/orders",
//!     ResourceOptions::builder().user("admin").password("mypasswd").build(),
//! );
//!
//! orders.get(None)?;                            // GET http://example.com/orders
//! orders.subresource(1).get(None)?;             // GET http://example.com/orders/1
//! orders.subresource("1/items").delete(None)?;  // DELETE http://example.com/orders/1/items
//!
//! let created = orders.post(
//!     json!({"item": "book"}),
//!     Some(&Headers::from([("Content-Type", "application/json")])),
//! )?;
//! println!("{}", created.text());
//! ```
//!
//! ## Customization Hooks
//!
//! A hook runs after every standard option has been applied and can change
//! anything on the connection. Only the `user-agent` header is set after it.
//!
//! ```rust
//! use http_resource::{Resource, ResourceOptions};
//! use std::time::Duration;
//!
//! let site = Resource::with_customizer(
//!     "http://example.com",
//!     ResourceOptions::default(),
//!     |conn| {
//!         conn.timeout(Duration::from_secs(5)).clear_middleware();
//!     },
//! );
//!
//! // Sub-resources rebuild their connection with the same hook.
//! let posts = site.subresource("posts");
//! assert_eq!(posts.connection().timeout(), Some(Duration::from_secs(5)));
//! ```
//!
//! ## Errors
//!
//! Requests return [`Error::Http`] for 4xx/5xx statuses and
//! [`Error::Transport`] when no response could be obtained. Nothing is
//! retried.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration lives in the resource
//! - **Immutable resources**: requests and derivation never mutate a resource
//! - **Blocking**: every request blocks until a response or failure
//! - **Thread-safe**: all public types are `Send + Sync`

pub mod config;
pub mod connection;
pub mod error;
pub mod payload;
pub mod resource;
pub mod url;

// Re-export public types at crate root for convenience
pub use config::{HookPrecedence, Password, ResourceOptions, ResourceOptionsBuilder};
pub use error::Error;
pub use payload::{prepare_payload, Payload};
pub use resource::{
    Customizer, Resource, DEFAULT_ACCEPT, DEFAULT_USER_AGENT, LIBRARY_VERSION,
};
pub use url::join_url;

// Re-export transport types
pub use connection::{
    Adapter, AdapterFactory, AdapterOptions, AdapterSettings, Connection, ConnectionBuilder,
    Headers, HttpError, Method, Middleware, RaiseError, Request, Response, TransportError,
    TransportErrorKind, TransportKind,
};
