//! The configured HTTP client a resource owns.
//!
//! This module provides [`ConnectionBuilder`], the mutable configuration a
//! customization hook receives, and [`Connection`], the immutable result.

use std::sync::Arc;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::connection::adapter::{Adapter, AdapterOptions, AdapterSettings, TransportKind};
use crate::connection::errors::TransportError;
use crate::connection::headers::Headers;
use crate::connection::http_request::{Method, Request};
use crate::connection::http_response::Response;
use crate::connection::middleware::{Middleware, RaiseError};
use crate::error::Error;

/// Mutable transport configuration.
///
/// Obtained from [`Connection::builder`]; every setting can be changed until
/// [`build`](Self::build) is called. A fresh builder verifies TLS, uses the
/// reqwest backend, has no default headers and has the [`RaiseError`]
/// middleware installed.
///
/// # Example
///
/// ```rust
/// use http_resource::Connection;
/// use std::time::Duration;
///
/// let mut builder = Connection::builder("http://example.com/orders");
/// builder
///     .timeout(Duration::from_secs(10))
///     .basic_auth(Some("admin"), "secret");
/// builder.headers_mut().insert("X-Tenant", "acme");
///
/// let connection = builder.build();
/// assert_eq!(connection.headers().get("x-tenant"), Some("acme"));
/// assert!(connection.headers().contains("authorization"));
/// ```
#[derive(Debug)]
pub struct ConnectionBuilder {
    url: String,
    settings: AdapterSettings,
    transport_kind: TransportKind,
    adapter_options: AdapterOptions,
    headers: Headers,
    middleware: Vec<Arc<dyn Middleware>>,
}

impl ConnectionBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            settings: AdapterSettings::default(),
            transport_kind: TransportKind::default(),
            adapter_options: AdapterOptions::new(),
            headers: Headers::new(),
            middleware: vec![Arc::new(RaiseError)],
        }
    }

    /// Returns the url the connection is bound to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Enables or disables TLS certificate verification.
    pub fn verify_ssl(&mut self, verify: bool) -> &mut Self {
        self.settings.verify_ssl = verify;
        self
    }

    /// Sets the whole-request timeout.
    pub fn timeout(&mut self, timeout: Duration) -> &mut Self {
        self.settings.timeout = Some(timeout);
        self
    }

    /// Sets the connection-open timeout.
    pub fn open_timeout(&mut self, open_timeout: Duration) -> &mut Self {
        self.settings.open_timeout = Some(open_timeout);
        self
    }

    /// Selects the backend and its options.
    pub fn adapter(&mut self, kind: TransportKind, options: AdapterOptions) -> &mut Self {
        self.transport_kind = kind;
        self.adapter_options = options;
        self
    }

    /// Returns the default headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the default headers for modification.
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Sets the `authorization` header for HTTP basic authentication.
    ///
    /// A missing user is encoded as the empty string.
    pub fn basic_auth(&mut self, user: Option<&str>, password: &str) -> &mut Self {
        let credentials = STANDARD.encode(format!("{}:{password}", user.unwrap_or_default()));
        self.headers
            .insert("authorization", format!("Basic {credentials}"));
        self
    }

    /// Appends a middleware to the stack.
    pub fn use_middleware(&mut self, middleware: impl Middleware + 'static) -> &mut Self {
        self.middleware.push(Arc::new(middleware));
        self
    }

    /// Removes every middleware, including the default [`RaiseError`].
    pub fn clear_middleware(&mut self) -> &mut Self {
        self.middleware.clear();
        self
    }

    /// Finalizes the configuration and builds the adapter.
    ///
    /// Adapter construction errors are not returned here; they are kept and
    /// reported by every request sent through the connection.
    #[must_use]
    pub fn build(self) -> Connection {
        let adapter = self
            .transport_kind
            .build(&self.settings, &self.adapter_options);

        if !self.settings.verify_ssl {
            tracing::warn!(
                "TLS certificate verification is disabled for {}",
                self.url
            );
        }
        if let Err(e) = &adapter {
            tracing::debug!("Adapter for {} could not be built: {}", self.url, e);
        }

        Connection {
            url: self.url,
            settings: self.settings,
            headers: self.headers,
            middleware: self.middleware,
            adapter,
        }
    }
}

/// A configured HTTP client bound to a url.
///
/// The configuration is fixed once built: sending requests never changes it.
/// `Connection` is `Send + Sync`; whether concurrent requests are safe is
/// inherited from the adapter.
#[derive(Debug)]
pub struct Connection {
    url: String,
    settings: AdapterSettings,
    headers: Headers,
    middleware: Vec<Arc<dyn Middleware>>,
    adapter: Result<Box<dyn Adapter>, TransportError>,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl Connection {
    /// Starts configuring a connection bound to `url`.
    #[must_use]
    pub fn builder(url: impl Into<String>) -> ConnectionBuilder {
        ConnectionBuilder::new(url)
    }

    /// Returns the url this connection is bound to.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.settings.verify_ssl
    }

    /// Returns the configured whole-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.settings.timeout
    }

    /// Returns the configured connection-open timeout.
    #[must_use]
    pub const fn open_timeout(&self) -> Option<Duration> {
        self.settings.open_timeout
    }

    /// Returns the adapter name, or `None` if it failed to build.
    #[must_use]
    pub fn adapter_name(&self) -> Option<&str> {
        self.adapter.as_ref().ok().map(|adapter| adapter.name())
    }

    /// Replaces the default header `name`.
    ///
    /// Only available to this crate: the owning resource finalizes the
    /// `user-agent` header after the customization hook has run.
    pub(crate) fn set_default_header(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name, value);
    }

    /// Sends one request through the middleware stack and the adapter.
    ///
    /// `headers` is used as the complete header set for the request; callers
    /// merge in the connection defaults themselves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the adapter is unusable or fails, and
    /// whatever a response middleware rejects the response with (by default
    /// [`Error::Http`] for 4xx/5xx statuses).
    pub fn run_request(
        &self,
        method: Method,
        url: impl Into<String>,
        body: Option<Vec<u8>>,
        headers: Headers,
    ) -> Result<Response, Error> {
        let adapter = self.adapter.as_ref().map_err(|e| e.clone())?;

        let mut request = Request {
            method,
            url: url.into(),
            headers,
            body,
        };
        for middleware in &self.middleware {
            middleware.on_request(&mut request);
        }

        tracing::debug!(
            "Sending {} {} via {}",
            request.method,
            request.url,
            adapter.name()
        );
        let response = adapter.call(&request)?;
        tracing::debug!(
            "Received {} for {} {}",
            response.status,
            request.method,
            request.url
        );

        for middleware in &self.middleware {
            middleware.on_response(&request, &response)?;
        }

        Ok(response)
    }
}
