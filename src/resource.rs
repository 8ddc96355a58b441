//! The [`Resource`] type: an addressable endpoint with bound configuration.
//!
//! A resource owns a [`Connection`] built once from its url and
//! [`ResourceOptions`]. Sub-resources are derived by joining a relative path
//! onto the url; they get a brand-new connection built from the very same
//! options record and customization hook, so authentication, timeouts and
//! headers carry over to any depth.
//!
//! # Example
//!
//! ```rust,ignore
//! use http_resource::{Headers, Resource, ResourceOptions};
//!
//! let site = Resource::new(
//!     "http://example.com",
//!     ResourceOptions::builder().user("adam").password("mypasswd").build(),
//! );
//!
//! let comments = site.subresource("posts/1/comments");
//! comments.post(
//!     "Good article.",
//!     Some(&Headers::from([("Content-Type", "text/plain")])),
//! )?;
//!
//! let orders = Resource::new("http://example.com/orders", ResourceOptions::default());
//! orders.get(None)?;                           // GET http://example.com/orders
//! orders.subresource(1).get(None)?;            // GET http://example.com/orders/1
//! orders.subresource("1/items").delete(None)?; // DELETE http://example.com/orders/1/items
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::{HookPrecedence, ResourceOptions};
use crate::connection::{Connection, ConnectionBuilder, Headers, Method, Response};
use crate::error::Error;
use crate::payload::{prepare_payload, Payload};
use crate::url::join_url;

/// Value of the `accept` header every resource sends.
///
/// It replaces any `accept` header supplied through the options.
pub const DEFAULT_ACCEPT: &str = "*/*; q=0.5, application/xml";

/// Library version from Cargo.toml.
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent when no override is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("http-resource/", env!("CARGO_PKG_VERSION"));

/// Caller-supplied hook that adjusts the transport configuration.
///
/// The hook runs once per connection build, after every standard option has
/// been applied, so it can override any of them. Only the `user-agent`
/// header is set after it.
pub type Customizer = Arc<dyn Fn(&mut ConnectionBuilder) + Send + Sync>;

/// An HTTP endpoint with bound connection configuration.
///
/// A resource never changes after construction: issuing requests does not
/// mutate it, and deriving a sub-resource returns a new, independent value.
///
/// # Thread Safety
///
/// `Resource` is `Send + Sync`. Each resource owns its own connection, so
/// separate resources can be used from separate threads freely.
///
/// # Example
///
/// ```rust
/// use http_resource::{Resource, ResourceOptions, DEFAULT_ACCEPT, DEFAULT_USER_AGENT};
///
/// let orders = Resource::new("http://example.com/orders", ResourceOptions::default());
/// let first = orders.subresource(1);
///
/// assert_eq!(first.url(), "http://example.com/orders/1");
/// assert_eq!(first.to_string(), "http://example.com/orders/1");
/// assert_eq!(first.headers().get("accept"), Some(DEFAULT_ACCEPT));
/// assert_eq!(first.headers().get("user-agent"), Some(DEFAULT_USER_AGENT));
/// ```
pub struct Resource {
    url: String,
    options: Arc<ResourceOptions>,
    customizer: Option<Customizer>,
    connection: Connection,
}

// Verify Resource is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Resource>();
};

impl Resource {
    /// Creates a resource for `url`.
    ///
    /// Construction never fails. A url or adapter configuration that cannot
    /// be used is reported by the first request.
    pub fn new(url: impl Into<String>, options: impl Into<Arc<ResourceOptions>>) -> Self {
        Self::build(url.into(), options.into(), None)
    }

    /// Creates a resource whose connection is adjusted by `customizer`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_resource::{Resource, ResourceOptions};
    ///
    /// let api = Resource::with_customizer(
    ///     "http://example.com/api",
    ///     ResourceOptions::default(),
    ///     |conn| {
    ///         conn.headers_mut().insert("X-Api-Version", "2");
    ///     },
    /// );
    ///
    /// assert_eq!(api.headers().get("x-api-version"), Some("2"));
    /// assert_eq!(api.subresource("users").headers().get("x-api-version"), Some("2"));
    /// ```
    pub fn with_customizer<F>(
        url: impl Into<String>,
        options: impl Into<Arc<ResourceOptions>>,
        customizer: F,
    ) -> Self
    where
        F: Fn(&mut ConnectionBuilder) + Send + Sync + 'static,
    {
        let customizer: Customizer = Arc::new(customizer);
        Self::build(url.into(), options.into(), Some(customizer))
    }

    fn build(url: String, options: Arc<ResourceOptions>, customizer: Option<Customizer>) -> Self {
        let mut builder = Connection::builder(url.clone());
        builder.verify_ssl(options.verify_ssl());
        builder.adapter(
            options.transport_kind().clone(),
            options.transport_kind_options().clone(),
        );

        if let Some(timeout) = options.timeout() {
            builder.timeout(timeout);
        }
        if let Some(open_timeout) = options.open_timeout() {
            builder.open_timeout(open_timeout);
        }

        let headers = builder.headers_mut();
        headers.merge(options.headers());
        headers.insert("accept", DEFAULT_ACCEPT);

        // Adds to the headers, so it must come after the merge above.
        if let Some(password) = options.password() {
            builder.basic_auth(options.user(), password.as_ref());
        }

        if let Some(customizer) = &customizer {
            customizer(&mut builder);
        }

        let mut connection = builder.build();
        connection.set_default_header(
            "user-agent",
            options.user_agent().unwrap_or(DEFAULT_USER_AGENT),
        );

        Self {
            url,
            options,
            customizer,
            connection,
        }
    }

    /// Returns the url this resource targets.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the options this resource was created with.
    ///
    /// Sub-resources share the same `Arc`.
    #[must_use]
    pub const fn options(&self) -> &Arc<ResourceOptions> {
        &self.options
    }

    /// Returns the customization hook, if any.
    #[must_use]
    pub const fn customizer(&self) -> Option<&Customizer> {
        self.customizer.as_ref()
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Returns the default headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        self.connection.headers()
    }

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] for 4xx/5xx responses (unless the
    /// [`RaiseError`](crate::RaiseError) policy was removed) and
    /// [`Error::Transport`] when no response was obtained.
    pub fn get(&self, additional_headers: Option<&Headers>) -> Result<Response, Error> {
        self.send(Method::Get, None, additional_headers)
    }

    /// Sends a HEAD request.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn head(&self, additional_headers: Option<&Headers>) -> Result<Response, Error> {
        self.send(Method::Head, None, additional_headers)
    }

    /// Sends a POST request with `payload` as the body.
    ///
    /// The body is produced by [`prepare_payload`].
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn post(
        &self,
        payload: impl Into<Payload>,
        additional_headers: Option<&Headers>,
    ) -> Result<Response, Error> {
        self.send(Method::Post, Some(prepare_payload(payload)), additional_headers)
    }

    /// Sends a PUT request with `payload` as the body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn put(
        &self,
        payload: impl Into<Payload>,
        additional_headers: Option<&Headers>,
    ) -> Result<Response, Error> {
        self.send(Method::Put, Some(prepare_payload(payload)), additional_headers)
    }

    /// Sends a PATCH request with `payload` as the body.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn patch(
        &self,
        payload: impl Into<Payload>,
        additional_headers: Option<&Headers>,
    ) -> Result<Response, Error> {
        self.send(Method::Patch, Some(prepare_payload(payload)), additional_headers)
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`get`](Self::get).
    pub fn delete(&self, additional_headers: Option<&Headers>) -> Result<Response, Error> {
        self.send(Method::Delete, None, additional_headers)
    }

    /// Prepares a request body the way the write methods do.
    #[must_use]
    pub fn prepare_payload(&self, payload: impl Into<Payload>) -> Vec<u8> {
        prepare_payload(payload)
    }

    /// Derives a sub-resource for `suburl`, preserving configuration.
    ///
    /// The new resource targets [`join_url`]`(self.url(), suburl)` and is built
    /// from the same options and customization hook. The parent is not
    /// modified, so sub-resources can be nested to any depth.
    ///
    /// # Example
    ///
    /// ```rust
    /// use http_resource::{Resource, ResourceOptions};
    ///
    /// let site = Resource::new("http://example.com", ResourceOptions::default());
    /// let comments = site.subresource("posts").subresource(1).subresource("comments");
    ///
    /// assert_eq!(comments.url(), "http://example.com/posts/1/comments");
    /// assert!(std::sync::Arc::ptr_eq(comments.options(), site.options()));
    /// ```
    #[must_use]
    pub fn subresource(&self, suburl: impl fmt::Display) -> Self {
        self.derive(&suburl.to_string(), None)
    }

    /// Derives a sub-resource, supplying a customization hook.
    ///
    /// With the default [`HookPrecedence::Inherited`], `customizer` is only
    /// used when this resource has no hook of its own. With
    /// [`HookPrecedence::MostSpecific`] it always replaces the inherited one.
    #[must_use]
    pub fn subresource_with<F>(&self, suburl: impl fmt::Display, customizer: F) -> Self
    where
        F: Fn(&mut ConnectionBuilder) + Send + Sync + 'static,
    {
        let customizer: Customizer = Arc::new(customizer);
        self.derive(&suburl.to_string(), Some(customizer))
    }

    fn derive(&self, suburl: &str, supplied: Option<Customizer>) -> Self {
        let customizer = match self.options.hook_precedence() {
            HookPrecedence::Inherited => self.customizer.clone().or(supplied),
            HookPrecedence::MostSpecific => supplied.or_else(|| self.customizer.clone()),
        };
        Self::build(
            join_url(&self.url, suburl),
            Arc::clone(&self.options),
            customizer,
        )
    }

    fn send(
        &self,
        method: Method,
        body: Option<Vec<u8>>,
        additional_headers: Option<&Headers>,
    ) -> Result<Response, Error> {
        let headers = additional_headers.map_or_else(
            || self.headers().clone(),
            |extra| self.headers().merged(extra),
        );
        self.connection
            .run_request(method, self.url.as_str(), body, headers)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("url", &self.url)
            .field("options", &self.options)
            .field("customizer", &self.customizer.as_ref().map(|_| "Fn(..)"))
            .field("connection", &self.connection)
            .finish()
    }
}
