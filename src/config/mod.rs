//! Configuration types for resources.
//!
//! This module provides the option record a [`Resource`](crate::Resource)
//! captures at construction and shares, unchanged, with every sub-resource
//! derived from it.
//!
//! # Overview
//!
//! - [`ResourceOptions`]: the immutable option record
//! - [`ResourceOptionsBuilder`]: a builder for constructing it
//! - [`HookPrecedence`]: which customization hook a sub-resource keeps
//! - [`Password`]: a password newtype with masked debug output
//!
//! Every option is optional; leaving one unset means "use the backend
//! default", never "disable".
//!
//! # Example
//!
//! ```rust
//! use http_resource::ResourceOptions;
//! use std::time::Duration;
//!
//! let options = ResourceOptions::builder()
//!     .user("adam")
//!     .password("mypasswd")
//!     .timeout(Duration::from_secs(30))
//!     .header("X-Tenant", "acme")
//!     .build();
//!
//! assert_eq!(options.user(), Some("adam"));
//! assert!(options.verify_ssl());
//! ```

mod newtypes;

pub use newtypes::Password;

use std::time::Duration;

use crate::connection::{AdapterOptions, Headers, TransportKind};

/// Which customization hook a derived sub-resource uses when one is supplied
/// at derivation time and the parent already has its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HookPrecedence {
    /// The parent's hook is kept and the newly supplied one is ignored.
    #[default]
    Inherited,
    /// The hook supplied at derivation replaces the parent's.
    MostSpecific,
}

/// Connection options captured when a resource is created.
///
/// # Thread Safety
///
/// `ResourceOptions` is `Clone`, `Send`, and `Sync`. Resources hold it behind
/// an `Arc` so that derived sub-resources share the very same record.
///
/// # Example
///
/// ```rust
/// use http_resource::{ResourceOptions, TransportKind};
///
/// let options = ResourceOptions::default();
/// assert!(matches!(options.transport_kind(), TransportKind::Reqwest));
/// assert!(options.password().is_none());
/// assert!(options.headers().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ResourceOptions {
    transport_kind: TransportKind,
    transport_kind_options: AdapterOptions,
    user: Option<String>,
    password: Option<Password>,
    timeout: Option<Duration>,
    open_timeout: Option<Duration>,
    verify_ssl: bool,
    headers: Headers,
    user_agent: Option<String>,
    hook_precedence: HookPrecedence,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        ResourceOptionsBuilder::new().build()
    }
}

// Verify ResourceOptions is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourceOptions>();
};

impl ResourceOptions {
    /// Creates a new builder for constructing `ResourceOptions`.
    #[must_use]
    pub fn builder() -> ResourceOptionsBuilder {
        ResourceOptionsBuilder::new()
    }

    /// Returns the selected transport backend.
    #[must_use]
    pub const fn transport_kind(&self) -> &TransportKind {
        &self.transport_kind
    }

    /// Returns the backend-specific options.
    #[must_use]
    pub const fn transport_kind_options(&self) -> &AdapterOptions {
        &self.transport_kind_options
    }

    /// Returns the basic authentication user, if configured.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the basic authentication password, if configured.
    #[must_use]
    pub const fn password(&self) -> Option<&Password> {
        self.password.as_ref()
    }

    /// Returns the whole-request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the connection-open timeout, if configured.
    #[must_use]
    pub const fn open_timeout(&self) -> Option<Duration> {
        self.open_timeout
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    /// Returns the extra default headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Returns the user agent override, if configured.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Returns the customization hook precedence for sub-resources.
    #[must_use]
    pub const fn hook_precedence(&self) -> HookPrecedence {
        self.hook_precedence
    }
}

/// Builder for constructing [`ResourceOptions`] instances.
///
/// # Defaults
///
/// - `transport_kind`: [`TransportKind::Reqwest`]
/// - `transport_kind_options`: empty
/// - `user`, `password`: `None` (no basic authentication)
/// - `timeout`, `open_timeout`: `None` (backend defaults)
/// - `verify_ssl`: `true`
/// - `headers`: empty
/// - `user_agent`: `None` (the library identifier is used)
/// - `hook_precedence`: [`HookPrecedence::Inherited`]
#[derive(Debug, Default)]
pub struct ResourceOptionsBuilder {
    transport_kind: Option<TransportKind>,
    transport_kind_options: AdapterOptions,
    user: Option<String>,
    password: Option<Password>,
    timeout: Option<Duration>,
    open_timeout: Option<Duration>,
    verify_ssl: Option<bool>,
    headers: Headers,
    user_agent: Option<String>,
    hook_precedence: Option<HookPrecedence>,
}

impl ResourceOptionsBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the transport backend.
    #[must_use]
    pub fn transport_kind(mut self, kind: TransportKind) -> Self {
        self.transport_kind = Some(kind);
        self
    }

    /// Sets all backend-specific options at once.
    #[must_use]
    pub fn transport_kind_options(mut self, options: AdapterOptions) -> Self {
        self.transport_kind_options = options;
        self
    }

    /// Adds a single backend-specific option.
    #[must_use]
    pub fn transport_kind_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.transport_kind_options.insert(key.into(), value.into());
        self
    }

    /// Sets the basic authentication user.
    #[must_use]
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Sets the basic authentication password.
    ///
    /// Basic authentication is only applied when a password is set.
    #[must_use]
    pub fn password(mut self, password: impl Into<Password>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the whole-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection-open timeout.
    #[must_use]
    pub const fn open_timeout(mut self, open_timeout: Duration) -> Self {
        self.open_timeout = Some(open_timeout);
        self
    }

    /// Enables or disables TLS certificate verification.
    #[must_use]
    pub const fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Sets all extra default headers at once.
    #[must_use]
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single extra default header.
    #[must_use]
    pub fn header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Overrides the default user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the customization hook precedence for sub-resources.
    #[must_use]
    pub const fn hook_precedence(mut self, precedence: HookPrecedence) -> Self {
        self.hook_precedence = Some(precedence);
        self
    }

    /// Builds the [`ResourceOptions`].
    ///
    /// Building never fails: unset options fall back to their defaults.
    #[must_use]
    pub fn build(self) -> ResourceOptions {
        ResourceOptions {
            transport_kind: self.transport_kind.unwrap_or_default(),
            transport_kind_options: self.transport_kind_options,
            user: self.user,
            password: self.password,
            timeout: self.timeout,
            open_timeout: self.open_timeout,
            verify_ssl: self.verify_ssl.unwrap_or(true),
            headers: self.headers,
            user_agent: self.user_agent,
            hook_precedence: self.hook_precedence.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let options = ResourceOptions::builder().build();

        assert!(matches!(options.transport_kind(), TransportKind::Reqwest));
        assert!(options.transport_kind_options().is_empty());
        assert!(options.user().is_none());
        assert!(options.password().is_none());
        assert!(options.timeout().is_none());
        assert!(options.open_timeout().is_none());
        assert!(options.verify_ssl());
        assert!(options.headers().is_empty());
        assert!(options.user_agent().is_none());
        assert_eq!(options.hook_precedence(), HookPrecedence::Inherited);
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let options = ResourceOptions::builder()
            .transport_kind_option("max_redirects", 3)
            .user("adam")
            .password("mypasswd")
            .timeout(Duration::from_secs(30))
            .open_timeout(Duration::from_secs(2))
            .verify_ssl(false)
            .header("X-Tenant", "acme")
            .user_agent("MyApp/1.0")
            .hook_precedence(HookPrecedence::MostSpecific)
            .build();

        assert_eq!(
            options.transport_kind_options().get("max_redirects"),
            Some(&json!(3))
        );
        assert_eq!(options.user(), Some("adam"));
        assert_eq!(options.password().map(AsRef::as_ref), Some("mypasswd"));
        assert_eq!(options.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(options.open_timeout(), Some(Duration::from_secs(2)));
        assert!(!options.verify_ssl());
        assert_eq!(options.headers().get("x-tenant"), Some("acme"));
        assert_eq!(options.user_agent(), Some("MyApp/1.0"));
        assert_eq!(options.hook_precedence(), HookPrecedence::MostSpecific);
    }

    #[test]
    fn test_headers_replaces_previous_headers() {
        let options = ResourceOptions::builder()
            .header("X-One", "1")
            .headers(Headers::from([("X-Two", "2")]))
            .build();

        assert!(!options.headers().contains("x-one"));
        assert_eq!(options.headers().get("x-two"), Some("2"));
    }

    #[test]
    fn test_debug_masks_password() {
        let options = ResourceOptions::builder().password("hunter2").build();
        let debug = format!("{options:?}");

        assert!(debug.contains("ResourceOptions"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_options_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResourceOptions>();
    }
}
