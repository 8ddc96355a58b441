//! Pluggable transport backends.
//!
//! A [`Connection`](super::Connection) delegates the actual network exchange
//! to an [`Adapter`]. Which adapter is used is selected with a
//! [`TransportKind`]; the default is a blocking reqwest client.
//!
//! Adapters are built from an [`AdapterFactory`] once the connection's
//! configuration is final, so TLS and timeout settings changed by a
//! customization hook are honored.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::connection::errors::{TransportError, TransportErrorKind};
use crate::connection::http_request::Request;
use crate::connection::http_response::{parse_response_headers, Response};

/// Opaque, adapter-specific options.
///
/// The map is handed verbatim to the selected [`AdapterFactory`].
pub type AdapterOptions = BTreeMap<String, serde_json::Value>;

/// Final connection settings an adapter is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdapterSettings {
    /// Whether TLS certificates are verified.
    pub verify_ssl: bool,
    /// Whole-request timeout; `None` keeps the backend default.
    pub timeout: Option<Duration>,
    /// Connection-open timeout; `None` keeps the backend default.
    pub open_timeout: Option<Duration>,
}

impl Default for AdapterSettings {
    fn default() -> Self {
        Self {
            verify_ssl: true,
            timeout: None,
            open_timeout: None,
        }
    }
}

/// Sends a single request and returns the raw response.
pub trait Adapter: Send + Sync + fmt::Debug {
    /// Short backend name, used in logs.
    fn name(&self) -> &str;

    /// Performs the exchange, blocking until a response or failure.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response could be obtained. Error
    /// statuses are *not* errors at this level.
    fn call(&self, request: &Request) -> Result<Response, TransportError>;
}

/// Builds an [`Adapter`] from the final connection settings.
pub trait AdapterFactory: Send + Sync + fmt::Debug {
    /// Creates the adapter.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the options cannot be honored. The
    /// connection reports this error from every request it is asked to send.
    fn build(
        &self,
        settings: &AdapterSettings,
        options: &AdapterOptions,
    ) -> Result<Box<dyn Adapter>, TransportError>;
}

/// Selects the backend a connection sends requests through.
#[derive(Clone, Debug, Default)]
pub enum TransportKind {
    /// Blocking reqwest client with rustls.
    #[default]
    Reqwest,
    /// A caller-supplied backend.
    Custom(Arc<dyn AdapterFactory>),
}

impl TransportKind {
    /// Wraps a custom adapter factory.
    pub fn custom(factory: impl AdapterFactory + 'static) -> Self {
        Self::Custom(Arc::new(factory))
    }

    pub(crate) fn build(
        &self,
        settings: &AdapterSettings,
        options: &AdapterOptions,
    ) -> Result<Box<dyn Adapter>, TransportError> {
        match self {
            Self::Reqwest => ReqwestAdapterFactory.build(settings, options),
            Self::Custom(factory) => factory.build(settings, options),
        }
    }
}

/// Factory for the default [`ReqwestAdapter`].
///
/// Recognized options:
///
/// - `proxy`: proxy url used for every scheme
/// - `max_redirects`: number of redirects to follow; when unset or `0`,
///   3xx responses are returned as-is
#[derive(Clone, Copy, Debug, Default)]
pub struct ReqwestAdapterFactory;

impl AdapterFactory for ReqwestAdapterFactory {
    fn build(
        &self,
        settings: &AdapterSettings,
        options: &AdapterOptions,
    ) -> Result<Box<dyn Adapter>, TransportError> {
        let mut builder = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .danger_accept_invalid_certs(!settings.verify_ssl)
            .redirect(reqwest::redirect::Policy::none());

        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(open_timeout) = settings.open_timeout {
            builder = builder.connect_timeout(open_timeout);
        }

        for (key, value) in options {
            match key.as_str() {
                "proxy" => {
                    let url = value.as_str().ok_or_else(|| {
                        TransportError::new(
                            TransportErrorKind::Adapter,
                            format!("adapter option 'proxy' must be a string, got {value}"),
                        )
                    })?;
                    let proxy = reqwest::Proxy::all(url).map_err(|e| {
                        TransportError::with_source(
                            TransportErrorKind::Adapter,
                            format!("invalid proxy '{url}'"),
                            e,
                        )
                    })?;
                    builder = builder.proxy(proxy);
                }
                "max_redirects" => {
                    let limit = value
                        .as_u64()
                        .and_then(|n| usize::try_from(n).ok())
                        .ok_or_else(|| {
                            TransportError::new(
                                TransportErrorKind::Adapter,
                                format!(
                                    "adapter option 'max_redirects' must be a non-negative integer, got {value}"
                                ),
                            )
                        })?;
                    let policy = if limit == 0 {
                        reqwest::redirect::Policy::none()
                    } else {
                        reqwest::redirect::Policy::limited(limit)
                    };
                    builder = builder.redirect(policy);
                }
                other => {
                    tracing::debug!("Ignoring unknown reqwest adapter option '{}'", other);
                }
            }
        }

        let client = builder.build().map_err(|e| {
            TransportError::with_source(
                TransportErrorKind::Adapter,
                "failed to build reqwest client",
                e,
            )
        })?;

        Ok(Box::new(ReqwestAdapter { client }))
    }
}

/// Adapter backed by [`reqwest::blocking::Client`].
#[derive(Debug)]
pub struct ReqwestAdapter {
    client: reqwest::blocking::Client,
}

impl Adapter for ReqwestAdapter {
    fn name(&self) -> &str {
        "reqwest"
    }

    fn call(&self, request: &Request) -> Result<Response, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url.as_str());

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let res = builder.send()?;

        let status = res.status().as_u16();
        let headers = parse_response_headers(res.headers());
        let body = res.bytes()?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}
