//! Raw responses returned by requests.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// A response as produced by the transport.
///
/// The body is kept as raw bytes; nothing is parsed unless the caller asks
/// for it through [`text`](Self::text) or [`json`](Self::json).
///
/// # Example
///
/// ```rust
/// use http_resource::Response;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("content-type".to_string(), vec!["application/json".to_string()]);
///
/// let response = Response::new(200, headers, br#"{"id":1}"#.to_vec());
/// assert!(response.is_success());
/// assert_eq!(response.header("Content-Type"), Some("application/json"));
///
/// let value: serde_json::Value = response.json().unwrap();
/// assert_eq!(value["id"], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates a new response.
    #[must_use]
    pub const fn new(status: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the first value of header `name`, ignoring case.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Collects reqwest response headers into lowercase name -> values.
pub(crate) fn parse_response_headers(
    headers: &reqwest::header::HeaderMap,
) -> HashMap<String, Vec<String>> {
    let mut result: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in headers {
        let key = name.as_str().to_lowercase();
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        result.entry(key).or_default().push(value);
    }
    result
}
