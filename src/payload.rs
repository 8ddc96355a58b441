//! Request body preparation.
//!
//! Bodies for `post`, `put` and `patch` go through [`prepare_payload`]:
//! structured values (JSON objects and arrays) are encoded as JSON text,
//! everything else is treated as an already prepared body and passed through
//! unchanged.

use serde::Serialize;
use serde_json::Value;

/// A value to be sent as a request body.
///
/// # Example
///
/// ```rust
/// use http_resource::Payload;
/// use serde_json::json;
///
/// let structured: Payload = json!({"title": "Good article."}).into();
/// let raw: Payload = "Good article.".into();
///
/// assert!(matches!(structured, Payload::Structured(_)));
/// assert!(matches!(raw, Payload::Raw(_)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// A value to encode as JSON.
    Structured(Value),
    /// Bytes sent as-is.
    Raw(Vec<u8>),
}

impl Payload {
    /// Converts any serializable value into a structured payload.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if `value` has no JSON representation
    /// (for example a map with non-string keys).
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_value(value).map(Self::Structured)
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

impl From<&str> for Payload {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.as_bytes().to_vec())
    }
}

impl From<String> for Payload {
    fn from(raw: String) -> Self {
        Self::Raw(raw.into_bytes())
    }
}

impl From<Vec<u8>> for Payload {
    fn from(raw: Vec<u8>) -> Self {
        Self::Raw(raw)
    }
}

impl From<&[u8]> for Payload {
    fn from(raw: &[u8]) -> Self {
        Self::Raw(raw.to_vec())
    }
}

/// Turns a payload into request body bytes.
///
/// Structured encoding is tried first. Only JSON objects and arrays are
/// accepted at the top level; any other value is passed through unchanged:
/// raw bytes as-is, a string scalar as its bare text, other scalars as their
/// JSON text.
///
/// # Example
///
/// ```rust
/// use http_resource::prepare_payload;
/// use serde_json::json;
///
/// assert_eq!(prepare_payload(json!({"a": 1})), br#"{"a":1}"#);
/// assert_eq!(prepare_payload(json!("raw-string")), b"raw-string");
/// assert_eq!(prepare_payload("raw-string"), b"raw-string");
/// ```
pub fn prepare_payload(payload: impl Into<Payload>) -> Vec<u8> {
    match payload.into() {
        Payload::Structured(value) => {
            encode_structured(&value).unwrap_or_else(|| passthrough(value))
        }
        Payload::Raw(bytes) => bytes,
    }
}

/// Encodes top-level objects and arrays; refuses everything else.
fn encode_structured(value: &Value) -> Option<Vec<u8>> {
    match value {
        Value::Object(_) | Value::Array(_) => serde_json::to_vec(value).ok(),
        _ => None,
    }
}

fn passthrough(value: Value) -> Vec<u8> {
    match value {
        Value::String(text) => text.into_bytes(),
        other => other.to_string().into_bytes(),
    }
}
