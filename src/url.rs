//! Url joining for sub-resources.

/// Joins `url` and `suburl` as path segments.
///
/// Trailing separators on `url` and leading separators on `suburl` are
/// collapsed so exactly one `/` separates the two parts. Nothing else is
/// interpreted: query strings and fragments are opaque path text.
///
/// # Example
///
/// ```rust
/// use http_resource::join_url;
///
/// assert_eq!(join_url("http://example.com/orders", "1"), "http://example.com/orders/1");
/// assert_eq!(join_url("http://example.com/orders/", "/1"), "http://example.com/orders/1");
/// ```
#[must_use]
pub fn join_url(url: &str, suburl: &str) -> String {
    let head = url.trim_end_matches('/');
    let tail = suburl.trim_start_matches('/');
    format!("{head}/{tail}")
}
