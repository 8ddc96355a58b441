//! Newtype wrappers for configuration values.

use std::fmt;

/// A basic authentication password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so options can be logged without exposing it.
///
/// # Example
///
/// ```rust
/// use http_resource::Password;
///
/// let password = Password::new("mypasswd");
/// assert_eq!(password.as_ref(), "mypasswd");
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a password.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self::new(password)
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(password)
    }
}
