//! Opaque bearer credential.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// An opaque bearer token proving an authenticated identity to the backend.
///
/// No expiry, scope, or structure is assumed; the backend is the sole
/// authority on validity.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token string, rejecting empty or all-whitespace values.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        let token = token.into();
        let token = token.trim();
        if token.is_empty() {
            return Err(InvalidInputError::EmptyCredential.into());
        }
        Ok(Self(token.to_string()))
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or persisting
    /// the credential slot.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Formats the `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

// Hide token value in Debug output
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}
