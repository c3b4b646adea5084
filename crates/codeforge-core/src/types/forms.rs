//! User-supplied login and registration input.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, InvalidInputError};

/// Username and password submitted to the login endpoint.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use codeforge_core::LoginCredentials;
///
/// let creds = LoginCredentials::new("alice", "pw");
/// assert_eq!(creds.username(), "alice");
/// ```
#[derive(Clone, Serialize)]
pub struct LoginCredentials {
    username: String,
    password: String,
}

impl LoginCredentials {
    /// Create new login credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A new-account request.
///
/// Registration does not establish a session; callers log in separately.
#[derive(Clone, Serialize)]
pub struct Registration {
    username: String,
    email: String,
    password: String,
}

impl Registration {
    /// Build a registration request. All three fields are required.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, Error> {
        let registration = Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        };

        for (field, value) in [
            ("username", &registration.username),
            ("email", &registration.email),
            ("password", &registration.password),
        ] {
            if value.trim().is_empty() {
                return Err(InvalidInputError::MissingField { field }.into());
            }
        }

        Ok(registration)
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_hides_password_in_debug() {
        let creds = LoginCredentials::new("alice", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn login_serializes_wire_fields() {
        let creds = LoginCredentials::new("alice", "pw");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"username": "alice", "password": "pw"}));
    }

    #[test]
    fn registration_requires_every_field() {
        let err = Registration::new("alice", " ", "pw").unwrap_err();
        assert!(err.to_string().contains("email is required"));
        assert!(Registration::new("", "a@b.c", "pw").is_err());
        assert!(Registration::new("alice", "a@b.c", "").is_err());
    }

    #[test]
    fn registration_hides_password_in_debug() {
        let reg = Registration::new("alice", "alice@example.com", "hunter2").unwrap();
        let debug = format!("{:?}", reg);
        assert!(debug.contains("alice@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
