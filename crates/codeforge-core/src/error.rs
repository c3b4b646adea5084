//! Error types for the CodeForge session layer.
//!
//! Every backend outcome other than success is classified into one of four
//! transport-facing variants. The remaining variants cover local failures:
//! bad input, credential storage, and response bodies that do not match the
//! documented shape.

use thiserror::Error;

/// The unified error type for session and transport operations.
#[derive(Debug, Error)]
pub enum Error {
    /// No response reached the client (DNS, connect, TLS, timeout).
    #[error("network unavailable: {message}")]
    NetworkUnavailable { message: String },

    /// HTTP 401: the credential is missing, invalid, or expired.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other 4xx. Caller-correctable, e.g. a validation failure.
    #[error("request rejected (HTTP {status}): {message}")]
    ClientError { status: u16, message: String },

    /// HTTP 5xx.
    #[error("server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    /// A success response whose body is not the documented shape.
    #[error("unexpected response body: {message}")]
    Decode { message: String },

    /// Input validation errors (base URL, credential, role, form fields).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// The durable credential slot could not be read or written.
    #[error("credential storage error: {message}")]
    Storage { message: String },
}

impl Error {
    /// Check if this is an authorization failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }

    /// Check if the request never got a response.
    pub fn is_network(&self) -> bool {
        matches!(self, Error::NetworkUnavailable { .. })
    }

    /// The HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Unauthorized { .. } => Some(401),
            Error::ClientError { status, .. } | Error::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage {
            message: err.to_string(),
        }
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// A credential must be a non-empty string.
    #[error("credential must not be empty")]
    EmptyCredential,

    /// A role outside the known set.
    #[error("unknown role '{value}'")]
    UnknownRole { value: String },

    /// A required form field was left blank.
    #[error("{field} is required")]
    MissingField { field: &'static str },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
