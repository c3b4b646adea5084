//! Backend response envelope.
//!
//! Every payload arrives wrapped as `{ "success": bool, "message": string, "data": T }`.

use serde::Deserialize;

/// Wrapper around every backend response body. `success` is implied by
/// the status code and not read.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Error body, either the envelope or the framework's default error shape.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Best human-readable description, falling back to the status reason.
    pub fn describe(self, fallback: &str) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_defaults_to_null() {
        let env: ApiEnvelope = serde_json::from_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert!(env.data.is_null());
        assert_eq!(env.message.as_deref(), Some("ok"));
    }

    #[test]
    fn error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Username taken","error":"Bad Request"}"#).unwrap();
        assert_eq!(body.describe("Bad Request"), "Username taken");

        let body: ErrorBody = serde_json::from_str(r#"{"error":"Forbidden"}"#).unwrap();
        assert_eq!(body.describe("x"), "Forbidden");

        assert_eq!(ErrorBody::default().describe("Unauthorized"), "Unauthorized");
    }
}
