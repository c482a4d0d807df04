//! Shared error envelope returned by every endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error envelope: `{"error": {"type": ..., "message": ...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

/// The body nested under `error`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error type code, one of [`error_codes`]
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable, client-safe message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                kind: kind.into(),
                message: message.into(),
                details: None,
                timestamp: Utc::now(),
            },
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.error.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error type codes used across the service
pub mod error_codes {
    pub const AUTHORIZATION: &str = "AUTHORIZATION";
    pub const BAD_REQUEST: &str = "BADREQUEST";
    pub const CONFLICT: &str = "CONFLICT";
    pub const INTERNAL: &str = "INTERNAL";
    pub const NOT_FOUND: &str = "NOTFOUND";
    pub const PAYLOAD_TOO_LARGE: &str = "PAYLOADTOOLARGE";
    pub const SERVICE_UNAVAILABLE: &str = "SERVICE_UNAVAILABLE";
    pub const UNSUPPORTED_MEDIA_TYPE: &str = "UNSUPPORTEDMEDIATYPE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let resp = ErrorResponse::new(error_codes::AUTHORIZATION, "invalid token");
        let json = serde_json::to_value(&resp).unwrap();

        assert_eq!(json["error"]["type"], "AUTHORIZATION");
        assert_eq!(json["error"]["message"], "invalid token");
        assert!(json["error"].get("details").is_none());
    }

    #[test]
    fn test_add_detail() {
        let resp = ErrorResponse::new(error_codes::BAD_REQUEST, "invalid request parameters")
            .add_detail("email", vec!["email"]);
        let details = resp.error.details.unwrap();
        assert_eq!(details["email"], serde_json::json!(["email"]));
    }
}
