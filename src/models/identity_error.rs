use serde::{Deserialize, Serialize};

/// Error body returned by the identity endpoint: `{"error":{"code","message"}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityErrorResponse {
    /// Error details, absent on malformed bodies.
    #[serde(default)]
    pub error: Option<IdentityError>,
}

/// Inner error object of an identity endpoint failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityError {
    /// Numeric error code (mirrors the HTTP status in practice).
    #[serde(default)]
    pub code: i64,

    /// Machine-readable message, e.g. `EMAIL_NOT_FOUND` or `INVALID_PASSWORD`.
    pub message: String,
}

impl IdentityErrorResponse {
    /// Extract the remote error message from a raw response body, falling
    /// back to a generic message when the body does not parse.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<IdentityErrorResponse>(body)
            .ok()
            .and_then(|resp| resp.error)
            .map(|err| err.message)
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}
