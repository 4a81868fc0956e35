use serde::{Deserialize, Serialize};

/// Request body for the identity endpoint's send-reset-email operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordResetRequest {
    /// Out-of-band operation type, always `PASSWORD_RESET` here.
    pub request_type: String,

    /// Email address to send the reset link to.
    pub email: String,
}

impl PasswordResetRequest {
    pub fn new(email: &str) -> Self {
        Self {
            request_type: "PASSWORD_RESET".to_string(),
            email: email.to_string(),
        }
    }
}
