use serde::{Deserialize, Serialize};

/// Success body returned by the identity endpoint's sign-up and sign-in
/// operations.
///
/// Only `localId`, `email` and `idToken` are consumed by the gateway; the
/// remaining fields are modeled as optional for completeness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    /// Operation kind reported by the endpoint.
    #[serde(default)]
    pub kind: Option<String>,

    /// Server-assigned account identifier (the principal's uid).
    pub local_id: String,

    /// Email the account authenticated with.
    pub email: String,

    /// Display name, if the account has one.
    #[serde(default)]
    pub display_name: Option<String>,

    /// Short-lived bearer token for subsequent store calls.
    #[serde(default)]
    pub id_token: Option<String>,

    /// Whether the email was already registered (sign-in only).
    #[serde(default)]
    pub registered: Option<bool>,

    /// Refresh token for obtaining new id tokens (unused by the gateway).
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Token lifetime in seconds, as a string.
    #[serde(default)]
    pub expires_in: Option<String>,
}
