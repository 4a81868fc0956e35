use serde::{Deserialize, Serialize};

/// Request body for the identity endpoint's sign-up and sign-in operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    /// Email address of the account.
    pub email: String,

    /// Plaintext password, sent only to the identity endpoint.
    pub password: String,

    /// Ask the endpoint to return an id token with the response.
    pub return_secure_token: bool,
}

impl SignInRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            return_secure_token: true,
        }
    }
}
