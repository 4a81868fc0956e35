//! Credential service: authenticates against the remote identity endpoint and
//! owns the current session.
//!
//! [`AuthClient`] is the only writer of the current principal and id token.
//! Login attempts are gated by a local per-email lockout (five rejected
//! attempts lock the email for fifteen minutes) evaluated strictly before any
//! network call. The session fields and the lockout map live behind a single
//! mutex so that "successful login clears lockout" is atomic.

pub mod login_tracker;

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::auth::login_tracker::LoginTracker;
use crate::error::{Result, TrackerLinkError};
use crate::models::{
    AccountStatus, AppUser, IdentityErrorResponse, IdentityResponse, PasswordResetRequest,
    SignInRequest,
};

/// Production identity endpoint. Override with
/// [`AuthClientBuilder::identity_url`] to target an emulator.
pub const DEFAULT_IDENTITY_URL: &str = "https://identitytoolkit.googleapis.com/v1";

/// Consistent read of the current session, taken once at the start of a store
/// call. A snapshot never outlives the request it was taken for.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    /// Identifier of the current principal.
    pub uid: String,
    /// Bearer token for the document store, if the identity endpoint issued one.
    pub id_token: Option<String>,
}

/// Session fields and lockout map, guarded together.
#[derive(Debug, Default)]
struct SessionState {
    current_user: Option<AppUser>,
    id_token: Option<String>,
    login_tracker: LoginTracker,
}

/// Client for the identity endpoint.
///
/// Cheap to clone; clones share the same session state.
///
/// # Examples
///
/// ```rust,no_run
/// use tracker_link::AuthClient;
///
/// # async fn example() -> tracker_link::Result<()> {
/// let auth = AuthClient::builder().api_key("web-api-key").build()?;
///
/// let user = auth.login("a@b.com", "secret").await?;
/// assert!(auth.is_authenticated());
/// println!("logged in as {}", user.email);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AuthClient {
    http_client: reqwest::Client,
    identity_url: String,
    api_key: String,
    session: Arc<Mutex<SessionState>>,
}

impl AuthClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> AuthClientBuilder {
        AuthClientBuilder::new()
    }

    /// Register a new account and make it the current session.
    ///
    /// Registration is not subject to the login lockout; the lockout exists
    /// to slow password guessing against existing accounts.
    pub async fn register(&self, email: &str, password: &str) -> Result<AppUser> {
        let url = self.operation_url("accounts:signUp");
        debug!("[AUTH] Register request for '{}'", email);

        let response = self
            .http_client
            .post(&url)
            .json(&SignInRequest::new(email, password))
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = IdentityErrorResponse::message_from_body(&body);
            warn!("[AUTH] Register failed for '{}': {}", email, message);
            return Err(TrackerLinkError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }

        let result: IdentityResponse = response.json().await?;
        info!("[AUTH] Register succeeded for '{}', uid={}", email, result.local_id);

        let user = AppUser {
            uid: result.local_id.clone(),
            email: result.email.clone(),
            registration_date: Some(Utc::now()),
            last_login_date: None,
            account_status: AccountStatus::Active,
        };

        let mut session = self.session.lock();
        session.current_user = Some(user.clone());
        session.id_token = result.id_token;
        Ok(user)
    }

    /// Authenticate an existing account and make it the current session.
    ///
    /// If the email is locked out, fails with
    /// [`TrackerLinkError::AccountLocked`] before any network request. A
    /// rejected attempt increments the email's failure counter; the fifth
    /// rejection locks the email for fifteen minutes. Transport failures do
    /// not count as attempts.
    pub async fn login(&self, email: &str, password: &str) -> Result<AppUser> {
        self.session
            .lock()
            .login_tracker
            .check_lockout(email, Instant::now())?;

        let url = self.operation_url("accounts:signInWithPassword");
        debug!("[AUTH] Login request for '{}'", email);

        let response = self
            .http_client
            .post(&url)
            .json(&SignInRequest::new(email, password))
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = IdentityErrorResponse::message_from_body(&body);

            let locked = self
                .session
                .lock()
                .login_tracker
                .record_failed_login(email, Instant::now());
            if let Some(duration) = locked {
                warn!("[AUTH] Login failed for '{}', lockout engaged", email);
                return Err(TrackerLinkError::AccountLocked {
                    minutes_remaining: duration.as_secs() / 60,
                });
            }

            warn!("[AUTH] Login failed for '{}': {}", email, message);
            return Err(TrackerLinkError::InvalidCredentials(message));
        }

        let result: IdentityResponse = response.json().await?;
        info!("[AUTH] Login succeeded for '{}', uid={}", email, result.local_id);

        let user = AppUser {
            uid: result.local_id.clone(),
            email: result.email.clone(),
            registration_date: None,
            last_login_date: Some(Utc::now()),
            account_status: AccountStatus::Active,
        };

        // Session update and lockout clear happen under one lock
        let mut session = self.session.lock();
        session.current_user = Some(user.clone());
        session.id_token = result.id_token;
        session.login_tracker.record_successful_login(email);
        Ok(user)
    }

    /// Clear the current principal and token. Always succeeds.
    pub fn logout(&self) {
        let mut session = self.session.lock();
        session.current_user = None;
        session.id_token = None;
        debug!("[AUTH] Logged out");
    }

    /// Ask the identity endpoint to send a password-reset email.
    ///
    /// Does not touch lockout state.
    pub async fn send_password_reset(&self, email: &str) -> Result<()> {
        let url = self.operation_url("accounts:sendOobCode");
        debug!("[AUTH] Password reset request for '{}'", email);

        let response = self
            .http_client
            .post(&url)
            .json(&PasswordResetRequest::new(email))
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = IdentityErrorResponse::message_from_body(&body);
            warn!("[AUTH] Password reset failed for '{}': {}", email, message);
            return Err(TrackerLinkError::ServerError {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    /// Token of the current principal, if any.
    pub fn id_token(&self) -> Option<String> {
        self.session.lock().id_token.clone()
    }

    /// The current principal, if any.
    pub fn current_user(&self) -> Option<AppUser> {
        self.session.lock().current_user.clone()
    }

    /// Whether a principal is currently signed in.
    pub fn is_authenticated(&self) -> bool {
        self.session.lock().current_user.is_some()
    }

    /// One-shot consistent read of uid + token for a store call. Returns
    /// `None` when no principal is signed in.
    pub fn session_snapshot(&self) -> Option<SessionSnapshot> {
        let session = self.session.lock();
        session.current_user.as_ref().map(|user| SessionSnapshot {
            uid: user.uid.clone(),
            id_token: session.id_token.clone(),
        })
    }

    fn operation_url(&self, operation: &str) -> String {
        format!("{}/{}?key={}", self.identity_url, operation, self.api_key)
    }
}

/// Builder for configuring [`AuthClient`] instances.
pub struct AuthClientBuilder {
    api_key: Option<String>,
    identity_url: String,
    timeout: Duration,
}

impl AuthClientBuilder {
    fn new() -> Self {
        Self {
            api_key: None,
            identity_url: DEFAULT_IDENTITY_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the identity endpoint API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the identity endpoint base URL (e.g. a local emulator).
    pub fn identity_url(mut self, url: impl Into<String>) -> Self {
        self.identity_url = url.into();
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// A missing API key is not fatal here; the identity endpoint will reject
    /// the calls instead, and a warning is logged so the misconfiguration is
    /// visible.
    pub fn build(self) -> Result<AuthClient> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.is_empty() {
            warn!("[AUTH] No API key configured; identity endpoint calls will fail");
        }

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TrackerLinkError::ConfigurationError(e.to_string()))?;

        Ok(AuthClient {
            http_client,
            identity_url: self.identity_url.trim_end_matches('/').to_string(),
            api_key,
            session: Arc::new(Mutex::new(SessionState::default())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in_client() -> AuthClient {
        let client = AuthClient::builder().api_key("test-key").build().unwrap();
        {
            let mut session = client.session.lock();
            session.current_user = Some(AppUser {
                uid: "user-123".to_string(),
                email: "a@b.com".to_string(),
                registration_date: None,
                last_login_date: Some(Utc::now()),
                account_status: AccountStatus::Active,
            });
            session.id_token = Some("token-abc".to_string());
        }
        client
    }

    #[test]
    fn test_builder_defaults() {
        let client = AuthClient::builder().api_key("test-key").build().unwrap();
        assert_eq!(client.identity_url, DEFAULT_IDENTITY_URL);
        assert_eq!(client.api_key, "test-key");
    }

    #[test]
    fn test_builder_without_api_key_still_builds() {
        let client = AuthClient::builder().build().unwrap();
        assert!(client.api_key.is_empty());
    }

    #[test]
    fn test_builder_trims_identity_url() {
        let client = AuthClient::builder()
            .api_key("test-key")
            .identity_url("http://localhost:9099/identitytoolkit.googleapis.com/v1/")
            .build()
            .unwrap();
        assert_eq!(
            client.operation_url("accounts:signUp"),
            "http://localhost:9099/identitytoolkit.googleapis.com/v1/accounts:signUp?key=test-key"
        );
    }

    #[test]
    fn test_fresh_client_is_unauthenticated() {
        let client = AuthClient::builder().api_key("test-key").build().unwrap();
        assert!(!client.is_authenticated());
        assert!(client.current_user().is_none());
        assert!(client.id_token().is_none());
        assert!(client.session_snapshot().is_none());
    }

    #[test]
    fn test_snapshot_pairs_uid_and_token() {
        let client = signed_in_client();
        let snapshot = client.session_snapshot().unwrap();
        assert_eq!(snapshot.uid, "user-123");
        assert_eq!(snapshot.id_token.as_deref(), Some("token-abc"));
    }

    #[test]
    fn test_logout_clears_session() {
        let client = signed_in_client();
        assert!(client.is_authenticated());

        client.logout();

        assert!(!client.is_authenticated());
        assert!(client.id_token().is_none());
        assert!(client.session_snapshot().is_none());
    }

    #[test]
    fn test_clones_share_session() {
        let client = signed_in_client();
        let clone = client.clone();
        assert!(clone.is_authenticated());

        clone.logout();
        assert!(!client.is_authenticated());
    }
}
