//! Scoped data accessor: CRUD against the hierarchical JSON document store.
//!
//! Every path a caller supplies is rewritten under `users/{uid}` for the
//! current principal before it reaches the store, so callers can never
//! address another tenant's subtree. The current token travels as an `auth`
//! query parameter. All four verbs require an authenticated session and fail
//! with [`TrackerLinkError::NotAuthenticated`] before any network I/O when
//! there is none.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::AuthClient;
use crate::error::{Result, TrackerLinkError};

/// Client for the document-tree store.
///
/// Reads the current session from the [`AuthClient`] it was built with; it
/// never owns or mutates the session itself. Each call takes one session
/// snapshot at its start and uses it for the whole request.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use tracker_link::{AuthClient, StoreClient};
///
/// # async fn example() -> tracker_link::Result<()> {
/// let auth = Arc::new(AuthClient::builder().api_key("web-api-key").build()?);
/// auth.login("a@b.com", "secret").await?;
///
/// let store = StoreClient::builder()
///     .base_url("https://project.firebaseio.com")
///     .auth(Arc::clone(&auth))
///     .build()?;
///
/// let key = store.push("clients", &serde_json::json!({"name": "Acme"})).await?;
/// let client: Option<serde_json::Value> = store.get(&format!("clients/{}", key)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StoreClient {
    base_url: String,
    http_client: reqwest::Client,
    auth: Arc<AuthClient>,
}

impl StoreClient {
    /// Create a new builder for configuring the client.
    pub fn builder() -> StoreClientBuilder {
        StoreClientBuilder::new()
    }

    /// Read the value at `relative_path`.
    ///
    /// Absent data is not an error: a non-success status, an empty body and a
    /// literal `null` body all resolve to `Ok(None)`, per the store's
    /// convention for "no data at path".
    pub async fn get<T: DeserializeOwned>(&self, relative_path: &str) -> Result<Option<T>> {
        let url = self.scoped_url(relative_path)?;
        debug!("[STORE] GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("[STORE] GET {} => {}", url, status);
            return Ok(None);
        }

        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Overwrite the value at `relative_path`.
    pub async fn set<T: Serialize + ?Sized>(&self, relative_path: &str, value: &T) -> Result<()> {
        let url = self.scoped_url(relative_path)?;
        debug!("[STORE] PUT {}", url);

        let response = self.http_client.put(&url).json(value).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Append `value` under the collection at `relative_path`, returning the
    /// store-generated key.
    pub async fn push<T: Serialize + ?Sized>(
        &self,
        relative_path: &str,
        value: &T,
    ) -> Result<String> {
        let url = self.scoped_url(relative_path)?;
        debug!("[STORE] POST {}", url);

        let response = self.http_client.post(&url).json(value).send().await?;
        let response = Self::ensure_success(response).await?;

        let body: serde_json::Value = response.json().await?;
        parse_push_key(&body)
    }

    /// Delete the value at `relative_path`.
    pub async fn delete(&self, relative_path: &str) -> Result<()> {
        let url = self.scoped_url(relative_path)?;
        debug!("[STORE] DELETE {}", url);

        let response = self.http_client.delete(&url).send().await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    fn scoped_url(&self, relative_path: &str) -> Result<String> {
        let snapshot = self
            .auth
            .session_snapshot()
            .ok_or(TrackerLinkError::NotAuthenticated)?;
        Ok(build_scoped_url(
            &self.base_url,
            &snapshot.uid,
            snapshot.id_token.as_deref(),
            relative_path,
        ))
    }

    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        warn!("[STORE] Request failed: status={} message=\"{}\"", status, message);
        Err(TrackerLinkError::ServerError {
            status_code: status.as_u16(),
            message,
        })
    }
}

/// Build the absolute store URL for a caller-relative path.
///
/// Leading/trailing separators on the path are stripped, never interpreted,
/// and the result always sits under `users/{uid}`. The `.json` suffix is the
/// store's convention for addressing a JSON subtree; the token, when present,
/// is appended percent-escaped as the `auth` query parameter.
fn build_scoped_url(
    base_url: &str,
    uid: &str,
    id_token: Option<&str>,
    relative_path: &str,
) -> String {
    let path = relative_path.trim_matches('/');
    let full_path = if path.is_empty() {
        format!("users/{}", uid)
    } else {
        format!("users/{}/{}", uid, path)
    };

    let auth_query = match id_token {
        Some(token) if !token.is_empty() => format!("?auth={}", urlencoding::encode(token)),
        _ => String::new(),
    };

    format!("{}/{}.json{}", base_url, full_path, auth_query)
}

fn parse_push_key(body: &serde_json::Value) -> Result<String> {
    match body.get("name").and_then(|name| name.as_str()) {
        Some(key) => Ok(key.to_string()),
        None => Err(TrackerLinkError::ProtocolError(
            "push response did not contain a generated key".to_string(),
        )),
    }
}

/// Builder for configuring [`StoreClient`] instances.
pub struct StoreClientBuilder {
    base_url: Option<String>,
    auth: Option<Arc<AuthClient>>,
    timeout: Duration,
}

impl StoreClientBuilder {
    fn new() -> Self {
        Self {
            base_url: None,
            auth: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set the document store base URL, e.g. `https://project.firebaseio.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the credential service the accessor reads its session from.
    pub fn auth(mut self, auth: Arc<AuthClient>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// A missing base URL is not fatal here; every call will fail against the
    /// empty URL instead, and a warning is logged so the misconfiguration is
    /// visible.
    pub fn build(self) -> Result<StoreClient> {
        let auth = self.auth.ok_or_else(|| {
            TrackerLinkError::ConfigurationError("auth client is required".into())
        })?;

        let base_url = self.base_url.unwrap_or_default();
        if base_url.is_empty() {
            warn!("[STORE] No base URL configured; store calls will fail");
        }

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TrackerLinkError::ConfigurationError(e.to_string()))?;

        Ok(StoreClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
            auth,
        })
    }
}
