//! Client library for the MobileTracker data gateway.
//!
//! Two components, consumed together by application layers:
//!
//! - [`AuthClient`] — authenticates email/password principals against a
//!   remote identity endpoint, holds the current session (principal + id
//!   token), and enforces a local brute-force lockout before any remote
//!   call is attempted.
//! - [`StoreClient`] — performs CRUD against a hierarchical JSON document
//!   store, always scoped under the current principal's `users/{uid}`
//!   subtree and always carrying the current token.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tracker_link::{AuthClient, StoreClient};
//!
//! # async fn example() -> tracker_link::Result<()> {
//! let auth = Arc::new(AuthClient::builder().api_key("web-api-key").build()?);
//! auth.login("a@b.com", "secret").await?;
//!
//! let store = StoreClient::builder()
//!     .base_url("https://project.firebaseio.com")
//!     .auth(Arc::clone(&auth))
//!     .build()?;
//!
//! let key = store.push("clients", &serde_json::json!({"name": "Acme"})).await?;
//! let stored: Option<serde_json::Value> = store.get(&format!("clients/{}", key)).await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod models;
pub mod store;

pub use auth::{AuthClient, AuthClientBuilder, SessionSnapshot, DEFAULT_IDENTITY_URL};
pub use error::{Result, TrackerLinkError};
pub use models::{AccountStatus, AppUser};
pub use store::{StoreClient, StoreClientBuilder};
