use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Local account status of a principal.
///
/// `Locked` is a purely local state driven by the failed-login tracker; it is
/// distinct from anything the identity endpoint knows about the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Account is usable.
    Active,
    /// Account is locally locked out after repeated failed logins.
    Locked,
}

/// The authenticated principal currently active in the process.
///
/// Created on successful login or registration, replaced on each successful
/// login, cleared on logout. Owned exclusively by [`AuthClient`]; the store
/// client only reads it through a session snapshot.
///
/// [`AuthClient`]: crate::AuthClient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppUser {
    /// Server-assigned identifier, stable for the account.
    pub uid: String,

    /// Email address the account was registered with.
    pub email: String,

    /// When the account was registered (set by register, not by login).
    #[serde(default)]
    pub registration_date: Option<DateTime<Utc>>,

    /// Most recent successful login time.
    #[serde(default)]
    pub last_login_date: Option<DateTime<Utc>>,

    /// Local account status.
    pub account_status: AccountStatus,
}
