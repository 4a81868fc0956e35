//! Error types for the tracker-link client library.

use thiserror::Error;

/// Errors returned by the tracker-link clients.
///
/// Every failure is surfaced synchronously to the caller; the library never
/// retries internally. UI layers are expected to match on the variant to pick
/// a message.
#[derive(Error, Debug)]
pub enum TrackerLinkError {
    /// Local brute-force lockout is active for the email being signed in.
    /// No network request was made.
    #[error("account is locked due to too many failed attempts, try again in {minutes_remaining} minutes")]
    AccountLocked {
        /// Whole minutes (rounded) until the lockout expires.
        minutes_remaining: u64,
    },

    /// The identity endpoint rejected the credentials. Carries the remote
    /// error message verbatim.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    /// A store operation was attempted with no authenticated principal.
    /// No network request was made.
    #[error("not authenticated")]
    NotAuthenticated,

    /// The remote endpoint answered with a non-success status.
    #[error("server error ({status_code}): {message}")]
    ServerError {
        /// HTTP status code reported by the endpoint.
        status_code: u16,
        /// Error message extracted from the response body.
        message: String,
    },

    /// The remote endpoint answered successfully but the body did not have
    /// the expected shape (e.g. a push response without a generated key).
    #[error("protocol error: {0}")]
    ProtocolError(String),

    /// Client construction or configuration failure.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// Transport-level failure (connect, timeout, TLS, ...).
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON (de)serialization failure.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type used throughout tracker-link.
pub type Result<T> = std::result::Result<T, TrackerLinkError>;
