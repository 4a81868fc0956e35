//! Data models for the tracker-link client library.
//!
//! Defines the principal type and the request/response wire shapes of the
//! identity endpoint. Wire field names are camelCase, mapped through serde
//! rename attributes.

pub mod app_user;
pub mod identity_error;
pub mod identity_response;
pub mod password_reset_request;
pub mod sign_in_request;

#[cfg(test)]
mod tests;

pub use app_user::{AccountStatus, AppUser};
pub use identity_error::{IdentityError, IdentityErrorResponse};
pub use identity_response::IdentityResponse;
pub use password_reset_request::PasswordResetRequest;
pub use sign_in_request::SignInRequest;
