//! Per-email failed-login tracking with lockout.
//!
//! Purely local, process-lifetime state: nothing here is persisted or shared
//! with the identity endpoint. Records are created lazily on the first failed
//! attempt for an email and cleared on the next successful login.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::error::{Result, TrackerLinkError};

/// Failed attempts allowed before an email is locked out.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// How long an email stays locked once the threshold is reached.
pub const LOCKOUT_DURATION: Duration = Duration::from_secs(15 * 60);

#[derive(Debug, Default, Clone)]
struct FailedLogin {
    attempts: u32,
    locked_until: Option<Instant>,
}

/// Tracks consecutive failed login attempts per email.
///
/// Methods take `now` explicitly so callers (and tests) control the clock;
/// [`AuthClient`](crate::AuthClient) passes `Instant::now()`.
#[derive(Debug, Default)]
pub struct LoginTracker {
    records: HashMap<String, FailedLogin>,
}

impl LoginTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`TrackerLinkError::AccountLocked`] if `email` is currently
    /// locked out. An expired lockout is not an error; the caller proceeds to
    /// the identity endpoint as usual.
    pub fn check_lockout(&self, email: &str, now: Instant) -> Result<()> {
        if let Some(locked_until) = self.records.get(email).and_then(|r| r.locked_until) {
            if now < locked_until {
                let remaining = locked_until - now;
                let minutes_remaining = (remaining.as_secs_f64() / 60.0).round() as u64;
                return Err(TrackerLinkError::AccountLocked { minutes_remaining });
            }
        }
        Ok(())
    }

    /// Record a rejected login attempt. Returns the lockout duration when
    /// this attempt pushed the email over the threshold (the caller turns
    /// that into an [`TrackerLinkError::AccountLocked`] failure).
    pub fn record_failed_login(&mut self, email: &str, now: Instant) -> Option<Duration> {
        let record = self.records.entry(email.to_string()).or_default();
        record.attempts += 1;

        if record.attempts >= MAX_FAILED_ATTEMPTS {
            record.locked_until = Some(now + LOCKOUT_DURATION);
            return Some(LOCKOUT_DURATION);
        }
        None
    }

    /// Clear all failed-attempt state for `email`.
    pub fn record_successful_login(&mut self, email: &str) {
        self.records.remove(email);
    }
}
