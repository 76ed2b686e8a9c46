//! Challenge entity: a pending one-time passcode for a single subject.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the passcode
pub const CODE_LENGTH: usize = 6;

/// Smallest passcode that can be issued
pub const MIN_CODE: u32 = 100_000;

/// Largest passcode that can be issued
pub const MAX_CODE: u32 = 999_999;

/// Default expiration time for passcodes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// A pending passcode bound to one subject (phone number)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    /// Identifier of this issuance; a replacement gets a new one
    pub id: Uuid,

    /// Phone number (or equivalent identifier) being verified
    pub subject: String,

    /// The 6-digit passcode
    pub code: String,

    /// Timestamp when the passcode was issued
    pub created_at: DateTime<Utc>,

    /// Timestamp after which the passcode is invalid
    pub expires_at: DateTime<Utc>,
}

impl Challenge {
    /// Creates a challenge that expires `ttl` from now
    ///
    /// # Arguments
    ///
    /// * `subject` - The phone number the passcode is bound to
    /// * `code` - The passcode; format is the caller's responsibility
    /// * `ttl` - Time until expiry
    pub fn issue(subject: impl Into<String>, code: impl Into<String>, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            code: code.into(),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    /// Checks expiry against an explicit instant. Expiry is strict: a
    /// challenge is still valid at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Checks if the challenge has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Exact comparison of a submitted passcode, in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.len() == submitted.len()
            && constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
