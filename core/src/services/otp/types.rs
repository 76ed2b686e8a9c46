//! Types for OTP service results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a `CodeDelivery` did with a passcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to a notifier, which accepted it
    Sent {
        /// Provider message identifier
        message_id: String,
    },
    /// Not sent anywhere; the caller receives the passcode (demo mode)
    Disclosed,
}

/// Result of issuing a challenge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChallengeIssued {
    /// The passcode went out-of-band and is not returned
    Delivered {
        message_id: String,
        expires_at: DateTime<Utc>,
    },
    /// Demo mode: the passcode is returned to the caller
    Disclosed {
        code: String,
        expires_at: DateTime<Utc>,
    },
}

impl ChallengeIssued {
    /// Whether the passcode was delivered out-of-band
    pub fn delivered(&self) -> bool {
        matches!(self, ChallengeIssued::Delivered { .. })
    }

    /// The passcode, only present in demo mode
    pub fn code(&self) -> Option<&str> {
        match self {
            ChallengeIssued::Disclosed { code, .. } => Some(code),
            ChallengeIssued::Delivered { .. } => None,
        }
    }

    /// When the issued passcode stops being accepted
    pub fn expires_at(&self) -> DateTime<Utc> {
        match self {
            ChallengeIssued::Delivered { expires_at, .. }
            | ChallengeIssued::Disclosed { expires_at, .. } => *expires_at,
        }
    }
}

/// Why a verification was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationFailure {
    /// No challenge is pending for the subject
    NoPending,
    /// The challenge existed but its lifetime had elapsed; it is now removed
    Expired,
    /// The submitted passcode differs; the challenge stays pending
    Mismatch,
}

impl VerificationFailure {
    /// Stable machine-readable reason
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationFailure::NoPending => "no_pending",
            VerificationFailure::Expired => "expired",
            VerificationFailure::Mismatch => "mismatch",
        }
    }
}

impl std::fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of verifying a passcode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The passcode matched and has been consumed
    Verified,
    /// Normal negative result
    Rejected(VerificationFailure),
}

impl VerifyOutcome {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerifyOutcome::Verified)
    }

    /// The rejection reason, if any
    pub fn failure(&self) -> Option<VerificationFailure> {
        match self {
            VerifyOutcome::Verified => None,
            VerifyOutcome::Rejected(reason) => Some(*reason),
        }
    }
}
