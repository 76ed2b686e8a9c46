//! OTP service module for phone-number verification
//!
//! This module provides the passcode lifecycle:
//! - Passcode generation and storage with a fixed lifetime
//! - Single-use verification with lazy expiry
//! - Out-of-band delivery through a pluggable notifier, or disclosure to the
//!   caller in demo mode
//! - Optional periodic purge of expired passcodes

mod config;
mod delivery;
mod service;
mod sweeper;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::{OtpServiceConfig, MAX_TTL_MS};
pub use delivery::{select_delivery, DisclosingDelivery, NotifierDelivery};
pub use service::OtpService;
pub use sweeper::ExpirySweeper;
pub use traits::{CodeDelivery, Notifier};
pub use types::{ChallengeIssued, Delivery, VerificationFailure, VerifyOutcome};
