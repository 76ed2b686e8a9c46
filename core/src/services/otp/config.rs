//! Configuration for the OTP service

use chrono::Duration;
use ff_shared::config::{otp::DEFAULT_TTL_MS, AppConfig};

/// Upper bound applied to the passcode lifetime (one day)
pub const MAX_TTL_MS: u64 = 24 * 60 * 60 * 1000;

/// Configuration for the OTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpServiceConfig {
    /// Milliseconds before an issued passcode expires
    pub ttl_ms: u64,
    /// Whether passcodes go out through a notifier; when false they are
    /// disclosed to the caller
    pub notifier_enabled: bool,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_TTL_MS,
            notifier_enabled: false,
        }
    }
}

impl OtpServiceConfig {
    /// Service settings taken from the application configuration
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            ttl_ms: config.otp.ttl_ms,
            notifier_enabled: config.sms.enabled,
        }
    }

    /// Set the passcode lifetime
    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Passcode lifetime, capped at `MAX_TTL_MS`
    pub fn ttl(&self) -> Duration {
        Duration::milliseconds(self.ttl_ms.min(MAX_TTL_MS) as i64)
    }
}
