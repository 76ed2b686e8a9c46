//! One-time passcode configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{parse_or, EnvLookup};

/// Default lifetime of an issued passcode (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// OTP lifecycle configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Milliseconds a passcode stays valid after issuance
    #[serde(default = "default_ttl_ms")]
    pub ttl_ms: u64,

    /// Seconds between background purges of expired passcodes (0 disables)
    #[serde(default)]
    pub sweep_interval_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_TTL_MS,
            sweep_interval_secs: 0,
        }
    }
}

impl OtpConfig {
    /// Load from `OTP_TTL_MS` and `OTP_SWEEP_INTERVAL_SECS`
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let ttl_ms = parse_or(lookup, "OTP_TTL_MS", DEFAULT_TTL_MS);
        Self {
            // A zero lifetime would make every passcode dead on arrival
            ttl_ms: if ttl_ms == 0 { DEFAULT_TTL_MS } else { ttl_ms },
            sweep_interval_secs: parse_or(lookup, "OTP_SWEEP_INTERVAL_SECS", 0),
        }
    }

    /// Passcode lifetime as a `Duration`
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Sweep interval, `None` when sweeping is disabled
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_secs > 0).then(|| Duration::from_secs(self.sweep_interval_secs))
    }
}

fn default_ttl_ms() -> u64 {
    DEFAULT_TTL_MS
}
