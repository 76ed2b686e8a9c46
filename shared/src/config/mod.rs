//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `otp` - One-time passcode lifetime and expiry sweeping
//! - `server` - HTTP server binding
//! - `sms` - Out-of-band delivery (Twilio) settings
//!
//! Every section can be built from the process environment (`from_env`) or
//! from an arbitrary key lookup (`from_lookup`), which keeps tests free of
//! global environment mutation.

pub mod environment;
pub mod otp;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;
pub use server::ServerConfig;
pub use sms::{SmsConfig, SmsProvider};

/// Lookup function used to resolve configuration keys
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Parse a typed value from a lookup, falling back to `default` when the key
/// is missing or malformed.
pub(crate) fn parse_or<T: std::str::FromStr>(lookup: EnvLookup<'_>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parse a boolean flag as `.env` files commonly spell them
/// ("true", "1", "yes", "on"; case-insensitive).
pub(crate) fn parse_flag(lookup: EnvLookup<'_>, key: &str) -> bool {
    lookup(key)
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes" | "on"))
        .unwrap_or(false)
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// OTP lifecycle configuration
    pub otp: OtpConfig,

    /// SMS delivery configuration
    pub sms: SmsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            otp: OtpConfig::default(),
            sms: SmsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, reading a `.env` file first
    /// when one is present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        let environment = Environment::from_lookup(lookup);
        Self {
            environment,
            server: ServerConfig::from_lookup(lookup),
            otp: OtpConfig::from_lookup(lookup),
            sms: SmsConfig::from_lookup(lookup),
            logging: LoggingConfig::for_environment(environment),
        }
    }
}
