//! SMS delivery configuration

use serde::{Deserialize, Serialize};

use super::{parse_flag, EnvLookup};

/// SMS provider used when delivery is enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Twilio messaging API
    #[default]
    Twilio,
    /// Console output, for local development of the delivered path
    Mock,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "twilio" => Ok(SmsProvider::Twilio),
            "mock" | "console" => Ok(SmsProvider::Mock),
            other => Err(format!("Unknown SMS provider: {}", other)),
        }
    }
}

/// SMS service configuration
///
/// When `enabled` is false no message is sent at all and passcodes are handed
/// back to the caller (demo mode).
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Whether passcodes are delivered out-of-band
    pub enabled: bool,
    /// Provider used when enabled
    #[serde(default)]
    pub provider: SmsProvider,
    /// Twilio Account SID
    #[serde(default)]
    pub account_sid: String,
    /// Twilio Auth Token
    #[serde(default)]
    pub auth_token: String,
    /// Sender phone number (must be a Twilio number, E.164)
    #[serde(default)]
    pub from_number: String,
}

impl SmsConfig {
    /// Load from `USE_TWILIO`, `SMS_PROVIDER` and the `TWILIO_*` credentials
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Self {
        Self {
            enabled: parse_flag(lookup, "USE_TWILIO"),
            provider: lookup("SMS_PROVIDER")
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            account_sid: lookup("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: lookup("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: lookup("TWILIO_PHONE_NUMBER")
                .or_else(|| lookup("TWILIO_FROM_NUMBER"))
                .unwrap_or_default(),
        }
    }
}

impl std::fmt::Debug for SmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsConfig")
            .field("enabled", &self.enabled)
            .field("provider", &self.provider)
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_by_default() {
        let config = SmsConfig::from_lookup(&|_: &str| None);
        assert!(!config.enabled);
        assert_eq!(config.provider, SmsProvider::Twilio);
    }

    #[test]
    fn test_reads_twilio_credentials() {
        let lookup = |key: &str| match key {
            "USE_TWILIO" => Some("true".to_string()),
            "SMS_PROVIDER" => Some("mock".to_string()),
            "TWILIO_ACCOUNT_SID" => Some("ACtest".to_string()),
            "TWILIO_AUTH_TOKEN" => Some("secret".to_string()),
            "TWILIO_FROM_NUMBER" => Some("+15550001111".to_string()),
            _ => None,
        };
        let config = SmsConfig::from_lookup(&lookup);

        assert!(config.enabled);
        assert_eq!(config.provider, SmsProvider::Mock);
        assert_eq!(config.from_number, "+15550001111");
        assert!(!format!("{:?}", config).contains("secret"));
    }
}
