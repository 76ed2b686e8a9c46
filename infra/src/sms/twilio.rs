//! Twilio SMS Service Implementation
//!
//! Sends passcode messages through the Twilio API. Each message is sent in a
//! single attempt; a failure is reported to the caller, who may request a new
//! passcode.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use tracing::{debug, error, info, warn};
use twilio::{Client, OutboundMessage};

use ff_shared::config::SmsConfig;
use ff_shared::phone::mask_phone_number;

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// Maximum body length accepted by Twilio
pub const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
}

impl TwilioConfig {
    /// Take the Twilio credentials out of the SMS configuration
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_ACCOUNT_SID not set".to_string(),
            ));
        }
        if config.auth_token.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_AUTH_TOKEN not set".to_string(),
            ));
        }
        if config.from_number.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "TWILIO_PHONE_NUMBER not set".to_string(),
            ));
        }
        if !config.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_PHONE_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
        })
    }
}

impl std::fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("from_number", &self.from_number)
            .finish()
    }
}

/// Normalize a destination to E.164
///
/// Numbers without a leading `+` are assumed to be US numbers.
pub fn normalize_destination(phone: &str) -> Result<String, InfrastructureError> {
    let phone = phone.trim();
    if phone.starts_with('+') {
        match phone.parse::<PhoneNumber>() {
            Ok(parsed) => {
                let formatted = parsed.format().mode(Mode::E164).to_string();
                debug!(phone = %mask_phone_number(&formatted), "Validated phone number");
                Ok(formatted)
            }
            Err(e) => {
                error!(phone = %mask_phone_number(phone), "Invalid phone number format: {}", e);
                Err(InfrastructureError::Sms(format!(
                    "Invalid phone number format: {}",
                    e
                )))
            }
        }
    } else {
        let with_country = format!("+1{}", phone);
        match with_country.parse::<PhoneNumber>() {
            Ok(parsed) => {
                let formatted = parsed.format().mode(Mode::E164).to_string();
                warn!(
                    phone = %mask_phone_number(&formatted),
                    "Phone number missing country code, assumed US"
                );
                Ok(formatted)
            }
            Err(_) => Err(InfrastructureError::Sms(
                "Phone number must be in E.164 format (e.g., +1234567890)".to_string(),
            )),
        }
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self { client, config })
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = normalize_destination(phone_number)?;

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        info!(
            phone = %mask_phone_number(&to),
            message_length = message.len(),
            "Sending SMS via Twilio"
        );

        let outbound = OutboundMessage::new(&self.config.from_number, &to, message);
        match self.client.send_message(outbound).await {
            Ok(response) => {
                info!(
                    phone = %mask_phone_number(&to),
                    sid = %response.sid,
                    "SMS sent successfully"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(phone = %mask_phone_number(&to), "Twilio rejected SMS: {}", e);
                Err(InfrastructureError::Sms(format!("Failed to send SMS: {}", e)))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
