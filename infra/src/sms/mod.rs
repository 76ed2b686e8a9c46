//! SMS Service Module
//!
//! This module provides the SMS providers used to deliver passcodes and the
//! factory that turns an `SmsConfig` into a core `CodeDelivery`.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Console output for development
//! - **Twilio Support**: Production SMS via Twilio API
//! - **Notifier Bridge**: Any provider can back the core `Notifier`

use std::sync::Arc;

use ff_core::{select_delivery, CodeDelivery, Notifier};
use ff_shared::config::{SmsConfig, SmsProvider};

use crate::InfrastructureError;

pub mod mock_sms;
pub mod notifier;
pub mod sms_service;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// Re-export commonly used types
pub use mock_sms::MockSmsService;
pub use notifier::SmsNotifier;
pub use sms_service::SmsService;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

#[cfg(test)]
mod tests;

/// Create the passcode delivery described by `config`
///
/// * `enabled = false` - passcodes are disclosed to the caller (demo mode)
/// * `enabled = true` - passcodes are sent through the configured provider
///
/// # Errors
///
/// Returns `InfrastructureError::Config` when delivery is enabled but the
/// provider cannot be built (missing Twilio credentials, feature disabled).
/// Disclosure is never used as a fallback for a broken provider.
pub fn create_code_delivery(
    config: &SmsConfig,
) -> Result<Arc<dyn CodeDelivery>, InfrastructureError> {
    let notifier = if config.enabled {
        Some(create_notifier(config)?)
    } else {
        None
    };

    select_delivery(config.enabled, notifier)
        .map_err(|e| InfrastructureError::Config(e.to_string()))
}

/// Build the notifier for the configured provider
pub fn create_notifier(config: &SmsConfig) -> Result<Arc<dyn Notifier>, InfrastructureError> {
    match config.provider {
        SmsProvider::Mock => {
            tracing::info!("Using mock SMS provider");
            Ok(Arc::new(SmsNotifier::new(MockSmsService::new())))
        }
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => {
            let twilio_config = TwilioConfig::from_sms_config(config)?;
            let service = TwilioSmsService::new(twilio_config)?;
            Ok(Arc::new(SmsNotifier::new(service)))
        }
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => Err(InfrastructureError::Config(
            "Twilio delivery requires the twilio-sms feature".to_string(),
        )),
    }
}
