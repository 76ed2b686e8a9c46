//! The two ways a passcode can reach its subject

use async_trait::async_trait;
use ff_shared::phone::mask_phone_number;
use std::sync::Arc;

use crate::errors::{DeliveryError, DomainError, DomainResult};

use super::traits::{CodeDelivery, Notifier};
use super::types::Delivery;

/// Sends the passcode through a `Notifier`
pub struct NotifierDelivery {
    notifier: Arc<dyn Notifier>,
}

impl NotifierDelivery {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// Text sent to the subject
    pub fn message_for(code: &str) -> String {
        format!("Your FitFlex OTP is: {}", code)
    }
}

#[async_trait]
impl CodeDelivery for NotifierDelivery {
    async fn deliver(&self, subject: &str, code: &str) -> Result<Delivery, DeliveryError> {
        let message = Self::message_for(code);
        match self.notifier.send(subject, &message).await {
            Ok(message_id) => Ok(Delivery::Sent { message_id }),
            Err(e) => {
                tracing::error!(
                    phone = %mask_phone_number(subject),
                    provider = self.notifier.name(),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Notifier failed to deliver passcode"
                );
                Err(DeliveryError {
                    provider: self.notifier.name().to_string(),
                    message: e.message,
                })
            }
        }
    }
}

/// Demo-mode delivery: nothing leaves the process, the caller gets the code
#[derive(Debug, Default, Clone, Copy)]
pub struct DisclosingDelivery;

#[async_trait]
impl CodeDelivery for DisclosingDelivery {
    async fn deliver(&self, subject: &str, code: &str) -> Result<Delivery, DeliveryError> {
        tracing::info!(
            phone = %mask_phone_number(subject),
            event = "otp_disclosed",
            "[DEMO MODE] passcode returned to caller instead of being delivered"
        );
        tracing::debug!(phone = %mask_phone_number(subject), code = code, "[DEMO MODE] passcode");
        Ok(Delivery::Disclosed)
    }
}

/// Pick the delivery mode from the `notifier_enabled` flag
///
/// # Returns
/// * `NotifierDelivery` when enabled and a notifier is available
/// * `DisclosingDelivery` when disabled (any notifier is ignored)
/// * `Err(DomainError::Validation)` when enabled without a notifier; this
///   never falls back to disclosure
pub fn select_delivery(
    notifier_enabled: bool,
    notifier: Option<Arc<dyn Notifier>>,
) -> DomainResult<Arc<dyn CodeDelivery>> {
    match (notifier_enabled, notifier) {
        (true, Some(notifier)) => {
            tracing::info!(provider = notifier.name(), "Passcodes will be delivered out-of-band");
            Ok(Arc::new(NotifierDelivery::new(notifier)))
        }
        (true, None) => Err(DomainError::validation(
            "notifier delivery is enabled but no notifier is configured",
        )),
        (false, _) => {
            tracing::warn!("No notifier enabled, passcodes will be disclosed to callers (demo mode)");
            Ok(Arc::new(DisclosingDelivery))
        }
    }
}
