//! Bridge from an `SmsService` provider to the core `Notifier` capability

use async_trait::async_trait;

use ff_core::{Notifier, NotifierError};

use super::sms_service::SmsService;

/// Exposes any SMS provider as a core `Notifier`
pub struct SmsNotifier<S: SmsService> {
    service: S,
}

impl<S: SmsService> SmsNotifier<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// The wrapped provider
    pub fn service(&self) -> &S {
        &self.service
    }
}

#[async_trait]
impl<S: SmsService> Notifier for SmsNotifier<S> {
    async fn send(&self, destination: &str, message: &str) -> Result<String, NotifierError> {
        self.service
            .send_sms(destination, message)
            .await
            .map_err(|e| NotifierError::new(e.to_string()))
    }

    fn name(&self) -> &str {
        self.service.provider_name()
    }
}
