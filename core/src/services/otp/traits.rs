//! Traits for out-of-band delivery integration

use async_trait::async_trait;

use crate::errors::{DeliveryError, NotifierError};

use super::types::Delivery;

/// External capability that delivers a message to a destination (e.g. SMS)
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `message` to `destination`
    ///
    /// # Returns
    /// * `Ok(message_id)` - Provider identifier of the accepted message
    /// * `Err(NotifierError)` - Network or provider failure
    async fn send(&self, destination: &str, message: &str) -> Result<String, NotifierError>;

    /// Provider name used in logs and errors
    fn name(&self) -> &str;
}

/// How a freshly issued passcode reaches its subject
///
/// Selected once when the service is built; verification never looks at it.
#[async_trait]
pub trait CodeDelivery: Send + Sync {
    /// Hand `code` to `subject`
    async fn deliver(&self, subject: &str, code: &str) -> Result<Delivery, DeliveryError>;
}
