//! Domain-specific error types and error handling.
//!
//! Negative verification results are not errors: they are reported through
//! `VerifyOutcome::Rejected`. The types here cover malformed input, failed
//! out-of-band delivery and store backend failures.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or malformed subject/code on entry
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The notifier could not deliver the passcode. The challenge that was
    /// stored before delivery stays valid.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// Store backend failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    /// Whether this error came from the delivery channel
    pub fn is_delivery(&self) -> bool {
        matches!(self, DomainError::Delivery(_))
    }
}

/// Failure to hand a passcode to its recipient
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to deliver passcode via {provider}: {message}")]
pub struct DeliveryError {
    /// Name of the notifier that failed
    pub provider: String,
    /// Provider-reported failure
    pub message: String,
}

/// Error reported by a `Notifier` implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct NotifierError {
    pub message: String,
}

impl NotifierError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_error_converts_into_domain_error() {
        let err: DomainError = DeliveryError {
            provider: "Twilio".to_string(),
            message: "connection refused".to_string(),
        }
        .into();

        assert!(err.is_delivery());
        assert_eq!(
            err.to_string(),
            "Failed to deliver passcode via Twilio: connection refused"
        );
    }

    #[test]
    fn test_validation_display() {
        let err = DomainError::validation("subject is required");
        assert!(!err.is_delivery());
        assert_eq!(err.to_string(), "Validation error: subject is required");
    }
}
