//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the FitFlex OTP
//! service. It provides the concrete SMS providers behind the core
//! `Notifier` capability and picks the passcode delivery mode from
//! configuration.
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS provider (default)

/// SMS service module - External SMS providers
pub mod sms;

pub use sms::create_code_delivery;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
