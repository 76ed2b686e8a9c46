//! Shared utilities and common types for the FitFlex server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - Utility functions (phone normalization, validation and masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, LoggingConfig, OtpConfig, ServerConfig, SmsConfig};
pub use utils::phone;
