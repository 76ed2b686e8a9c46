//! # FitFlex Core
//!
//! Core business logic for the FitFlex OTP service.
//! This crate contains the `Challenge` entity, the challenge store interface
//! and its in-memory implementation, the OTP service, and the error types
//! that the infrastructure and API layers build on.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
