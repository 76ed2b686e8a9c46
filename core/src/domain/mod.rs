//! Domain layer containing business entities.

pub mod entities;

// Re-export commonly used domain types
pub use entities::{Challenge, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_CODE, MIN_CODE};
