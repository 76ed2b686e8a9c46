//! Domain entities representing core business objects.

pub mod challenge;

// Re-export commonly used types
pub use challenge::{Challenge, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_CODE, MIN_CODE};
