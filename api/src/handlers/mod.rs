//! Error mapping from the service layer to HTTP responses

pub mod error;

pub use error::{json_error_handler, ApiError};
