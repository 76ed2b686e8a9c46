//! CORS middleware configuration for cross-origin requests.
//!
//! The OTP endpoints are called directly from browser and mobile clients, so
//! any origin is accepted.

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Preflight cache lifetime in seconds
pub const CORS_MAX_AGE: usize = 3600;

/// Creates the CORS middleware.
pub fn create_cors() -> Cors {
    tracing::debug!("Configuring permissive CORS");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
        ])
        .max_age(CORS_MAX_AGE)
}
