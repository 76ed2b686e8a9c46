//! Application state and route table

use actix_web::{web, HttpResponse};
use std::sync::Arc;

use ff_core::{ChallengeStore, OtpService};

use crate::handlers::json_error_handler;
use crate::routes::otp::{send_otp, verify_otp};

/// Application state that holds shared services
pub struct AppState<S: ChallengeStore> {
    pub otp_service: Arc<OtpService<S>>,
}

impl<S: ChallengeStore> AppState<S> {
    pub fn new(otp_service: Arc<OtpService<S>>) -> Self {
        Self { otp_service }
    }
}

/// Register routes, the JSON body configuration and the 404 fallback
///
/// The caller registers `web::Data<AppState<S>>` on the `App`.
pub fn configure<S: ChallengeStore + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api")
                .route("/send-otp", web::post().to(send_otp::<S>))
                .route("/verify-otp", web::post().to(verify_otp::<S>)),
        )
        .default_service(web::route().to(not_found));
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "fitflex-otp",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "Not found"
    }))
}
