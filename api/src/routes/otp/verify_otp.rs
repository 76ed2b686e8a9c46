use actix_web::{web, HttpResponse};
use validator::Validate;

use ff_core::{ChallengeStore, DomainError, VerifyOutcome};

use crate::app::AppState;
use crate::dto::otp::{OtpResponse, VerifyOtpRequest, PHONE_AND_OTP_REQUIRED};
use crate::handlers::ApiError;

/// Handler for POST /api/verify-otp
///
/// # Request Body
///
/// ```json
/// { "phone": "+15551234567", "otp": "482910" }
/// ```
///
/// # Responses
///
/// * `200` - `{ "success": true, "message": "OTP verified" }`
/// * `400` - `{ "success": false, "message": "Phone & OTP required" }`
/// * `400` - `{ "success": false, "message": "No OTP requested" | "OTP expired" | "Invalid OTP", "reason": ... }`
pub async fn verify_otp<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: ChallengeStore + 'static,
{
    if request.validate().is_err() {
        return Err(ApiError::bad_request(PHONE_AND_OTP_REQUIRED));
    }

    match state
        .otp_service
        .verify_challenge(request.phone(), request.otp())
        .await
    {
        Ok(VerifyOutcome::Verified) => Ok(HttpResponse::Ok().json(OtpResponse::success("OTP verified"))),
        Ok(VerifyOutcome::Rejected(reason)) => {
            Ok(HttpResponse::BadRequest().json(OtpResponse::rejected(reason)))
        }
        Err(DomainError::Validation { .. }) => Err(ApiError::bad_request(PHONE_AND_OTP_REQUIRED)),
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}
