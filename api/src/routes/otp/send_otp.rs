use actix_web::{web, HttpResponse};
use validator::Validate;

use ff_core::{ChallengeIssued, ChallengeStore, DomainError};
use ff_shared::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::otp::{OtpResponse, SendOtpRequest, PHONE_REQUIRED};
use crate::handlers::ApiError;

/// Handler for POST /api/send-otp
///
/// # Request Body
///
/// ```json
/// { "phone": "+15551234567" }
/// ```
///
/// # Responses
///
/// * `200` - `{ "success": true, "message": "OTP sent via SMS" }`
/// * `200` - `{ "success": true, "message": "OTP generated (demo mode)", "demoOtp": "482910" }`
/// * `400` - `{ "success": false, "message": "Phone is required" }`
/// * `500` - `{ "success": false, "message": "Failed to send OTP" }`
pub async fn send_otp<S>(
    state: web::Data<AppState<S>>,
    request: web::Json<SendOtpRequest>,
) -> Result<HttpResponse, ApiError>
where
    S: ChallengeStore + 'static,
{
    if request.validate().is_err() {
        return Err(ApiError::bad_request(PHONE_REQUIRED));
    }
    let phone = request.phone();

    match state.otp_service.request_challenge(phone).await {
        Ok(ChallengeIssued::Delivered { .. }) => {
            Ok(HttpResponse::Ok().json(OtpResponse::success("OTP sent via SMS")))
        }
        Ok(ChallengeIssued::Disclosed { code, .. }) => Ok(HttpResponse::Ok().json(OtpResponse::demo(code))),
        Err(DomainError::Validation { .. }) => Err(ApiError::bad_request(PHONE_REQUIRED)),
        Err(DomainError::Delivery(e)) => {
            tracing::error!(
                phone = %mask_phone_number(phone),
                provider = %e.provider,
                error = %e.message,
                "Failed to send OTP"
            );
            Err(ApiError::DeliveryFailed)
        }
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}
