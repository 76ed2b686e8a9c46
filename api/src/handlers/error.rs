use actix_web::{
    error::{InternalError, JsonPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use thiserror::Error;

use crate::dto::otp::{OtpResponse, PHONE_AND_OTP_REQUIRED, PHONE_REQUIRED};

/// Errors returned by the OTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request fields
    #[error("{0}")]
    BadRequest(String),

    /// The SMS provider could not deliver the passcode
    #[error("Failed to send OTP")]
    DeliveryFailed,

    /// Unexpected failure in the service layer
    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::DeliveryFailed | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(detail) = self {
            tracing::error!(error = %detail, "Request failed");
        }
        HttpResponse::build(self.status_code()).json(OtpResponse::failure(self.to_string()))
    }
}

/// Map unreadable JSON bodies to the same 400 a request with missing
/// fields gets
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = if req.path().ends_with("/verify-otp") {
        PHONE_AND_OTP_REQUIRED
    } else {
        PHONE_REQUIRED
    };
    tracing::debug!(path = req.path(), error = %err, "Rejected request body");

    InternalError::from_response(err, ApiError::bad_request(message).error_response()).into()
}
