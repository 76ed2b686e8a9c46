use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use ff_core::VerificationFailure;

pub const PHONE_REQUIRED: &str = "Phone is required";
pub const PHONE_AND_OTP_REQUIRED: &str = "Phone & OTP required";

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Body of `POST /api/send-otp`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[serde(default)]
    #[validate(required, custom = "not_blank")]
    pub phone: Option<String>,
}

impl SendOtpRequest {
    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }
}

/// Body of `POST /api/verify-otp`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[validate(required, custom = "not_blank")]
    pub phone: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub otp: Option<String>,
}

impl VerifyOtpRequest {
    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }

    pub fn otp(&self) -> &str {
        self.otp.as_deref().unwrap_or_default()
    }
}

/// Response body shared by both OTP endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpResponse {
    pub success: bool,
    pub message: String,
    /// Passcode echoed back in demo mode only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_otp: Option<String>,
    /// Machine-readable rejection reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl OtpResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            demo_otp: None,
            reason: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(message)
        }
    }

    pub fn demo(code: impl Into<String>) -> Self {
        Self {
            demo_otp: Some(code.into()),
            ..Self::success("OTP generated (demo mode)")
        }
    }

    pub fn rejected(reason: VerificationFailure) -> Self {
        let message = match reason {
            VerificationFailure::NoPending => "No OTP requested",
            VerificationFailure::Expired => "OTP expired",
            VerificationFailure::Mismatch => "Invalid OTP",
        };
        Self {
            reason: Some(reason.as_str().to_string()),
            ..Self::failure(message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_validation() {
        let valid = SendOtpRequest {
            phone: Some("+15551234567".to_string()),
        };
        assert!(valid.validate().is_ok());

        assert!(SendOtpRequest { phone: None }.validate().is_err());
        assert!(SendOtpRequest {
            phone: Some("  ".to_string())
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_verify_request_validation() {
        let valid = VerifyOtpRequest {
            phone: Some("+15551234567".to_string()),
            otp: Some("123456".to_string()),
        };
        assert!(valid.validate().is_ok());

        let missing_otp = VerifyOtpRequest {
            otp: None,
            ..valid.clone()
        };
        assert!(missing_otp.validate().is_err());

        let empty_otp = VerifyOtpRequest {
            otp: Some(String::new()),
            ..valid
        };
        assert!(empty_otp.validate().is_err());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let request: VerifyOtpRequest = serde_json::from_str("{}").unwrap();
        assert!(request.phone.is_none());
        assert_eq!(request.otp(), "");
    }

    #[test]
    fn test_demo_response_uses_camel_case() {
        let json = serde_json::to_value(OtpResponse::demo("482910")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "success": true,
                "message": "OTP generated (demo mode)",
                "demoOtp": "482910"
            })
        );
    }

    #[test]
    fn test_rejected_response_messages() {
        let expired = OtpResponse::rejected(VerificationFailure::Expired);
        assert!(!expired.success);
        assert_eq!(expired.message, "OTP expired");
        assert_eq!(expired.reason.as_deref(), Some("expired"));

        assert_eq!(
            OtpResponse::rejected(VerificationFailure::NoPending).message,
            "No OTP requested"
        );
        assert_eq!(
            OtpResponse::rejected(VerificationFailure::Mismatch).message,
            "Invalid OTP"
        );
    }
}
