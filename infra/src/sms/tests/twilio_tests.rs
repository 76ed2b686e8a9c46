//! Unit tests for the Twilio SMS provider

use ff_shared::config::{SmsConfig, SmsProvider};

use crate::sms::twilio::normalize_destination;
use crate::sms::{SmsService, TwilioConfig, TwilioSmsService};
use crate::InfrastructureError;

fn sms_config() -> SmsConfig {
    SmsConfig {
        enabled: true,
        provider: SmsProvider::Twilio,
        account_sid: "ACtest_account_sid".to_string(),
        auth_token: "test_auth_token".to_string(),
        from_number: "+15005550006".to_string(),
    }
}

#[test]
fn test_config_from_sms_config() {
    let config = TwilioConfig::from_sms_config(&sms_config()).unwrap();

    assert_eq!(config.account_sid, "ACtest_account_sid");
    assert_eq!(config.auth_token, "test_auth_token");
    assert_eq!(config.from_number, "+15005550006");
}

#[test]
fn test_config_requires_credentials() {
    for blank in ["account_sid", "auth_token", "from_number"] {
        let mut config = sms_config();
        match blank {
            "account_sid" => config.account_sid.clear(),
            "auth_token" => config.auth_token.clear(),
            _ => config.from_number.clear(),
        }

        let result = TwilioConfig::from_sms_config(&config);
        assert!(
            matches!(result, Err(InfrastructureError::Config(_))),
            "blank {} accepted",
            blank
        );
    }
}

#[test]
fn test_config_requires_e164_sender() {
    let mut config = sms_config();
    config.from_number = "15005550006".to_string();

    let err = TwilioConfig::from_sms_config(&config).unwrap_err();
    assert!(err.to_string().contains("E.164 format"));
}

#[test]
fn test_config_debug_redacts_token() {
    let config = TwilioConfig::from_sms_config(&sms_config()).unwrap();
    let debug = format!("{:?}", config);

    assert!(!debug.contains("test_auth_token"));
    assert!(debug.contains("<redacted>"));
}

#[test]
fn test_normalize_destination() {
    assert_eq!(normalize_destination("+14155552671").unwrap(), "+14155552671");
    assert_eq!(normalize_destination("4155552671").unwrap(), "+14155552671");
    assert!(normalize_destination("+").is_err());
}

#[tokio::test]
async fn test_send_rejects_oversized_message_before_calling_twilio() {
    let service = TwilioSmsService::new(TwilioConfig::from_sms_config(&sms_config()).unwrap()).unwrap();
    let body = "x".repeat(1601);

    let result = service.send_sms("+14155552671", &body).await;

    match result {
        Err(InfrastructureError::Sms(msg)) => assert!(msg.contains("maximum length")),
        other => panic!("expected Sms error, got {:?}", other),
    }
    assert_eq!(service.provider_name(), "Twilio");
}
