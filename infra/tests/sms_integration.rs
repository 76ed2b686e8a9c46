//! Integration tests for SMS-backed passcode delivery

use std::sync::Arc;

use ff_core::{InMemoryChallengeStore, OtpService, OtpServiceConfig, VerificationFailure};
use ff_infra::create_code_delivery;
use ff_infra::sms::{MockSmsService, SmsNotifier, SmsService};
use ff_shared::config::{AppConfig, SmsConfig, SmsProvider};

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[tokio::test]
async fn test_mock_provider_flow_from_environment() {
    let config = AppConfig::from_lookup(&lookup(&[
        ("USE_TWILIO", "true"),
        ("SMS_PROVIDER", "mock"),
        ("OTP_TTL_MS", "60000"),
    ]));
    assert!(config.sms.enabled);
    assert_eq!(config.sms.provider, SmsProvider::Mock);

    let delivery = create_code_delivery(&config.sms).unwrap();
    let service = OtpService::new(
        Arc::new(InMemoryChallengeStore::new()),
        delivery,
        OtpServiceConfig::from_app_config(&config),
    );

    let issued = service.request_challenge("+15551234567").await.unwrap();
    assert!(issued.delivered());
    assert!(issued.code().is_none());

    let outcome = service.verify_challenge("+15551234567", "000000").await.unwrap();
    assert_eq!(outcome.failure(), Some(VerificationFailure::Mismatch));
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_delivery_error() {
    let provider = MockSmsService::with_options(false, true);
    assert!(!provider.is_available().await);

    let notifier: Arc<dyn ff_core::Notifier> = Arc::new(SmsNotifier::new(provider));
    let delivery = ff_core::select_delivery(true, Some(notifier)).unwrap();
    let service = OtpService::new(
        Arc::new(InMemoryChallengeStore::new()),
        delivery,
        OtpServiceConfig::default(),
    );

    let err = service.request_challenge("+15551234567").await.unwrap_err();
    assert!(err.is_delivery());
    assert!(err.to_string().contains("Mock"));
}

#[test]
fn test_demo_mode_when_twilio_disabled() {
    let config = SmsConfig::default();
    assert!(!config.enabled);
    assert!(create_code_delivery(&config).is_ok());
}
