//! Integration tests for the OTP endpoints

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

use ff_api::{configure, AppState};
use ff_core::{
    select_delivery, CodeDelivery, InMemoryChallengeStore, Notifier, OtpService, OtpServiceConfig,
};
use ff_infra::sms::{MockSmsService, SmsNotifier};

const PHONE: &str = "+15551234567";

fn state_with(
    delivery: Arc<dyn CodeDelivery>,
    config: OtpServiceConfig,
) -> web::Data<AppState<InMemoryChallengeStore>> {
    let service = OtpService::new(Arc::new(InMemoryChallengeStore::new()), delivery, config);
    web::Data::new(AppState::new(Arc::new(service)))
}

fn demo_state(config: OtpServiceConfig) -> web::Data<AppState<InMemoryChallengeStore>> {
    state_with(select_delivery(false, None).unwrap(), config)
}

fn sms_state(simulate_failure: bool) -> web::Data<AppState<InMemoryChallengeStore>> {
    let notifier: Arc<dyn Notifier> = Arc::new(SmsNotifier::new(MockSmsService::with_options(
        false,
        simulate_failure,
    )));
    let config = OtpServiceConfig {
        notifier_enabled: true,
        ..OtpServiceConfig::default()
    };
    state_with(select_delivery(true, Some(notifier)).unwrap(), config)
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state.clone())
                .configure(configure::<InMemoryChallengeStore>),
        )
        .await
    };
}

macro_rules! post_json {
    ($app:expr, $path:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri($path)
            .set_json($body)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_rt::test]
async fn test_demo_mode_send_then_verify() {
    let state = demo_state(OtpServiceConfig::default());
    let app = init_app!(state);

    let (status, body) = post_json!(app, "/api/send-otp", json!({ "phone": PHONE }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "OTP generated (demo mode)");
    let code = body["demoOtp"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);

    let (status, body) = post_json!(app, "/api/verify-otp", json!({ "phone": PHONE, "otp": code }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "OTP verified" }));

    // Single use
    let (status, body) = post_json!(app, "/api/verify-otp", json!({ "phone": PHONE, "otp": code }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No OTP requested");
    assert_eq!(body["reason"], "no_pending");
}

#[actix_rt::test]
async fn test_sms_mode_does_not_disclose_code() {
    let state = sms_state(false);
    let app = init_app!(state);

    let (status, body) = post_json!(app, "/api/send-otp", json!({ "phone": PHONE }));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "message": "OTP sent via SMS" }));
}

#[actix_rt::test]
async fn test_sms_failure_returns_500() {
    let state = sms_state(true);
    let app = init_app!(state);

    let (status, body) = post_json!(app, "/api/send-otp", json!({ "phone": PHONE }));
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "message": "Failed to send OTP" }));
}

#[actix_rt::test]
async fn test_send_requires_phone() {
    let state = demo_state(OtpServiceConfig::default());
    let app = init_app!(state);

    for payload in [json!({}), json!({ "phone": "" }), json!({ "phone": "   " })] {
        let (status, body) = post_json!(app, "/api/send-otp", payload);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "message": "Phone is required" }));
    }
}

#[actix_rt::test]
async fn test_verify_requires_phone_and_otp() {
    let state = demo_state(OtpServiceConfig::default());
    let app = init_app!(state);

    for payload in [
        json!({}),
        json!({ "phone": PHONE }),
        json!({ "otp": "123456" }),
        json!({ "phone": PHONE, "otp": "" }),
    ] {
        let (status, body) = post_json!(app, "/api/verify-otp", payload);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Phone & OTP required");
    }
}

#[actix_rt::test]
async fn test_malformed_json_is_bad_request() {
    let state = demo_state(OtpServiceConfig::default());
    let app = init_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/verify-otp")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Phone & OTP required");
}

#[actix_rt::test]
async fn test_wrong_code_then_correct_code() {
    let state = demo_state(OtpServiceConfig::default());
    let app = init_app!(state);

    let (_, body) = post_json!(app, "/api/send-otp", json!({ "phone": PHONE }));
    let code = body["demoOtp"].as_str().unwrap().to_string();
    let wrong = if code == "999999" { "100000" } else { "999999" };

    let (status, body) = post_json!(app, "/api/verify-otp", json!({ "phone": PHONE, "otp": wrong }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "message": "Invalid OTP", "reason": "mismatch" })
    );

    let (status, _) = post_json!(app, "/api/verify-otp", json!({ "phone": PHONE, "otp": code }));
    assert_eq!(status, StatusCode::OK);
}

#[actix_rt::test]
async fn test_expired_code_is_rejected() {
    let state = demo_state(OtpServiceConfig::default().with_ttl_ms(50));
    let app = init_app!(state);

    let (_, body) = post_json!(app, "/api/send-otp", json!({ "phone": PHONE }));
    let code = body["demoOtp"].as_str().unwrap().to_string();

    tokio::time::sleep(Duration::from_millis(120)).await;

    let (status, body) = post_json!(app, "/api/verify-otp", json!({ "phone": PHONE, "otp": code }));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "OTP expired");
    assert_eq!(body["reason"], "expired");
}

#[actix_rt::test]
async fn test_health_and_not_found() {
    let state = demo_state(OtpServiceConfig::default());
    let app = init_app!(state);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nope").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": false, "message": "Not found" }));
}
