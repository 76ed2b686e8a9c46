use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

use ff_api::{configure, middleware::cors::create_cors, telemetry::init_tracing, AppState};
use ff_core::{ExpirySweeper, InMemoryChallengeStore, OtpService, OtpServiceConfig};
use ff_infra::create_code_delivery;
use ff_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Loads .env before reading the environment
    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(
        environment = %config.environment,
        ttl_ms = config.otp.ttl_ms,
        notifier_enabled = config.sms.enabled,
        "Starting FitFlex OTP server"
    );

    let store = Arc::new(InMemoryChallengeStore::new());
    let delivery =
        create_code_delivery(&config.sms).context("failed to initialize passcode delivery")?;
    let otp_service = Arc::new(OtpService::new(
        store.clone(),
        delivery,
        OtpServiceConfig::from_app_config(&config),
    ));

    let sweeper = config.otp.sweep_interval().map(|interval| {
        Arc::new(ExpirySweeper::new(store.clone(), interval)).start_background_task()
    });

    let state = web::Data::new(AppState::new(otp_service));
    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(create_cors())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(configure::<InMemoryChallengeStore>)
    });
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await
        .context("server error");

    if let Some(handle) = sweeper {
        handle.abort();
    }
    info!("Server stopped");
    result
}
