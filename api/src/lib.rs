//! HTTP adapter for the FitFlex OTP service
//!
//! Library exports for the binary and for integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{configure, AppState};
