//! OTP route handlers
//!
//! - `POST /api/send-otp` issues a passcode for a phone number
//! - `POST /api/verify-otp` checks a submitted passcode

pub mod send_otp;
pub mod verify_otp;

pub use send_otp::send_otp;
pub use verify_otp::verify_otp;
