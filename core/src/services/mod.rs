//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{
    select_delivery, ChallengeIssued, CodeDelivery, Delivery, DisclosingDelivery, ExpirySweeper,
    Notifier, NotifierDelivery, OtpService, OtpServiceConfig, VerificationFailure, VerifyOutcome,
};
