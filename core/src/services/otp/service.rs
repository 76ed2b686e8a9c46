//! Main OTP service implementation

use rand::{rngs::OsRng, Rng};
use std::sync::Arc;

use ff_shared::phone::mask_phone_number;

use crate::domain::entities::challenge::{CODE_LENGTH, MAX_CODE, MIN_CODE};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ChallengeStore;

use super::config::OtpServiceConfig;
use super::traits::CodeDelivery;
use super::types::{ChallengeIssued, Delivery, VerificationFailure, VerifyOutcome};

/// Issues and verifies single-use passcodes bound to a phone number
pub struct OtpService<S: ChallengeStore> {
    /// Store owning every pending challenge
    store: Arc<S>,
    /// How new passcodes reach their subject
    delivery: Arc<dyn CodeDelivery>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<S: ChallengeStore> OtpService<S> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `store` - Challenge store implementation
    /// * `delivery` - Delivery mode, see `select_delivery`
    /// * `config` - Service configuration
    pub fn new(store: Arc<S>, delivery: Arc<dyn CodeDelivery>, config: OtpServiceConfig) -> Self {
        Self {
            store,
            delivery,
            config,
        }
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// The active configuration
    pub fn config(&self) -> &OtpServiceConfig {
        &self.config
    }

    /// Issue a new passcode for `subject`
    ///
    /// This method:
    /// 1. Generates a 6-digit passcode
    /// 2. Stores it, replacing any pending passcode for the subject
    /// 3. Hands it to the configured delivery
    ///
    /// # Returns
    ///
    /// * `Ok(ChallengeIssued::Delivered)` - Sent out-of-band
    /// * `Ok(ChallengeIssued::Disclosed)` - Demo mode, the code is returned
    /// * `Err(DomainError::Validation)` - Blank subject
    /// * `Err(DomainError::Delivery)` - The notifier failed; the stored
    ///   passcode remains valid
    pub async fn request_challenge(&self, subject: &str) -> DomainResult<ChallengeIssued> {
        if subject.trim().is_empty() {
            return Err(DomainError::validation("subject is required"));
        }

        let code = Self::generate_code();
        let challenge = self.store.put(subject, &code, self.config.ttl()).await?;

        tracing::info!(
            phone = %mask_phone_number(subject),
            event = "otp_generated",
            challenge_id = %challenge.id,
            expires_at = %challenge.expires_at,
            "Generated new passcode"
        );

        let delivery = self.delivery.deliver(subject, &challenge.code).await?;

        Ok(match delivery {
            Delivery::Sent { message_id } => ChallengeIssued::Delivered {
                message_id,
                expires_at: challenge.expires_at,
            },
            Delivery::Disclosed => ChallengeIssued::Disclosed {
                code: challenge.code,
                expires_at: challenge.expires_at,
            },
        })
    }

    /// Check `submitted_code` against the pending passcode for `subject`
    ///
    /// An expired challenge is removed and rejected even when the code
    /// matches. A mismatch leaves the challenge pending so the subject can
    /// retry until it expires. A match consumes the challenge.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOutcome)` - Verified, or rejected with a reason
    /// * `Err(DomainError::Validation)` - Blank subject or code
    pub async fn verify_challenge(
        &self,
        subject: &str,
        submitted_code: &str,
    ) -> DomainResult<VerifyOutcome> {
        if subject.trim().is_empty() {
            return Err(DomainError::validation("subject is required"));
        }
        if submitted_code.is_empty() {
            return Err(DomainError::validation("code is required"));
        }

        let phone = mask_phone_number(subject);

        let Some(challenge) = self.store.get(subject).await? else {
            tracing::warn!(phone = %phone, event = "otp_verification_failed", reason = "no_pending");
            return Ok(VerifyOutcome::Rejected(VerificationFailure::NoPending));
        };

        if challenge.is_expired() {
            self.store.remove_if_current(subject, challenge.id).await?;
            tracing::warn!(
                phone = %phone,
                event = "otp_expired",
                challenge_id = %challenge.id,
                "Passcode expired before verification"
            );
            return Ok(VerifyOutcome::Rejected(VerificationFailure::Expired));
        }

        if !challenge.matches(submitted_code) {
            tracing::warn!(
                phone = %phone,
                event = "otp_verification_failed",
                reason = "mismatch",
                "Submitted passcode does not match"
            );
            return Ok(VerifyOutcome::Rejected(VerificationFailure::Mismatch));
        }

        // Single use: only the caller that actually removes the record wins.
        if self.store.remove_if_current(subject, challenge.id).await? {
            tracing::info!(
                phone = %phone,
                event = "otp_verified_success",
                challenge_id = %challenge.id,
                "Passcode verified"
            );
            return Ok(VerifyOutcome::Verified);
        }

        // Consumed by a concurrent verification, or replaced by a new request.
        let failure = match self.store.get(subject).await? {
            Some(_) => VerificationFailure::Mismatch,
            None => VerificationFailure::NoPending,
        };
        tracing::warn!(
            phone = %phone,
            event = "otp_verification_failed",
            reason = failure.as_str(),
            "Passcode was consumed or replaced concurrently"
        );
        Ok(VerifyOutcome::Rejected(failure))
    }

    /// Generate a passcode drawn uniformly from `[100000, 999999]`
    ///
    /// Uses OsRng (OS-provided CSPRNG).
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(MIN_CODE..=MAX_CODE);
        format!("{:0width$}", code, width = CODE_LENGTH)
    }
}
