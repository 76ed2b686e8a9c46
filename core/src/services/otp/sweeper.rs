//! Periodic purge of expired challenges
//!
//! Expired challenges are already rejected lazily at verification time; the
//! sweeper only reclaims the memory of ones nobody looks up again.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::errors::DomainResult;
use crate::repositories::ChallengeStore;

/// Background task removing expired challenges from a store
pub struct ExpirySweeper<S: ChallengeStore + 'static> {
    store: Arc<S>,
    interval: Duration,
}

impl<S: ChallengeStore + 'static> ExpirySweeper<S> {
    /// Create a sweeper running every `interval`
    pub fn new(store: Arc<S>, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// Run a single purge
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of expired challenges removed
    pub async fn run_once(&self) -> DomainResult<usize> {
        let purged = self.store.purge_expired(Utc::now()).await?;
        if purged > 0 {
            info!(purged = purged, event = "otp_sweep", "Purged expired passcodes");
        } else {
            debug!(event = "otp_sweep", "No expired passcodes to purge");
        }
        Ok(purged)
    }

    /// Start the sweeper as a background task
    ///
    /// The returned handle can be aborted to stop sweeping.
    pub fn start_background_task(self: Arc<Self>) -> JoinHandle<()> {
        tokio::spawn(async move {
            info!(
                interval_secs = self.interval.as_secs(),
                "Passcode expiry sweeper started"
            );

            let mut interval_timer = tokio::time::interval(self.interval);
            // The first tick completes immediately
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_once().await {
                    error!("Passcode sweep failed: {}", e);
                }
            }
        })
    }
}
