//! Challenge store trait defining keyed storage of pending passcodes.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::Challenge;
use crate::errors::DomainResult;

/// Keyed storage of at most one pending `Challenge` per subject
///
/// The store exclusively owns challenge state. Each operation must be atomic
/// with respect to every other operation on the same subject; expiry is not
/// evaluated by reads, the service decides what an expired record means.
#[async_trait]
pub trait ChallengeStore: Send + Sync {
    /// Insert or replace the challenge for `subject`
    ///
    /// # Arguments
    /// * `subject` - The phone number the passcode is bound to
    /// * `code` - The passcode to store
    /// * `ttl` - Lifetime; `expires_at = now + ttl`
    ///
    /// # Returns
    /// * `Ok(Challenge)` - The stored record. Any previous record for the
    ///   subject is gone and cannot be recovered.
    async fn put(&self, subject: &str, code: &str, ttl: Duration) -> DomainResult<Challenge>;

    /// Read the current challenge for `subject`, expired or not
    async fn get(&self, subject: &str) -> DomainResult<Option<Challenge>>;

    /// Delete the challenge for `subject`; no-op when absent
    async fn remove(&self, subject: &str) -> DomainResult<()>;

    /// Delete the challenge for `subject` only if it is still the issuance
    /// identified by `challenge_id`
    ///
    /// # Returns
    /// * `Ok(true)` - The record was removed
    /// * `Ok(false)` - Absent, or replaced by a newer challenge (left intact)
    async fn remove_if_current(&self, subject: &str, challenge_id: Uuid) -> DomainResult<bool>;

    /// Delete every challenge that is expired at `now`
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records removed
    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<usize>;

    /// Number of stored challenges, expired ones included
    async fn count(&self) -> DomainResult<usize>;
}
