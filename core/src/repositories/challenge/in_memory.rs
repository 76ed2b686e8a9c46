//! In-memory implementation of `ChallengeStore`

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Challenge;
use crate::errors::DomainResult;

use super::r#trait::ChallengeStore;

/// Process-local challenge store
///
/// Every operation takes the lock for its whole duration, which makes each
/// one atomic. State does not survive a restart and is not shared between
/// processes. Cloning yields a handle to the same map.
#[derive(Clone, Default)]
pub struct InMemoryChallengeStore {
    challenges: Arc<RwLock<HashMap<String, Challenge>>>,
}

impl InMemoryChallengeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChallengeStore for InMemoryChallengeStore {
    async fn put(&self, subject: &str, code: &str, ttl: Duration) -> DomainResult<Challenge> {
        let challenge = Challenge::issue(subject, code, ttl);
        let mut challenges = self.challenges.write().await;
        challenges.insert(subject.to_string(), challenge.clone());
        Ok(challenge)
    }

    async fn get(&self, subject: &str) -> DomainResult<Option<Challenge>> {
        let challenges = self.challenges.read().await;
        Ok(challenges.get(subject).cloned())
    }

    async fn remove(&self, subject: &str) -> DomainResult<()> {
        let mut challenges = self.challenges.write().await;
        challenges.remove(subject);
        Ok(())
    }

    async fn remove_if_current(&self, subject: &str, challenge_id: Uuid) -> DomainResult<bool> {
        let mut challenges = self.challenges.write().await;
        match challenges.get(subject) {
            Some(current) if current.id == challenge_id => {
                challenges.remove(subject);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> DomainResult<usize> {
        let mut challenges = self.challenges.write().await;
        let before = challenges.len();
        challenges.retain(|_, challenge| !challenge.is_expired_at(now));
        Ok(before - challenges.len())
    }

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.challenges.read().await.len())
    }
}
