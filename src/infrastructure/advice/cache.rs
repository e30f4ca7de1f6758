//! Advice cache on top of the key-value storage

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::advice::AdviceCache;
use crate::domain::cache::{Cache, CacheExt};
use crate::domain::DomainError;

/// Lifetime of a cached advice list
pub const DEFAULT_ADVICE_TTL: Duration = Duration::from_secs(5 * 60);

/// Stores advice lists as JSON under the verbatim topic
#[derive(Debug)]
pub struct KeyValueAdviceCache {
    storage: Arc<dyn Cache>,
    ttl: Duration,
}

impl KeyValueAdviceCache {
    pub fn new(storage: Arc<dyn Cache>) -> Self {
        Self {
            storage,
            ttl: DEFAULT_ADVICE_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }
}

#[async_trait]
impl AdviceCache for KeyValueAdviceCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, DomainError> {
        let Some(data) = self.storage.get_raw(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&data) {
            Ok(advices) => Ok(Some(advices)),
            Err(e) => {
                debug!(key = %key, error = %e, "Discarding unreadable cached advices");
                Ok(None)
            }
        }
    }

    async fn put(&self, key: &str, advices: Vec<String>) -> Result<Vec<String>, DomainError> {
        self.storage.set(key, &advices, self.ttl).await?;
        Ok(advices)
    }
}
