//! Cache-aside advice lookups

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::advice::{AdviceCache, AdviceGetter, AdviceLimiter, AdviceRetriever};
use crate::domain::DomainError;

/// Wraps the retriever into a cache-aside lookup.
///
/// Concurrent misses for one topic each hit the upstream; the last write wins.
pub struct CachedAdviceGetter {
    cache: Arc<dyn AdviceCache>,
    retriever: Arc<dyn AdviceRetriever>,
    limiter: Arc<dyn AdviceLimiter>,
}

impl CachedAdviceGetter {
    pub fn new(
        cache: Arc<dyn AdviceCache>,
        retriever: Arc<dyn AdviceRetriever>,
        limiter: Arc<dyn AdviceLimiter>,
    ) -> Self {
        Self {
            cache,
            retriever,
            limiter,
        }
    }
}

#[async_trait]
impl AdviceGetter for CachedAdviceGetter {
    async fn get_advices_for(&self, topic: &str) -> Result<Vec<String>, DomainError> {
        match self.cache.get(topic).await {
            Ok(Some(cached)) => {
                debug!(topic = %topic, count = cached.len(), "Advice cache hit");
                return Ok(cached);
            }
            Ok(None) => debug!(topic = %topic, "Advice cache miss"),
            Err(e) => warn!(topic = %topic, error = %e, "Advice cache read failed, treating as miss"),
        }

        let advices = self.retriever.retrieve_for_topic(topic).await?;
        self.cache.put(topic, advices).await
    }

    async fn get_advices_limited_for(
        &self,
        topic: &str,
        amount: i64,
    ) -> Result<Vec<String>, DomainError> {
        let advices = self.get_advices_for(topic).await?;
        Ok(self.limiter.limit_to(&advices, amount))
    }
}
