//! Advice collaborator traits

use async_trait::async_trait;

use super::UpstreamResponse;
use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Issues a single search against the advice upstream
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AdviceQuery: Send + Sync {
    /// Searches for slips matching the topic
    async fn get_by_topic(&self, topic: &str) -> Result<UpstreamResponse, DomainError>;
}

/// Fetches every advice text for a topic
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AdviceRetriever: Send + Sync {
    /// Returns all advice texts for the topic, or an empty list when
    /// the upstream has none
    async fn retrieve_for_topic(&self, topic: &str) -> Result<Vec<String>, DomainError>;
}

/// Short-lived store of advice lists keyed by topic
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AdviceCache: Send + Sync {
    /// Returns the live cached list, if any
    async fn get(&self, key: &str) -> Result<Option<Vec<String>>, DomainError>;

    /// Stores the list, replacing any previous entry, and returns it
    async fn put(&self, key: &str, advices: Vec<String>) -> Result<Vec<String>, DomainError>;
}

/// Cache-aware advice lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AdviceGetter: Send + Sync {
    /// Returns every advice for the topic
    async fn get_advices_for(&self, topic: &str) -> Result<Vec<String>, DomainError>;

    /// Returns at most `amount` advices for the topic
    async fn get_advices_limited_for(
        &self,
        topic: &str,
        amount: i64,
    ) -> Result<Vec<String>, DomainError>;
}
