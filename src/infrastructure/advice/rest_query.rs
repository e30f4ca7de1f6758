//! HTTP client for the Advice Slip search endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use tracing::debug;

use crate::domain::advice::{AdviceQuery, UpstreamResponse};
use crate::domain::DomainError;

/// Public Advice Slip API
pub const DEFAULT_BASE_URL: &str = "https://api.adviceslip.com";

/// Configuration for the REST advice query
#[derive(Debug, Clone)]
pub struct RestAdviceQueryConfig {
    /// Scheme and host of the upstream, without the search path
    pub base_url: String,
    /// Timeout applied to each upstream request
    pub timeout: Duration,
}

impl Default for RestAdviceQueryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Queries `GET {base_url}/advice/search/{topic}`
#[derive(Debug, Clone)]
pub struct RestAdviceQuery {
    client: Client,
    base_url: Url,
}

impl RestAdviceQuery {
    pub fn new(config: RestAdviceQueryConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Self::with_client(client, &config.base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::configuration(format!("Invalid upstream URL '{}': {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Upstream URL '{}' cannot be used as a base",
                base_url
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Builds the search URL, escaping the topic as one path segment
    ///
    /// `.` and `..` are rejected: URL normalisation removes them (escaped
    /// or not), which would send the request to the search root instead.
    pub fn search_url(&self, topic: &str) -> Result<Url, DomainError> {
        if is_dot_segment(topic) {
            return Err(DomainError::validation(format!(
                "Topic '{}' cannot be used as a search path segment",
                topic
            )));
        }

        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| DomainError::upstream(format!("Cannot build search URL from {}", self.base_url)))?
            .pop_if_empty()
            .extend(["advice", "search", topic]);

        Ok(url)
    }
}

fn is_dot_segment(segment: &str) -> bool {
    matches!(segment, "." | "..")
}

#[async_trait]
impl AdviceQuery for RestAdviceQuery {
    async fn get_by_topic(&self, topic: &str) -> Result<UpstreamResponse, DomainError> {
        let url = self.search_url(topic)?;
        debug!(topic = %topic, url = %url, "Querying advice upstream");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| DomainError::upstream(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| DomainError::upstream(format!("Failed to read response body: {}", e)))?;

        debug!(topic = %topic, status = %status.as_u16(), bytes = body.len(), "Advice upstream replied");

        UpstreamResponse::from_body(&body).map_err(|e| {
            DomainError::upstream(format!(
                "Unexpected response (HTTP {}): {}",
                status.as_u16(),
                e
            ))
        })
    }
}
