//! Advice Proxy
//!
//! Serves advice from the Advice Slip API over JSON-RPC 2.0:
//! - `AdviceService.GiveMeAdvice` with an optional result limit
//! - Five minute in-memory cache per topic
//! - "No advice found" answered as an empty list

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::advice::SimpleAdviceLimiter;
use domain::advice::SimpleAdviceMapping;
use domain::cache::Cache;
use infrastructure::{
    advice::{
        CachedAdviceGetter, KeyValueAdviceCache, RestAdviceQuery, RestAdviceQueryConfig,
        SimpleAdviceRetriever,
    },
    cache::{InMemoryCache, InMemoryCacheConfig},
    services::AdviceService,
};
use tracing::info;

/// Create the application state, wiring every advice collaborator
pub fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    config.validate()?;

    let storage: Arc<dyn Cache> = Arc::new(InMemoryCache::with_config(
        InMemoryCacheConfig::default()
            .with_max_capacity(config.cache.max_capacity)
            .with_default_ttl(config.cache.ttl()),
    ));

    let query = RestAdviceQuery::new(RestAdviceQueryConfig {
        base_url: config.upstream.base_url.clone(),
        timeout: config.upstream.timeout(),
    })?;

    let retriever = SimpleAdviceRetriever::new(Arc::new(query), Arc::new(SimpleAdviceMapping));
    let cache = KeyValueAdviceCache::new(storage.clone()).with_ttl(config.cache.ttl());
    let getter = CachedAdviceGetter::new(
        Arc::new(cache),
        Arc::new(retriever),
        Arc::new(SimpleAdviceLimiter),
    );

    info!(
        upstream = %config.upstream.base_url,
        cache_ttl_secs = config.cache.ttl_secs,
        "Advice service initialized"
    );

    Ok(AppState::new(
        Arc::new(AdviceService::new(Arc::new(getter))),
        storage,
    ))
}
