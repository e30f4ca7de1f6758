//! Advice infrastructure - upstream client, retrieval and caching

mod cache;
mod getter;
mod rest_query;
mod retriever;

pub use cache::{KeyValueAdviceCache, DEFAULT_ADVICE_TTL};
pub use getter::CachedAdviceGetter;
pub use rest_query::{RestAdviceQuery, RestAdviceQueryConfig, DEFAULT_BASE_URL};
pub use retriever::SimpleAdviceRetriever;
