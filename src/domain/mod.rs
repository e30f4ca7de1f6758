//! Domain layer - Core business logic and entities

pub mod advice;
pub mod cache;
pub mod error;

pub use advice::{
    AdviceArgs, AdviceCache, AdviceGetter, AdviceLimiter, AdviceMapping, AdviceQuery, AdviceReply,
    AdviceRetriever, QueryResult, Slip, SlipError, UpstreamResponse,
};
pub use cache::{Cache, CacheExt};
pub use error::DomainError;
