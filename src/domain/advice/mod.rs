//! Advice domain - upstream wire types and lookup collaborators

mod limiter;
mod mapping;
mod repository;
mod request;
mod slip;

pub use limiter::{AdviceLimiter, SimpleAdviceLimiter};
pub use mapping::{AdviceMapping, SimpleAdviceMapping};
pub use repository::{AdviceCache, AdviceGetter, AdviceQuery, AdviceRetriever};
pub use request::{AdviceArgs, AdviceReply};
pub use slip::{Message, QueryResult, Slip, SlipError, UpstreamResponse};

#[cfg(test)]
pub use repository::{MockAdviceCache, MockAdviceGetter, MockAdviceQuery, MockAdviceRetriever};
