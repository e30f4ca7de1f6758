//! Projection of upstream results into advice texts

use super::QueryResult;

/// Maps a search result to the advice texts it carries
pub trait AdviceMapping: Send + Sync {
    fn map(&self, result: QueryResult) -> Vec<String>;
}

/// Keeps the `advice` field of every slip, in upstream order
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAdviceMapping;

impl AdviceMapping for SimpleAdviceMapping {
    fn map(&self, result: QueryResult) -> Vec<String> {
        result.slips.into_iter().map(|slip| slip.advice).collect()
    }
}
