//! Cache domain - Key-value storage abstraction with TTL support

mod repository;

pub use repository::{Cache, CacheExt};

#[cfg(test)]
pub use repository::mock::MockCache;
