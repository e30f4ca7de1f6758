//! API middleware components

pub mod accept;
pub mod logging;

pub use accept::normalize_accept_middleware;
pub use logging::logging_middleware;
