//! Infrastructure layer - External service implementations

pub mod advice;
pub mod cache;
pub mod logging;
pub mod services;
