//! Infrastructure services

mod advice_service;

pub use advice_service::AdviceService;
