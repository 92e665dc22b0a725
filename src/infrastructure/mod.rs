//! Infrastructure layer - external service implementations

pub mod ingestion;
pub mod llm;
pub mod logging;
pub mod services;
