//! Application services

pub mod analysis_service;

pub use analysis_service::{AnalysisService, BulkAnalysis};
