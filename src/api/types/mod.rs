//! API request/response types

pub mod error;
pub mod json;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;

use serde::{Deserialize, Serialize};

use crate::domain::AnalysisDirective;

/// Request body for single-directive analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Source text to analyze
    pub text: String,
    /// Which analysis to run
    pub directive: AnalysisDirective,
}

/// Request body for combined analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAnalyzeRequest {
    /// Source text to analyze
    pub text: String,
}
