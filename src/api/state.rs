//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::AnalysisService;

/// Application state shared across request handlers
#[derive(Clone)]
pub struct AppState {
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(analysis: Arc<AnalysisService>) -> Self {
        Self { analysis }
    }
}
