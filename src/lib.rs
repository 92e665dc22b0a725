//! Smart Notes API
//!
//! Backend for the Akıllı Notlar study-notes analyzer:
//! - Normalizes uploaded documents (TXT, PDF, DOCX, legacy DOC) to plain text
//! - Turns Gemini's loosely formatted output into typed summary, concept,
//!   quiz, and knowledge-gap records
//! - Always returns something renderable: unstructurable generation output
//!   degrades to a raw-text fallback instead of failing the request

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::llm::LlmProviderFactory;
use infrastructure::services::AnalysisService;

/// Create the application state with all services initialized
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let api_key = std::env::var("GEMINI_API_KEY")
        .map_err(|_| anyhow::anyhow!("GEMINI_API_KEY environment variable is required"))?;

    let provider = match std::env::var("GEMINI_BASE_URL") {
        Ok(base_url) => {
            tracing::info!("Using Gemini provider with custom base URL: {}", base_url);
            LlmProviderFactory::create_gemini_with_base_url(api_key, base_url)
        }
        Err(_) => LlmProviderFactory::create_gemini(api_key),
    };

    let analysis = Arc::new(AnalysisService::new(
        provider,
        config.generation.clone(),
        config.ingestion.clone(),
    ));

    Ok(AppState::new(analysis))
}
