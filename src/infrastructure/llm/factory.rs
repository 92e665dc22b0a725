//! Factory for creating generation providers

use std::sync::Arc;
use std::time::Duration;

use crate::domain::LlmProvider;

use super::gemini::GeminiProvider;
use super::http_client::HttpClient;

/// Request timeout for generation calls
const GENERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Factory for generation providers
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create a Gemini provider with the default base URL
    pub fn create_gemini(api_key: impl Into<String>) -> Arc<dyn LlmProvider> {
        let client = HttpClient::with_timeout(GENERATION_TIMEOUT);
        Arc::new(GeminiProvider::new(client, api_key))
    }

    /// Create a Gemini provider against a custom base URL
    pub fn create_gemini_with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Arc<dyn LlmProvider> {
        let client = HttpClient::with_timeout(GENERATION_TIMEOUT);
        Arc::new(GeminiProvider::with_base_url(client, api_key, base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_gemini() {
        let provider = LlmProviderFactory::create_gemini("test-key");
        assert_eq!(provider.provider_name(), "gemini");
    }
}
