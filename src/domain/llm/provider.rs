use async_trait::async_trait;
use std::fmt::Debug;

use super::{GenerationRequest, GenerationResponse};
use crate::domain::DomainError;

/// Trait for text generation providers.
///
/// Service errors (rate limits, auth failures, malformed bodies) are opaque
/// to the caller: they surface as `DomainError::Provider` with a message and
/// are never retried here.
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Run one generation call and return the raw generated text
    async fn generate(
        &self,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Mock generation provider for testing
    #[derive(Debug)]
    pub struct MockLlmProvider {
        name: &'static str,
        response: Option<GenerationResponse>,
        error: Option<String>,
        requests: Mutex<Vec<(String, GenerationRequest)>>,
    }

    impl MockLlmProvider {
        pub fn new(name: &'static str) -> Self {
            Self {
                name,
                response: None,
                error: None,
                requests: Mutex::new(Vec::new()),
            }
        }

        pub fn with_text(mut self, text: impl Into<String>) -> Self {
            self.response = Some(GenerationResponse::new("mock-model", text));
            self
        }

        pub fn with_response(mut self, response: GenerationResponse) -> Self {
            self.response = Some(response);
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }

        /// Requests seen so far, for asserting on prompts and options
        pub fn recorded_requests(&self) -> Vec<(String, GenerationRequest)> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn generate(
            &self,
            model: &str,
            request: GenerationRequest,
        ) -> Result<GenerationResponse, DomainError> {
            self.requests
                .lock()
                .unwrap()
                .push((model.to_string(), request));

            if let Some(ref error) = self.error {
                return Err(DomainError::provider(self.name, error));
            }

            self.response
                .clone()
                .ok_or_else(|| DomainError::provider(self.name, "No mock response configured"))
        }

        fn provider_name(&self) -> &'static str {
            self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_response() {
        let provider = mock::MockLlmProvider::new("mock").with_text("generated");

        let response = provider
            .generate("mock-model", GenerationRequest::new("prompt"))
            .await
            .unwrap();

        assert_eq!(response.text, "generated");
        assert_eq!(provider.recorded_requests().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let provider = mock::MockLlmProvider::new("mock").with_error("rate limited");

        let err = provider
            .generate("mock-model", GenerationRequest::new("prompt"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
    }
}
