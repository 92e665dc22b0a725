//! Google Gemini generation provider

use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::HttpClientTrait;
use crate::domain::{
    DomainError, FinishReason, GenerationRequest, GenerationResponse, LlmProvider, Usage,
};

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini API provider
#[derive(Debug)]
pub struct GeminiProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
}

impl<C: HttpClientTrait> GeminiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn generate_content_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    fn build_request(&self, request: &GenerationRequest) -> serde_json::Value {
        let mut generation_config = serde_json::Map::new();

        if let Some(temperature) = request.temperature {
            generation_config.insert("temperature".to_string(), serde_json::json!(temperature));
        }

        if let Some(top_k) = request.top_k {
            generation_config.insert("topK".to_string(), serde_json::json!(top_k));
        }

        if let Some(top_p) = request.top_p {
            generation_config.insert("topP".to_string(), serde_json::json!(top_p));
        }

        if let Some(max_output_tokens) = request.max_output_tokens {
            generation_config.insert(
                "maxOutputTokens".to_string(),
                serde_json::json!(max_output_tokens),
            );
        }

        let mut body = serde_json::json!({
            "contents": [{
                "parts": [{
                    "text": request.prompt
                }]
            }]
        });

        if !generation_config.is_empty() {
            body["generationConfig"] = serde_json::Value::Object(generation_config);
        }

        body
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("X-goog-api-key", self.api_key.as_str()),
            ("Content-Type", "application/json"),
        ]
    }

    fn parse_response(
        &self,
        model: &str,
        json: serde_json::Value,
    ) -> Result<GenerationResponse, DomainError> {
        let response: GeminiResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("gemini", format!("Failed to parse response: {}", e))
        })?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::provider("gemini", "No candidates in response"))?;

        let text: String = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        let mut generation_response = GenerationResponse::new(model, text);

        if let Some(reason) = candidate.finish_reason {
            generation_response =
                generation_response.with_finish_reason(parse_finish_reason(&reason));
        }

        if let Some(usage) = response.usage_metadata {
            generation_response = generation_response.with_usage(Usage::new(
                usage.prompt_token_count.unwrap_or(0),
                usage.candidates_token_count.unwrap_or(0),
            ));
        }

        Ok(generation_response)
    }
}

#[async_trait]
impl<C: HttpClientTrait> LlmProvider for GeminiProvider<C> {
    async fn generate(
        &self,
        model: &str,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, DomainError> {
        let url = self.generate_content_url(model);
        let body = self.build_request(&request);

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(model, response)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

fn parse_finish_reason(reason: &str) -> FinishReason {
    match reason {
        "STOP" => FinishReason::Stop,
        "MAX_TOKENS" => FinishReason::MaxTokens,
        "SAFETY" => FinishReason::Safety,
        _ => FinishReason::Other,
    }
}

// Gemini API types

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsageMetadata {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::llm::http_client::mock::MockHttpClient;

    const MODEL: &str = "gemini-2.0-flash";

    fn url() -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            DEFAULT_GEMINI_BASE_URL, MODEL
        )
    }

    fn candidate_response(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": text}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 34,
                "totalTokenCount": 46
            }
        })
    }

    #[tokio::test]
    async fn test_generate_parses_candidate_text() {
        let client = MockHttpClient::new().with_response(url(), candidate_response("## ÖZET\nözet"));
        let provider = GeminiProvider::new(client, "test-key");

        let response = provider
            .generate(MODEL, GenerationRequest::new("Özetle"))
            .await
            .unwrap();

        assert_eq!(response.text, "## ÖZET\nözet");
        assert_eq!(response.finish_reason, Some(FinishReason::Stop));
        assert_eq!(response.usage.unwrap().total_tokens, 46);
    }

    #[tokio::test]
    async fn test_generate_sends_generation_config() {
        let client = MockHttpClient::new().with_response(url(), candidate_response("ok"));
        let provider = GeminiProvider::new(client, "test-key");

        let request = GenerationRequest::builder("Özetle")
            .temperature(0.7)
            .top_k(40)
            .top_p(0.95)
            .max_output_tokens(1024)
            .build();

        provider.generate(MODEL, request).await.unwrap();

        let requests = provider.client.recorded_requests();
        assert_eq!(requests.len(), 1);

        let body = &requests[0].1;
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Özetle");
        assert_eq!(body["generationConfig"]["topK"], 40);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);

        // f32 knobs widen to f64 in the JSON body
        let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.7).abs() < 1e-6);
        let top_p = body["generationConfig"]["topP"].as_f64().unwrap();
        assert!((top_p - 0.95).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_provider_error() {
        let client =
            MockHttpClient::new().with_response(url(), serde_json::json!({"candidates": []}));
        let provider = GeminiProvider::new(client, "test-key");

        let err = provider
            .generate(MODEL, GenerationRequest::new("Özetle"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_generate_multi_part_candidate() {
        let response = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "birinci "}, {"text": "ikinci"}]
                }
            }]
        });
        let client = MockHttpClient::new().with_response(url(), response);
        let provider = GeminiProvider::new(client, "test-key");

        let result = provider
            .generate(MODEL, GenerationRequest::new("p"))
            .await
            .unwrap();

        assert_eq!(result.text, "birinci ikinci");
    }

    #[tokio::test]
    async fn test_http_error_is_opaque_provider_error() {
        let client = MockHttpClient::new().with_error(url(), "HTTP 429: quota exceeded");
        let provider = GeminiProvider::new(client, "test-key");

        let err = provider
            .generate(MODEL, GenerationRequest::new("p"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Provider { .. }));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = GeminiProvider::with_base_url(
            MockHttpClient::new(),
            "key",
            "https://example.com/",
        );

        assert_eq!(
            provider.generate_content_url("m"),
            "https://example.com/v1beta/models/m:generateContent"
        );
    }
}
