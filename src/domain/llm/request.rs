use serde::{Deserialize, Serialize};

/// Parameters for one generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The fully resolved instruction string
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            top_k: None,
            top_p: None,
            max_output_tokens: None,
        }
    }

    pub fn builder(prompt: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder::new(prompt)
    }
}

/// Builder for GenerationRequest
#[derive(Debug)]
pub struct GenerationRequestBuilder {
    prompt: String,
    temperature: Option<f32>,
    top_k: Option<u32>,
    top_p: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl GenerationRequestBuilder {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            top_k: None,
            top_p: None,
            max_output_tokens: None,
        }
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_k(mut self, top_k: u32) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }

    pub fn build(self) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt,
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = GenerationRequest::builder("Özetle: ...")
            .temperature(0.7)
            .top_k(40)
            .top_p(0.95)
            .max_output_tokens(1024)
            .build();

        assert_eq!(request.prompt, "Özetle: ...");
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.top_k, Some(40));
        assert_eq!(request.top_p, Some(0.95));
        assert_eq!(request.max_output_tokens, Some(1024));
    }

    #[test]
    fn test_plain_request_has_no_knobs() {
        let request = GenerationRequest::new("prompt");
        assert!(request.temperature.is_none());
        assert!(request.max_output_tokens.is_none());
    }
}
