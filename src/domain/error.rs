use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Unsupported media type: {media_type}")]
    UnsupportedMediaType { media_type: String },

    #[error("Payload too large: {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Extraction failed: {reason}")]
    ExtractionFailed { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Provider error: {provider} - {message}")]
    Provider { provider: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn unsupported_media_type(media_type: impl Into<String>) -> Self {
        Self::UnsupportedMediaType {
            media_type: media_type.into(),
        }
    }

    pub fn payload_too_large(size: usize, limit: usize) -> Self {
        Self::PayloadTooLarge { size, limit }
    }

    pub fn extraction_failed(reason: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_media_type_error() {
        let error = DomainError::unsupported_media_type("image/png");
        assert_eq!(error.to_string(), "Unsupported media type: image/png");
    }

    #[test]
    fn test_payload_too_large_error() {
        let error = DomainError::payload_too_large(11_000_000, 10_485_760);
        assert_eq!(
            error.to_string(),
            "Payload too large: 11000000 bytes exceeds the 10485760 byte limit"
        );
    }

    #[test]
    fn test_extraction_failed_error() {
        let error = DomainError::extraction_failed("empty");
        assert_eq!(error.to_string(), "Extraction failed: empty");
    }
}
