//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Machine-readable error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    UnsupportedMediaTypeError,
    PayloadTooLargeError,
    ExtractionError,
    ProviderError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::UnsupportedMediaTypeError => write!(f, "unsupported_media_type_error"),
            Self::PayloadTooLargeError => write!(f, "payload_too_large_error"),
            Self::ExtractionError => write!(f, "extraction_error"),
            Self::ProviderError => write!(f, "provider_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: ApiErrorDetail {
                    message: message.into(),
                    error_type,
                    param: None,
                },
            },
        }
    }

    /// Add parameter info
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.response.error.param = Some(param.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            ApiErrorType::InvalidRequestError,
            message,
        )
    }

    /// Unsupported upload format
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiErrorType::UnsupportedMediaTypeError,
            message,
        )
    }

    /// Upload over the admission limit
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::PAYLOAD_TOO_LARGE,
            ApiErrorType::PayloadTooLargeError,
            message,
        )
    }

    /// Document decoding failure
    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorType::ExtractionError,
            message,
        )
    }

    /// Generation service failure
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            ApiErrorType::ProviderError,
            message,
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorType::ServerError,
            message,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();

        match err {
            DomainError::UnsupportedMediaType { .. } => Self::unsupported_media_type(message),
            DomainError::PayloadTooLarge { .. } => Self::payload_too_large(message),
            DomainError::ExtractionFailed { .. } => Self::unprocessable(message),
            DomainError::Validation { .. } => Self::bad_request(message),
            DomainError::Provider { .. } => Self::unavailable(message),
            DomainError::Configuration { .. } | DomainError::Internal { .. } => {
                Self::internal(message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}",
            self.response.error.error_type, self.response.error.message
        )
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::bad_request("Source text is required");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.response.error.error_type,
            ApiErrorType::InvalidRequestError
        );
    }

    #[test]
    fn test_domain_error_mapping() {
        let cases = [
            (
                DomainError::unsupported_media_type("image/png"),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                DomainError::payload_too_large(11, 10),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                DomainError::extraction_failed("empty"),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                DomainError::provider("gemini", "down"),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                DomainError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (domain_err, expected_status) in cases {
            let api_err: ApiError = domain_err.into();
            assert_eq!(api_err.status, expected_status);
        }
    }

    #[test]
    fn test_error_serialization() {
        let err = ApiError::unsupported_media_type("Unsupported media type: image/png");
        let json = serde_json::to_string(&err.response).unwrap();

        assert!(json.contains("unsupported_media_type_error"));
        assert!(json.contains("image/png"));
        assert!(!json.contains("param"));
    }

    #[test]
    fn test_with_param() {
        let err = ApiError::bad_request("missing field").with_param("file");
        assert_eq!(err.response.error.param, Some("file".to_string()));
    }
}
