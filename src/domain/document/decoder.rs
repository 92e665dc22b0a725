//! Document decoder trait

use std::fmt::Debug;

use crate::domain::DomainError;

use super::{ExtractedText, MediaType, RawDocument};

/// Trait for format-specific document decoders.
///
/// Decoding is a synchronous, CPU-bound transformation; callers that live on
/// an async runtime are expected to move it onto a blocking task. Decoders
/// must not silently return garbled text: any decode failure is surfaced as
/// `ExtractionFailed`. The one sanctioned exception is the legacy Word
/// decoder, whose lossy output is part of its contract.
pub trait DocumentDecoder: Send + Sync + Debug {
    /// The media type this decoder handles
    fn media_type(&self) -> MediaType;

    /// Decode a raw document into plain text
    fn decode(&self, document: &RawDocument) -> Result<ExtractedText, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    /// Mock decoder for testing pipeline wiring
    #[derive(Debug)]
    pub struct MockDecoder {
        media_type: MediaType,
        content: Option<String>,
        error: Option<String>,
    }

    impl MockDecoder {
        pub fn new(media_type: MediaType) -> Self {
            Self {
                media_type,
                content: None,
                error: None,
            }
        }

        pub fn with_content(mut self, content: impl Into<String>) -> Self {
            self.content = Some(content.into());
            self
        }

        pub fn with_error(mut self, error: impl Into<String>) -> Self {
            self.error = Some(error.into());
            self
        }
    }

    impl DocumentDecoder for MockDecoder {
        fn media_type(&self) -> MediaType {
            self.media_type
        }

        fn decode(&self, document: &RawDocument) -> Result<ExtractedText, DomainError> {
            if let Some(ref error) = self.error {
                return Err(DomainError::extraction_failed(error));
            }

            let content = self
                .content
                .clone()
                .unwrap_or_else(|| String::from_utf8_lossy(&document.bytes).into_owned());

            Ok(ExtractedText::new(
                content,
                document.original_name.clone(),
                self.media_type,
                document.byte_length(),
            ))
        }
    }
}
