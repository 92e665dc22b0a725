//! Plain text decoder

use crate::domain::document::{DocumentDecoder, ExtractedText, MediaType, RawDocument};
use crate::domain::DomainError;

/// Decoder for plain text uploads: the byte sequence interpreted as UTF-8,
/// verbatim.
#[derive(Debug, Clone, Default)]
pub struct PlainTextDecoder;

impl PlainTextDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentDecoder for PlainTextDecoder {
    fn media_type(&self) -> MediaType {
        MediaType::PlainText
    }

    fn decode(&self, document: &RawDocument) -> Result<ExtractedText, DomainError> {
        let content = std::str::from_utf8(&document.bytes)
            .map_err(|e| DomainError::extraction_failed(format!("invalid UTF-8: {}", e)))?;

        Ok(ExtractedText::new(
            content,
            document.original_name.clone(),
            MediaType::PlainText,
            document.byte_length(),
        ))
    }
}
