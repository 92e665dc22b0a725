//! PDF text-layer decoder

use crate::domain::document::{DocumentDecoder, ExtractedText, MediaType, RawDocument};
use crate::domain::DomainError;

/// Decoder for PDF documents.
///
/// Extracts the text layer of all pages in document order. An image-only
/// (scanned) PDF has no text layer and decodes to an empty string; the
/// pipeline's empty-content check turns that into an extraction failure.
#[derive(Debug, Clone, Default)]
pub struct PdfDecoder;

impl PdfDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentDecoder for PdfDecoder {
    fn media_type(&self) -> MediaType {
        MediaType::Pdf
    }

    fn decode(&self, document: &RawDocument) -> Result<ExtractedText, DomainError> {
        let content = pdf_extract::extract_text_from_mem(&document.bytes)
            .map_err(|e| DomainError::extraction_failed(format!("PDF extraction failed: {}", e)))?;

        Ok(ExtractedText::new(
            content,
            document.original_name.clone(),
            MediaType::Pdf,
            document.byte_length(),
        ))
    }
}
