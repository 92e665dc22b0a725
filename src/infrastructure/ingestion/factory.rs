//! Factory for creating document decoders

use std::sync::Arc;

use crate::domain::document::{DocumentDecoder, MediaType};

use super::decoders::{DocxDecoder, LegacyDocDecoder, PdfDecoder, PlainTextDecoder};

/// Factory mapping a media type to its decoder
#[derive(Debug, Default)]
pub struct DecoderFactory;

impl DecoderFactory {
    /// Create the decoder for the given media type
    pub fn create(media_type: MediaType) -> Arc<dyn DocumentDecoder> {
        match media_type {
            MediaType::PlainText => Arc::new(PlainTextDecoder::new()),
            MediaType::Pdf => Arc::new(PdfDecoder::new()),
            MediaType::Docx => Arc::new(DocxDecoder::new()),
            MediaType::LegacyDoc => Arc::new(LegacyDocDecoder::new()),
        }
    }
}
