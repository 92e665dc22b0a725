//! Legacy binary Word decoder
//!
//! No structural parser is applied to the old OLE2 .doc container. The
//! decoder keeps printable ASCII plus newline and tab and drops every other
//! byte. This is a deliberately low-fidelity fallback: runs of binary
//! housekeeping data disappear, but so do any non-ASCII characters in the
//! document text.

use crate::domain::document::{DocumentDecoder, ExtractedText, MediaType, RawDocument};
use crate::domain::DomainError;

/// Best-effort decoder for legacy Word documents
#[derive(Debug, Clone, Default)]
pub struct LegacyDocDecoder;

impl LegacyDocDecoder {
    pub fn new() -> Self {
        Self
    }

    fn keep(byte: u8) -> bool {
        (0x20..=0x7e).contains(&byte) || byte == b'\n' || byte == b'\t'
    }
}

impl DocumentDecoder for LegacyDocDecoder {
    fn media_type(&self) -> MediaType {
        MediaType::LegacyDoc
    }

    fn decode(&self, document: &RawDocument) -> Result<ExtractedText, DomainError> {
        let content: String = document
            .bytes
            .iter()
            .copied()
            .filter(|&b| Self::keep(b))
            .map(char::from)
            .collect();

        Ok(ExtractedText::new(
            content,
            document.original_name.clone(),
            MediaType::LegacyDoc,
            document.byte_length(),
        ))
    }
}
