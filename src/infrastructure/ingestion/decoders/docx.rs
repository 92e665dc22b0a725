//! DOCX decoder
//!
//! A .docx file is a ZIP archive of XML; docx-rs exposes it as a typed tree.
//! Text lives on the Paragraph -> Run -> Text path. Runs within a paragraph
//! are concatenated without a separator (they are fragments of the same
//! sentence); paragraphs are joined with newlines. Styling is discarded.

use docx_rs::{read_docx, DocumentChild, ParagraphChild, RunChild};

use crate::domain::document::{DocumentDecoder, ExtractedText, MediaType, RawDocument};
use crate::domain::DomainError;

/// Decoder for modern Word documents
#[derive(Debug, Clone, Default)]
pub struct DocxDecoder;

impl DocxDecoder {
    pub fn new() -> Self {
        Self
    }

    fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
        let mut parts: Vec<&str> = Vec::new();

        for child in &paragraph.children {
            if let ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    if let RunChild::Text(text) = run_child {
                        parts.push(&text.text);
                    }
                }
            }
        }

        parts.concat()
    }
}

impl DocumentDecoder for DocxDecoder {
    fn media_type(&self) -> MediaType {
        MediaType::Docx
    }

    fn decode(&self, document: &RawDocument) -> Result<ExtractedText, DomainError> {
        let docx = read_docx(&document.bytes)
            .map_err(|e| DomainError::extraction_failed(format!("DOCX parse failed: {:?}", e)))?;

        let mut paragraphs: Vec<String> = Vec::new();

        for child in &docx.document.children {
            if let DocumentChild::Paragraph(paragraph) = child {
                let text = Self::paragraph_text(paragraph);
                if !text.trim().is_empty() {
                    paragraphs.push(text);
                }
            }
        }

        Ok(ExtractedText::new(
            paragraphs.join("\n"),
            document.original_name.clone(),
            MediaType::Docx,
            document.byte_length(),
        ))
    }
}
