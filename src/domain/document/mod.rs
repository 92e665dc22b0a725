//! Document types and media type detection

pub mod admission;
pub mod decoder;

pub use admission::{admit, DEFAULT_MAX_DOCUMENT_BYTES};
pub use decoder::DocumentDecoder;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Supported source document formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    /// Plain text files
    PlainText,
    /// PDF documents (text layer only)
    Pdf,
    /// Word documents, XML-zip container
    Docx,
    /// Legacy binary Word documents
    LegacyDoc,
}

impl MediaType {
    /// Get file extensions associated with this media type
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::PlainText => &["txt", "text"],
            Self::Pdf => &["pdf"],
            Self::Docx => &["docx"],
            Self::LegacyDoc => &["doc"],
        }
    }

    /// Get MIME types associated with this media type
    pub fn mime_types(&self) -> &[&str] {
        match self {
            Self::PlainText => &["text/plain"],
            Self::Pdf => &["application/pdf"],
            Self::Docx => {
                &["application/vnd.openxmlformats-officedocument.wordprocessingml.document"]
            }
            Self::LegacyDoc => &["application/msword"],
        }
    }

    /// All supported media types
    pub fn all() -> [MediaType; 4] {
        [Self::PlainText, Self::Pdf, Self::Docx, Self::LegacyDoc]
    }

    /// Detect a media type from a declared MIME type
    pub fn detect_from_mime(mime: &str) -> Option<MediaType> {
        let mime_lower = mime.to_lowercase();

        Self::all()
            .into_iter()
            .find(|media_type| {
                media_type
                    .mime_types()
                    .iter()
                    .any(|m| mime_lower.starts_with(m))
            })
    }

    /// Detect a media type from a filename extension
    pub fn detect_from_filename(filename: &str) -> Option<MediaType> {
        let ext = filename.rsplit('.').next()?.to_lowercase();

        Self::all()
            .into_iter()
            .find(|media_type| {
                media_type
                    .extensions()
                    .iter()
                    .any(|e| e.eq_ignore_ascii_case(&ext))
            })
    }
}

/// An uploaded document as received, before any decoding.
///
/// Owned by the request scope and dropped once decoding produced an
/// [`ExtractedText`]; never persisted.
#[derive(Debug, Clone)]
pub struct RawDocument {
    /// Raw document bytes
    pub bytes: Bytes,
    /// Media type declared by the uploader
    pub declared_media_type: String,
    /// Original filename as uploaded
    pub original_name: String,
}

impl RawDocument {
    /// Create a raw document from uploaded bytes
    pub fn new(
        bytes: impl Into<Bytes>,
        declared_media_type: impl Into<String>,
        original_name: impl Into<String>,
    ) -> Self {
        Self {
            bytes: bytes.into(),
            declared_media_type: declared_media_type.into(),
            original_name: original_name.into(),
        }
    }

    /// Size of the document in bytes
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }
}

/// Plain text recovered from a raw document.
///
/// Invariant (enforced by the extraction pipeline): `content` is non-empty
/// after trimming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedText {
    /// The extracted plain text
    pub content: String,
    /// Original filename of the source document
    pub source_name: String,
    /// Media type the source was decoded as
    pub source_media_type: MediaType,
    /// Size of the source document in bytes
    pub byte_length: usize,
}

impl ExtractedText {
    /// Create an extracted text record
    pub fn new(
        content: impl Into<String>,
        source_name: impl Into<String>,
        source_media_type: MediaType,
        byte_length: usize,
    ) -> Self {
        Self {
            content: content.into(),
            source_name: source_name.into(),
            source_media_type,
            byte_length,
        }
    }

    /// Whether the content is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}
