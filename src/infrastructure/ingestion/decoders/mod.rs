//! Format-specific document decoders

pub mod docx;
pub mod legacy_doc;
pub mod pdf;
pub mod plain_text;

pub use docx::DocxDecoder;
pub use legacy_doc::LegacyDocDecoder;
pub use pdf::PdfDecoder;
pub use plain_text::PlainTextDecoder;
