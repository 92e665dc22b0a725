//! Admission policy for uploaded documents
//!
//! Runs before any decoder is selected. Binary decoding is expensive, so
//! disallowed types and oversized payloads are rejected on the declared
//! metadata alone, without touching the bytes.

use crate::domain::DomainError;

use super::MediaType;

/// Default upload size limit (10 MiB)
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;

/// Admit or reject a document based on its declared media type and size.
///
/// Returns the resolved [`MediaType`] on admission so the caller can select
/// a decoder without re-parsing the MIME string.
pub fn admit(
    declared_media_type: &str,
    byte_length: usize,
    max_bytes: usize,
) -> Result<MediaType, DomainError> {
    let media_type = MediaType::detect_from_mime(declared_media_type)
        .ok_or_else(|| DomainError::unsupported_media_type(declared_media_type))?;

    if byte_length > max_bytes {
        return Err(DomainError::payload_too_large(byte_length, max_bytes));
    }

    Ok(media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admit_supported_types() {
        assert_eq!(
            admit("text/plain", 100, DEFAULT_MAX_DOCUMENT_BYTES).unwrap(),
            MediaType::PlainText
        );
        assert_eq!(
            admit("application/pdf", 100, DEFAULT_MAX_DOCUMENT_BYTES).unwrap(),
            MediaType::Pdf
        );
        assert_eq!(
            admit(
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
                100,
                DEFAULT_MAX_DOCUMENT_BYTES
            )
            .unwrap(),
            MediaType::Docx
        );
        assert_eq!(
            admit("application/msword", 100, DEFAULT_MAX_DOCUMENT_BYTES).unwrap(),
            MediaType::LegacyDoc
        );
    }

    #[test]
    fn test_reject_unsupported_type() {
        let err = admit("image/png", 100, DEFAULT_MAX_DOCUMENT_BYTES).unwrap_err();
        assert!(matches!(err, DomainError::UnsupportedMediaType { .. }));
    }

    #[test]
    fn test_reject_oversized_payload() {
        let err = admit(
            "text/plain",
            DEFAULT_MAX_DOCUMENT_BYTES + 1,
            DEFAULT_MAX_DOCUMENT_BYTES,
        )
        .unwrap_err();

        match err {
            DomainError::PayloadTooLarge { size, limit } => {
                assert_eq!(size, DEFAULT_MAX_DOCUMENT_BYTES + 1);
                assert_eq!(limit, DEFAULT_MAX_DOCUMENT_BYTES);
            }
            other => panic!("Expected PayloadTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_admit_at_exact_limit() {
        assert!(admit("text/plain", DEFAULT_MAX_DOCUMENT_BYTES, DEFAULT_MAX_DOCUMENT_BYTES).is_ok());
    }
}
