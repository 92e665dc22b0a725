//! Extract command - decodes a local document and prints its text
//!
//! Runs the same admission and decoding pipeline as the upload endpoint,
//! without requiring a generation-service key.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::domain::document::{admission, MediaType, RawDocument};
use crate::infrastructure::ingestion::DecoderFactory;

#[derive(Args)]
pub struct ExtractArgs {
    /// Path to the document to decode
    pub file: PathBuf,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    let config = AppConfig::load().unwrap_or_default();

    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("Cannot read '{}'", args.file.display()))?;

    let original_name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("document")
        .to_string();

    let declared_media_type = MediaType::detect_from_filename(&original_name)
        .map(|media_type| media_type.mime_types()[0].to_string())
        .or_else(|| {
            mime_guess::from_path(&args.file)
                .first_raw()
                .map(str::to_string)
        })
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let media_type = admission::admit(
        &declared_media_type,
        bytes.len(),
        config.ingestion.max_document_bytes,
    )?;

    let document = RawDocument::new(bytes, declared_media_type, original_name);
    let extracted = DecoderFactory::create(media_type).decode(&document)?;

    if extracted.is_blank() {
        anyhow::bail!("No extractable text in '{}'", args.file.display());
    }

    println!("{}", extracted.content);

    Ok(())
}
