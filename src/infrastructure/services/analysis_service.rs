//! Document analysis orchestration
//!
//! Wires the pipeline: admission, decoding, generation, structuring.
//! Every text transformation is pure; the two blocking edges (binary
//! decoding, the generation network call) are kept at this layer so the
//! domain stays synchronous.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{GenerationConfig, IngestionConfig};
use crate::domain::analysis::{segmenter, StructurerFactory, SECTION_NOT_FOUND};
use crate::domain::document::admission;
use crate::domain::{
    AnalysisDirective, DomainError, ExtractedText, GenerationRequest, LlmProvider, RawDocument,
    SectionKind, StructuredResult,
};
use crate::infrastructure::ingestion::DecoderFactory;

/// All four structured sections of one bulk analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAnalysis {
    pub summary: StructuredResult,
    pub concepts: StructuredResult,
    pub questions: StructuredResult,
    pub gaps: StructuredResult,
}

/// Orchestrates extraction and analysis for one request at a time.
///
/// Holds no per-request state; any number of requests may run through it
/// concurrently.
#[derive(Debug)]
pub struct AnalysisService {
    provider: Arc<dyn LlmProvider>,
    generation: GenerationConfig,
    ingestion: IngestionConfig,
}

impl AnalysisService {
    pub fn new(
        provider: Arc<dyn LlmProvider>,
        generation: GenerationConfig,
        ingestion: IngestionConfig,
    ) -> Self {
        Self {
            provider,
            generation,
            ingestion,
        }
    }

    /// Upload admission limit in bytes
    pub fn max_document_bytes(&self) -> usize {
        self.ingestion.max_document_bytes
    }

    /// Normalize an uploaded document to plain text.
    ///
    /// Admission runs first on the declared metadata; nothing is decoded for
    /// rejected uploads. Decoding itself is CPU-bound and runs on a blocking
    /// task.
    pub async fn extract(&self, document: RawDocument) -> Result<ExtractedText, DomainError> {
        let media_type = admission::admit(
            &document.declared_media_type,
            document.byte_length(),
            self.ingestion.max_document_bytes,
        )?;

        debug!(
            name = %document.original_name,
            media_type = ?media_type,
            bytes = document.byte_length(),
            "Decoding document"
        );

        let decoder = DecoderFactory::create(media_type);
        let extracted = tokio::task::spawn_blocking(move || decoder.decode(&document))
            .await
            .map_err(|e| DomainError::internal(format!("Decode task failed: {}", e)))??;

        if extracted.is_blank() {
            return Err(DomainError::extraction_failed("empty"));
        }

        info!(
            name = %extracted.source_name,
            chars = extracted.content.len(),
            "Document decoded"
        );

        Ok(extracted)
    }

    /// Run a single-section analysis over already-extracted text.
    pub async fn analyze(
        &self,
        directive: AnalysisDirective,
        source_text: &str,
    ) -> Result<StructuredResult, DomainError> {
        let kind = directive.section_kind().ok_or_else(|| {
            DomainError::validation("Bulk analysis must use the bulk endpoint")
        })?;

        let text = self.generate(directive, source_text).await?;

        Ok(StructurerFactory::structure(kind, &text))
    }

    /// Run the combined analysis: one generation call, four sections.
    pub async fn analyze_bulk(&self, source_text: &str) -> Result<BulkAnalysis, DomainError> {
        let text = self.generate(AnalysisDirective::Bulk, source_text).await?;

        let sections = segmenter::segment(&text);

        Ok(BulkAnalysis {
            summary: Self::structure_section(SectionKind::Summary, &sections.summary),
            concepts: Self::structure_section(SectionKind::Concepts, &sections.concepts),
            questions: Self::structure_section(SectionKind::Quiz, &sections.questions),
            gaps: Self::structure_section(SectionKind::Gaps, &sections.gaps),
        })
    }

    /// The segmenter's sentinel is "no content", not generated text; it goes
    /// straight to the fallback form instead of through a structurer.
    fn structure_section(kind: SectionKind, raw: &str) -> StructuredResult {
        if raw == SECTION_NOT_FOUND {
            return StructuredResult::fallback(kind, SECTION_NOT_FOUND);
        }

        StructurerFactory::structure(kind, raw)
    }

    async fn generate(
        &self,
        directive: AnalysisDirective,
        source_text: &str,
    ) -> Result<String, DomainError> {
        if source_text.trim().is_empty() {
            return Err(DomainError::validation("Source text is required"));
        }

        let prompt = crate::domain::analysis::resolve(directive, source_text);

        let max_output_tokens = match directive {
            AnalysisDirective::Bulk => self.generation.bulk_max_output_tokens,
            _ => self.generation.max_output_tokens,
        };

        let request = GenerationRequest::builder(prompt)
            .temperature(self.generation.temperature)
            .top_k(self.generation.top_k)
            .top_p(self.generation.top_p)
            .max_output_tokens(max_output_tokens)
            .build();

        let response = self
            .provider
            .generate(&self.generation.model, request)
            .await?;

        debug!(
            directive = %directive,
            chars = response.text.len(),
            "Generation call completed"
        );

        Ok(response.text)
    }
}
