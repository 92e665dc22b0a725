//! Domain layer - core types and text transformations

pub mod analysis;
pub mod document;
pub mod error;
pub mod llm;

pub use analysis::{
    AnalysisDirective, BulkSections, ConceptItem, ConceptsSection, GapsSection, QuizItem,
    QuizOption, QuizSection, SectionKind, SectionStructurer, StructuredResult, StructurerFactory,
    SummarySection, SECTION_NOT_FOUND,
};
pub use document::{DocumentDecoder, ExtractedText, MediaType, RawDocument};
pub use error::DomainError;
pub use llm::{
    FinishReason, GenerationRequest, GenerationRequestBuilder, GenerationResponse, LlmProvider,
    Usage,
};
