//! Generated-text analysis: prompts, segmentation, and structuring

pub mod cleanup;
pub mod headings;
pub mod prompt;
pub mod result;
pub mod segmenter;
pub mod structurer;
pub mod structurers;

pub use headings::{SectionKind, SECTION_NOT_FOUND};
pub use prompt::{resolve, AnalysisDirective};
pub use result::{
    ConceptItem, ConceptsSection, GapsSection, QuizItem, QuizOption, QuizSection,
    StructuredResult, SummarySection,
};
pub use segmenter::{segment, BulkSections};
pub use structurer::{SectionStructurer, StructurerFactory};
