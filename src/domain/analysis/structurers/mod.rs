//! The four section structurers

pub mod concepts;
pub mod gaps;
pub mod quiz;
pub mod summary;

pub use concepts::ConceptsStructurer;
pub use gaps::GapsStructurer;
pub use quiz::QuizStructurer;
pub use summary::SummaryStructurer;
