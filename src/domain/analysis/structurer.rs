//! Section structurer trait and factory
//!
//! One structurer per section kind, all following the same pipeline: clean
//! the raw text, select candidate lines, map them to typed items. They share
//! the preprocessing in [`super::cleanup`] and differ only in the candidate
//! predicate and the per-item field splitting.
//!
//! There is no error terminal: a structurer always returns a renderable
//! [`StructuredResult`], degrading to the raw-fallback form when the text
//! refuses to match any structure.

use std::fmt::Debug;

use super::structurers::{ConceptsStructurer, GapsStructurer, QuizStructurer, SummaryStructurer};
use super::{SectionKind, StructuredResult};

/// Trait for converting one raw generated-text section into a typed record
pub trait SectionStructurer: Send + Sync + Debug {
    /// The section kind this structurer produces
    fn kind(&self) -> SectionKind;

    /// Structure one raw section. Degraded input ends in the fallback
    /// state, never in an error.
    fn structure(&self, raw: &str) -> StructuredResult;
}

/// Factory for creating section structurers
#[derive(Debug, Default)]
pub struct StructurerFactory;

impl StructurerFactory {
    /// Create the structurer for the given section kind
    pub fn create(kind: SectionKind) -> Box<dyn SectionStructurer> {
        match kind {
            SectionKind::Summary => Box::new(SummaryStructurer::new()),
            SectionKind::Concepts => Box::new(ConceptsStructurer::new()),
            SectionKind::Quiz => Box::new(QuizStructurer::new()),
            SectionKind::Gaps => Box::new(GapsStructurer::new()),
        }
    }

    /// Convenience: structure one raw section by kind
    pub fn structure(kind: SectionKind, raw: &str) -> StructuredResult {
        Self::create(kind).structure(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creates_matching_kind() {
        for kind in SectionKind::ALL {
            let structurer = StructurerFactory::create(kind);
            assert_eq!(structurer.kind(), kind);
        }
    }

    #[test]
    fn test_every_structurer_survives_empty_input() {
        for kind in SectionKind::ALL {
            let result = StructurerFactory::structure(kind, "");
            assert_eq!(result.kind(), kind);
            assert_eq!(result.item_count(), 0);
        }
    }

    #[test]
    fn test_every_structurer_survives_whitespace_input() {
        for kind in SectionKind::ALL {
            let result = StructurerFactory::structure(kind, "  \n\t  \n");
            assert_eq!(result.item_count(), 0);
        }
    }
}
