//! Key concepts structurer

use crate::domain::analysis::cleanup::{is_lead_in, preprocess, strip_list_prefix};
use crate::domain::analysis::{
    ConceptItem, ConceptsSection, SectionKind, SectionStructurer, StructuredResult,
};

/// Recovers title/description pairs from a generated concept list.
///
/// Candidate lines either carry a bullet marker, contain a `:` delimiter, or
/// are long enough to plausibly be a concept on their own. The title is
/// whatever precedes the first `:`; everything after it is the description.
#[derive(Debug, Clone, Default)]
pub struct ConceptsStructurer;

impl ConceptsStructurer {
    pub fn new() -> Self {
        Self
    }

    fn is_candidate(line: &str) -> bool {
        if line.chars().count() < 3 {
            return false;
        }

        line.starts_with('•')
            || line.contains(':')
            || (line.chars().count() > 10 && !Self::is_filler(line))
    }

    fn is_filler(line: &str) -> bool {
        is_lead_in(line) || line.to_lowercase().starts_with("anahtar kavramlar")
    }
}

impl SectionStructurer for ConceptsStructurer {
    fn kind(&self) -> SectionKind {
        SectionKind::Concepts
    }

    fn structure(&self, raw: &str) -> StructuredResult {
        let cleaned = preprocess(raw);

        let mut items: Vec<ConceptItem> = Vec::new();

        for line in cleaned.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || !Self::is_candidate(trimmed) {
                continue;
            }

            let stripped = strip_list_prefix(trimmed);
            if stripped.is_empty() {
                continue;
            }

            let (title, description) = match stripped.split_once(':') {
                Some((title, description)) => (title.trim(), description.trim()),
                None => (stripped.as_str(), ""),
            };

            if title.is_empty() {
                continue;
            }

            items.push(ConceptItem::new(title, description));
        }

        // Degraded pass: no line matched the concept shape, so render every
        // non-filler line as an unstructured entry.
        if items.is_empty() {
            for line in cleaned.lines() {
                let stripped = strip_list_prefix(line);
                if stripped.is_empty() || Self::is_filler(&stripped) {
                    continue;
                }
                items.push(ConceptItem::new(stripped, ""));
            }
        }

        if items.is_empty() {
            return StructuredResult::fallback(SectionKind::Concepts, cleaned);
        }

        StructuredResult::Concepts(ConceptsSection {
            items,
            raw_fallback: None,
        })
    }
}
