//! Knowledge gaps structurer

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::analysis::cleanup::{is_lead_in, preprocess, strip_list_prefix};
use crate::domain::analysis::{
    GapsSection, SectionKind, SectionStructurer, StructuredResult,
};

/// Bare section-title echoes ("Eksik Konular:", "Konular:") with no content
static TITLE_ECHO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(eksik|derinleştirilmesi gereken konular?|geliştirilmesi gereken|önerilen ek çalışma konuları|konular?|topics to deepen)[:.]?\s*$",
    )
    .unwrap()
});

/// Lowercased prefixes of heading-like filler lines
const FILLER_PREFIXES: &[&str] = &["eksik konular", "geliştirilmesi gereken"];

/// Recovers missing-topic entries from a generated gaps section.
///
/// A candidate line is anything non-trivial (at least 5 characters after
/// trimming) that is neither a bare title echo nor a lead-in sentence.
#[derive(Debug, Clone, Default)]
pub struct GapsStructurer;

impl GapsStructurer {
    pub fn new() -> Self {
        Self
    }

    fn is_filler(line: &str) -> bool {
        if TITLE_ECHO.is_match(line) || is_lead_in(line) {
            return true;
        }

        let lower = line.to_lowercase();
        FILLER_PREFIXES.iter().any(|p| lower.starts_with(p))
    }
}

impl SectionStructurer for GapsStructurer {
    fn kind(&self) -> SectionKind {
        SectionKind::Gaps
    }

    fn structure(&self, raw: &str) -> StructuredResult {
        let cleaned = preprocess(raw);

        let mut items: Vec<String> = Vec::new();

        for line in cleaned.lines() {
            let trimmed = line.trim();
            if trimmed.chars().count() < 5 || Self::is_filler(trimmed) {
                continue;
            }

            let stripped = strip_list_prefix(trimmed);
            if stripped.is_empty() {
                continue;
            }

            items.push(stripped);
        }

        if items.is_empty() {
            return StructuredResult::fallback(SectionKind::Gaps, cleaned);
        }

        StructuredResult::Gaps(GapsSection {
            items,
            raw_fallback: None,
        })
    }
}
