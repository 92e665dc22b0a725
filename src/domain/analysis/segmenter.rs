//! Bulk response segmentation
//!
//! A bulk generation call returns all four sections in one response, each
//! introduced by a heading line from the shared label table. The response
//! format is a convention, not a contract: headings may arrive in any
//! order, carry markdown `#` prefixes, or be missing entirely. Each section
//! is therefore located independently by its own heading pattern, and an
//! absent heading yields the [`SECTION_NOT_FOUND`] sentinel instead of an
//! error.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{SectionKind, SECTION_NOT_FOUND};

/// Raw text of the four sections of one bulk response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSections {
    pub summary: String,
    pub concepts: String,
    pub questions: String,
    pub gaps: String,
}

impl BulkSections {
    /// Raw text for one section kind
    pub fn section(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Summary => &self.summary,
            SectionKind::Concepts => &self.concepts,
            SectionKind::Quiz => &self.questions,
            SectionKind::Gaps => &self.gaps,
        }
    }
}

/// Heading-line patterns, one per section, built from the shared label table.
///
/// Trailing text after the label is tolerated only behind a markdown `#`
/// prefix; a bare label must stand alone on its line (optionally with a
/// colon). Otherwise a body line that merely opens with a label word
/// ("özet metni ...") would truncate its section.
static HEADING_PATTERNS: Lazy<Vec<(SectionKind, Regex)>> = Lazy::new(|| {
    SectionKind::ALL
        .into_iter()
        .map(|kind| {
            let label = regex::escape(kind.heading_label());
            let pattern = format!(
                r"(?im)^[ \t]*(?:#{{1,6}}[ \t]*{label}\b[^\n]*|{label}[ \t]*:?[ \t]*)$"
            );
            (kind, Regex::new(&pattern).unwrap())
        })
        .collect()
});

/// Split one bulk response into its four named sections.
pub fn segment(text: &str) -> BulkSections {
    // Every heading occurrence, for delimiting sections regardless of order
    let mut heading_spans: Vec<(usize, usize)> = HEADING_PATTERNS
        .iter()
        .flat_map(|(_, pattern)| pattern.find_iter(text).map(|m| (m.start(), m.end())))
        .collect();
    heading_spans.sort_unstable();

    let extract = |kind: SectionKind| -> String {
        let (_, pattern) = HEADING_PATTERNS
            .iter()
            .find(|(k, _)| *k == kind)
            .expect("pattern exists for every section kind");

        let Some(heading) = pattern.find(text) else {
            return SECTION_NOT_FOUND.to_string();
        };

        let end = heading_spans
            .iter()
            .map(|&(start, _)| start)
            .find(|&start| start >= heading.end())
            .unwrap_or(text.len());

        text[heading.end()..end].trim().to_string()
    };

    BulkSections {
        summary: extract(SectionKind::Summary),
        concepts: extract(SectionKind::Concepts),
        questions: extract(SectionKind::Quiz),
        gaps: extract(SectionKind::Gaps),
    }
}
