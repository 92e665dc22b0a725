//! Shared section heading vocabulary
//!
//! The bulk prompt template instructs the generation service to emit its
//! answer under these exact heading labels, and the bulk segmenter locates
//! sections by the same labels. Both sides read from this table; changing a
//! label here changes both in lockstep.

use serde::{Deserialize, Serialize};

/// Sentinel returned by the segmenter for a heading that never appeared.
///
/// Callers treat this as "no content" and must not feed it to a structurer
/// as if it were generated text.
pub const SECTION_NOT_FOUND: &str = "section not found";

/// The four derived-artifact sections of an analysis
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Concepts,
    Quiz,
    Gaps,
}

impl SectionKind {
    /// All section kinds, in the order the bulk template requests them
    pub const ALL: [SectionKind; 4] = [Self::Summary, Self::Concepts, Self::Quiz, Self::Gaps];

    /// Heading label the generation service is told to emit for this section
    pub fn heading_label(&self) -> &'static str {
        match self {
            Self::Summary => "ÖZET",
            Self::Concepts => "ANAHTAR KAVRAMLAR",
            Self::Quiz => "QUIZ SORULARI",
            Self::Gaps => "EKSİK KONULAR",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Concepts => write!(f, "concepts"),
            Self::Quiz => write!(f, "quiz"),
            Self::Gaps => write!(f, "gaps"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_labels_are_distinct() {
        let labels: std::collections::HashSet<_> =
            SectionKind::ALL.iter().map(|k| k.heading_label()).collect();
        assert_eq!(labels.len(), 4);
    }

    #[test]
    fn test_serde_tag() {
        assert_eq!(
            serde_json::to_string(&SectionKind::Concepts).unwrap(),
            "\"concepts\""
        );
    }
}
