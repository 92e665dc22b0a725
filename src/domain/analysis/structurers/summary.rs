//! Summary structurer

use crate::domain::analysis::cleanup::{preprocess, strip_bullet};
use crate::domain::analysis::{
    SectionKind, SectionStructurer, StructuredResult, SummarySection,
};

/// Reassembles a generated summary into ordered paragraphs.
///
/// Bullet markers carry no meaning in a summary and are stripped from each
/// line. Consecutive non-blank lines merge into one paragraph; each run of
/// blank lines is a paragraph break.
#[derive(Debug, Clone, Default)]
pub struct SummaryStructurer;

impl SummaryStructurer {
    pub fn new() -> Self {
        Self
    }
}

impl SectionStructurer for SummaryStructurer {
    fn kind(&self) -> SectionKind {
        SectionKind::Summary
    }

    fn structure(&self, raw: &str) -> StructuredResult {
        let cleaned = preprocess(raw);

        let mut paragraphs: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in cleaned.lines() {
            let line = strip_bullet(line).trim();

            if line.is_empty() {
                if !current.is_empty() {
                    paragraphs.push(current.join(" "));
                    current.clear();
                }
            } else {
                current.push(line.to_string());
            }
        }

        if !current.is_empty() {
            paragraphs.push(current.join(" "));
        }

        if paragraphs.is_empty() {
            return StructuredResult::fallback(SectionKind::Summary, cleaned);
        }

        StructuredResult::Summary(SummarySection {
            paragraphs,
            raw_fallback: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraphs(raw: &str) -> Vec<String> {
        match SummaryStructurer::new().structure(raw) {
            StructuredResult::Summary(section) => section.paragraphs,
            other => panic!("Expected summary result, got {:?}", other),
        }
    }

    #[test]
    fn test_single_paragraph() {
        let result = paragraphs("Metnin ana fikri budur.\nDevamı da aynı paragraftır.");
        assert_eq!(
            result,
            vec!["Metnin ana fikri budur. Devamı da aynı paragraftır."]
        );
    }

    #[test]
    fn test_blank_line_breaks_paragraph() {
        let result = paragraphs("İlk paragraf.\n\nİkinci paragraf.");
        assert_eq!(result, vec!["İlk paragraf.", "İkinci paragraf."]);
    }

    #[test]
    fn test_bullets_and_emphasis_stripped() {
        let result = paragraphs("• **Önemli** nokta bir.\n- Nokta iki.");
        assert_eq!(result, vec!["Önemli nokta bir. Nokta iki."]);
    }

    #[test]
    fn test_run_of_blank_lines_is_one_break() {
        let result = paragraphs("Bir.\n\n\n\nİki.");
        assert_eq!(result, vec!["Bir.", "İki."]);
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let first = paragraphs("• Bir nokta.\n\n• Diğer nokta.");
        let rejoined = first.join("\n\n");
        let second = paragraphs(&rejoined);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_falls_back() {
        let result = SummaryStructurer::new().structure("   \n  ");
        assert!(result.is_fallback());
        assert_eq!(result.item_count(), 0);
    }

    #[test]
    fn test_order_preserved() {
        let result = paragraphs("A.\n\nB.\n\nC.");
        assert_eq!(result, vec!["A.", "B.", "C."]);
    }
}
