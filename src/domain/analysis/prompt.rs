//! Prompt template resolution
//!
//! Maps an analysis directive plus source text to the final instruction
//! string sent to the generation service. Pure function, no state. The
//! instruction templates are Turkish, matching the product language; the
//! format blocks inside them teach the model the exact shape the
//! structurers later parse.

use serde::{Deserialize, Serialize};

use super::SectionKind;

/// The requested analysis kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisDirective {
    /// Produce a summary
    Summarize,
    /// Extract key concepts
    Concepts,
    /// Generate quiz questions
    Questions,
    /// Identify knowledge gaps
    Gaps,
    /// All four sections in one combined call
    Bulk,
}

impl AnalysisDirective {
    /// The section kind a single-section directive produces; `None` for bulk
    pub fn section_kind(&self) -> Option<SectionKind> {
        match self {
            Self::Summarize => Some(SectionKind::Summary),
            Self::Concepts => Some(SectionKind::Concepts),
            Self::Questions => Some(SectionKind::Quiz),
            Self::Gaps => Some(SectionKind::Gaps),
            Self::Bulk => None,
        }
    }
}

impl std::fmt::Display for AnalysisDirective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summarize => write!(f, "summarize"),
            Self::Concepts => write!(f, "concepts"),
            Self::Questions => write!(f, "questions"),
            Self::Gaps => write!(f, "gaps"),
            Self::Bulk => write!(f, "bulk"),
        }
    }
}

/// Resolve a directive and source text into the final instruction string.
///
/// The source text is interpolated exactly once per template.
pub fn resolve(directive: AnalysisDirective, source_text: &str) -> String {
    match directive {
        AnalysisDirective::Summarize => format!(
            "Aşağıdaki ders notunu/metni kısa ve öz bir şekilde özetle. \
Önemli noktaları kaçırma:\n\n{source_text}\n\nLütfen özet formatında ver:"
        ),

        AnalysisDirective::Concepts => format!(
            "Aşağıdaki ders notundan/metinden en önemli anahtar kavramları çıkar \
ve her birini kısaca açıkla:\n\n{source_text}\n\n\
Format:\n• Kavram 1: Açıklama\n• Kavram 2: Açıklama\n(En fazla 8 kavram)"
        ),

        AnalysisDirective::Questions => format!(
            "Aşağıdaki ders notuna/metnine dayalı olarak 5 adet çoktan seçmeli \
sınav sorusu oluştur:\n\n{source_text}\n\n\
Format:\n1. Soru metni?\n   a) Seçenek A\n   b) Seçenek B\n   c) Seçenek C\n   d) Seçenek D\n   \
Doğru cevap: X\n\n(Her soru için bu formatı kullan)"
        ),

        AnalysisDirective::Gaps => format!(
            "Aşağıdaki ders notunu/metni analiz et ve öğrencinin daha iyi anlaması \
için eksik olan veya derinleştirilmesi gereken konuları belirle:\n\n{source_text}\n\n\
Eksik/derinleştirilmesi gereken konular:\n•\n•\n•\n\n\
Önerilen ek çalışma konuları:\n•\n•\n•"
        ),

        AnalysisDirective::Bulk => format!(
            "Aşağıdaki ders notunu/metni kapsamlı bir şekilde analiz et ve şu 4 \
bölümde sonuçları ver:\n\n{source_text}\n\nLütfen cevabını şu formatta ver:\n\n\
## {summary}\n[Metnin kısa özeti]\n\n\
## {concepts}\n• Kavram 1: Açıklama\n• Kavram 2: Açıklama\n[En fazla 8 kavram]\n\n\
## {quiz}\n1. Soru?\n   a) Seçenek A  b) Seçenek B  c) Seçenek C  d) Seçenek D\n   \
Doğru: [harf]\n\n[5 soru toplam]\n\n\
## {gaps}\n• Derinleştirilmesi gereken konu 1\n• Derinleştirilmesi gereken konu 2\n[Öneriler]",
            summary = SectionKind::Summary.heading_label(),
            concepts = SectionKind::Concepts.heading_label(),
            quiz = SectionKind::Quiz.heading_label(),
            gaps = SectionKind::Gaps.heading_label(),
        ),
    }
}
