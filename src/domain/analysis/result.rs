//! Typed results produced by the section structurers
//!
//! Structuring never fails: when the per-section heuristics find no items,
//! the cleaned raw text is carried in `raw_fallback` so the caller always
//! has something renderable. The fallback is an expected outcome, not an
//! error path.

use serde::{Deserialize, Serialize};

use super::SectionKind;

/// One structured section, tagged by kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuredResult {
    Summary(SummarySection),
    Concepts(ConceptsSection),
    Quiz(QuizSection),
    Gaps(GapsSection),
}

/// Summary as ordered paragraphs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SummarySection {
    pub paragraphs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_fallback: Option<String>,
}

/// Key concepts as ordered title/description pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ConceptsSection {
    pub items: Vec<ConceptItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_fallback: Option<String>,
}

/// A single key concept
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConceptItem {
    pub title: String,
    pub description: String,
}

impl ConceptItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Quiz questions in source order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuizSection {
    pub items: Vec<QuizItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_fallback: Option<String>,
}

/// A single multiple-choice question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizItem {
    /// 1-based position among the recovered questions
    pub index: u32,
    pub question: String,
    pub options: Vec<QuizOption>,
    /// The raw answer line as generated, emphasis stripped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer_raw: Option<String>,
}

/// A labelled answer option
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuizOption {
    /// Option letter, 'A' through 'D'
    pub label: char,
    pub text: String,
}

impl QuizOption {
    pub fn new(label: char, text: impl Into<String>) -> Self {
        Self {
            label,
            text: text.into(),
        }
    }
}

/// Knowledge gaps as ordered entries
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GapsSection {
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_fallback: Option<String>,
}

impl StructuredResult {
    /// Which section this result belongs to
    pub fn kind(&self) -> SectionKind {
        match self {
            Self::Summary(_) => SectionKind::Summary,
            Self::Concepts(_) => SectionKind::Concepts,
            Self::Quiz(_) => SectionKind::Quiz,
            Self::Gaps(_) => SectionKind::Gaps,
        }
    }

    /// A result of the given kind carrying only fallback text
    pub fn fallback(kind: SectionKind, raw: impl Into<String>) -> Self {
        let raw = Some(raw.into());
        match kind {
            SectionKind::Summary => Self::Summary(SummarySection {
                paragraphs: Vec::new(),
                raw_fallback: raw,
            }),
            SectionKind::Concepts => Self::Concepts(ConceptsSection {
                items: Vec::new(),
                raw_fallback: raw,
            }),
            SectionKind::Quiz => Self::Quiz(QuizSection {
                items: Vec::new(),
                raw_fallback: raw,
            }),
            SectionKind::Gaps => Self::Gaps(GapsSection {
                items: Vec::new(),
                raw_fallback: raw,
            }),
        }
    }

    /// Whether structuring fell back to raw text
    pub fn is_fallback(&self) -> bool {
        match self {
            Self::Summary(s) => s.raw_fallback.is_some(),
            Self::Concepts(s) => s.raw_fallback.is_some(),
            Self::Quiz(s) => s.raw_fallback.is_some(),
            Self::Gaps(s) => s.raw_fallback.is_some(),
        }
    }

    /// Number of structured items recovered
    pub fn item_count(&self) -> usize {
        match self {
            Self::Summary(s) => s.paragraphs.len(),
            Self::Concepts(s) => s.items.len(),
            Self::Quiz(s) => s.items.len(),
            Self::Gaps(s) => s.items.len(),
        }
    }
}
