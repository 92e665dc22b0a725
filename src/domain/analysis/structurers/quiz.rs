//! Quiz structurer

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::analysis::cleanup::{preprocess, starts_numbered, strip_number_prefix};
use crate::domain::analysis::{
    QuizItem, QuizOption, QuizSection, SectionKind, SectionStructurer, StructuredResult,
};

/// Option line: a letter A-D followed by a closing parenthesis
static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([a-d])\s*\)\s*(.*)$").unwrap());

/// Keywords marking the correct-answer line, Turkish and English
const ANSWER_MARKERS: &[&str] = &["doğru", "cevap", "correct", "answer"];

/// Recovers multiple-choice questions from a generated quiz.
///
/// A line starting with an integer and a period opens a new question block.
/// Within a block the first line is the stem, option lines are collected in
/// order, and the first leftover line mentioning an answer marker becomes
/// the raw correct-answer text.
#[derive(Debug, Clone, Default)]
pub struct QuizStructurer;

impl QuizStructurer {
    pub fn new() -> Self {
        Self
    }

    fn split_blocks(cleaned: &str) -> Vec<Vec<&str>> {
        let mut blocks: Vec<Vec<&str>> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in cleaned.lines() {
            if starts_numbered(line) && !current.iter().all(|l| l.trim().is_empty()) {
                blocks.push(std::mem::take(&mut current));
            }
            current.push(line);
        }

        if !current.is_empty() {
            blocks.push(current);
        }

        blocks
    }

    fn parse_block(lines: &[&str], index: u32) -> Option<QuizItem> {
        let lines: Vec<&str> = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .collect();

        let (&first, rest) = lines.split_first()?;

        let stem = strip_number_prefix(first);
        let question = if stem.ends_with('?') {
            stem
        } else {
            format!("{}?", stem)
        };

        let mut options = Vec::new();
        let mut correct_answer_raw = None;

        for line in rest {
            if let Some(caps) = OPTION_LINE.captures(line) {
                let parsed = caps
                    .get(1)
                    .and_then(|m| m.as_str().chars().next())
                    .map(|c| c.to_ascii_uppercase());
                // Sequential A/B/C/D when the letter is unrecognizable
                let label =
                    parsed.unwrap_or_else(|| char::from(b'A' + (options.len() % 4) as u8));
                let text = caps.get(2).map_or("", |m| m.as_str()).trim().to_string();
                options.push(QuizOption::new(label, text));
            } else if correct_answer_raw.is_none() && Self::is_answer_line(line) {
                correct_answer_raw = Some(line.to_string());
            }
        }

        Some(QuizItem {
            index,
            question,
            options,
            correct_answer_raw,
        })
    }

    fn is_answer_line(line: &str) -> bool {
        let lower = line.to_lowercase();
        ANSWER_MARKERS.iter().any(|marker| lower.contains(marker))
    }
}

impl SectionStructurer for QuizStructurer {
    fn kind(&self) -> SectionKind {
        SectionKind::Quiz
    }

    fn structure(&self, raw: &str) -> StructuredResult {
        let cleaned = preprocess(raw);

        let mut items: Vec<QuizItem> = Vec::new();

        for block in Self::split_blocks(&cleaned) {
            let index = items.len() as u32 + 1;
            if let Some(item) = Self::parse_block(&block, index) {
                items.push(item);
            }
        }

        if items.is_empty() {
            return StructuredResult::fallback(SectionKind::Quiz, cleaned);
        }

        StructuredResult::Quiz(QuizSection {
            items,
            raw_fallback: None,
        })
    }
}
