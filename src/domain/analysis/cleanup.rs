//! Shared text cleanup for generated sections
//!
//! Every structurer runs the same first pass over its raw section text:
//! emphasis markup is removed globally, a leading conversational sentence
//! ("İşte metnin özeti: ...", "Here are the key concepts: ...") is dropped,
//! and the result is trimmed. Per-line helpers strip list decorations.
//!
//! The generation service answers in Turkish, so the lead-in vocabulary is
//! Turkish first, with the English phrasings it occasionally falls back to.

use once_cell::sync::Lazy;
use regex::Regex;

/// Emphasis markup (`*`, `**`, ...) anywhere in the text
static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+").unwrap());

/// Bullet markers at the start of a line
static BULLET_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[•\-\*]+\s*").unwrap());

/// Numbering markers ("3. ") at the start of a line
static NUMBER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Leading conversational sentence, up to and including its closing ':' or '.'
///
/// The capital dotted İ of "İşte" does not case-fold to ASCII `i` under the
/// regex engine's simple folding, so it is spelled out as an alternative.
static LEAD_IN_SENTENCE: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^\s*(işte|İşte)[^\n]*?[:.]\s*",
        r"(?i)^\s*en önemli[^\n]*?[:.]\s*",
        r"(?i)^\s*aşağıda[^\n]*?[:.]\s*",
        r"(?i)^\s*(here (?:are|is)|the following)[^\n]*?[:.]\s*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Lowercased prefixes that mark a line as conversational filler rather than
/// content. "i\u{307}şte" is what "İşte" becomes under `str::to_lowercase`.
const LEAD_IN_PREFIXES: &[&str] = &[
    "işte",
    "i\u{307}şte",
    "en önemli",
    "here are",
    "here is",
    "the following",
    "aşağıda",
];

/// Shared preprocessing: strip emphasis, strip one lead-in sentence, trim.
pub fn preprocess(raw: &str) -> String {
    let text = EMPHASIS.replace_all(raw, "");
    let mut text = text.into_owned();

    for pattern in LEAD_IN_SENTENCE.iter() {
        if let Some(stripped) = pattern.find(&text).filter(|m| m.start() == 0) {
            text = text[stripped.end()..].to_string();
            break;
        }
    }

    text.trim().to_string()
}

/// Whether a line is a conversational lead-in rather than content
pub fn is_lead_in(line: &str) -> bool {
    let lower = line.trim_start().to_lowercase();
    LEAD_IN_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Strip a leading bullet marker from a line
pub fn strip_bullet(line: &str) -> &str {
    match BULLET_PREFIX.find(line.trim_start()) {
        Some(m) => &line.trim_start()[m.end()..],
        None => line.trim_start(),
    }
}

/// Strip leading bullet and numbering markers from a line
pub fn strip_list_prefix(line: &str) -> String {
    let stripped = strip_bullet(line.trim());
    NUMBER_PREFIX.replace(stripped, "").trim().to_string()
}

/// Strip a leading numbering marker ("1. ") from a line
pub fn strip_number_prefix(line: &str) -> String {
    NUMBER_PREFIX.replace(line.trim(), "").trim().to_string()
}

/// Whether a trimmed line starts with a numbering marker
pub fn starts_numbered(line: &str) -> bool {
    NUMBER_PREFIX.is_match(line.trim_start())
}
