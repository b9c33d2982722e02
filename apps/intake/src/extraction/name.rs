//! Candidate name detection for résumé text.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How strictly a captured name must already be capitalised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCasePolicy {
    /// Accept all-lowercase captures; `format_name` repairs the casing.
    #[default]
    Lenient,
    /// The first character must already be uppercase.
    Strict,
}

impl FromStr for NameCasePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(NameCasePolicy::Lenient),
            "strict" => Ok(NameCasePolicy::Strict),
            other => Err(format!(
                "unknown name case policy '{other}' (expected 'lenient' or 'strict')"
            )),
        }
    }
}

const MAX_NAME_CHARS: usize = 40;
const MAX_NAME_WORDS: usize = 4;
const FALLBACK_LINE_COUNT: usize = 10;

/// Structural résumé words that never appear in a person's name.
const NON_NAME_WORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum",
    "vitae",
    "contact",
    "information",
    "details",
    "name",
    "address",
    "phone",
    "email",
    "objective",
    "summary",
];

// Word separators are horizontal only: a capture must not swallow the next line.
// Cue words need a word boundary and a label delimiter so prose and words like
// "Username" never act as cues.
static NAME_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bname[ \t]*[:\-][ \t]*([a-z \t'.-]{2,50})",
        r"(?i)\bcandidate[ \t]*[:\-][ \t]*([a-z \t'.-]{2,50})",
        r"(?i)\bapplicant[ \t]*[:\-][ \t]*([a-z \t'.-]{2,50})",
        r"(?i)\bresume[ \t]+of[ \t]*[:\-]?[ \t]*([a-z \t'.-]{2,50})",
        r"(?i)\bcv[ \t]+of[ \t]*[:\-]?[ \t]*([a-z \t'.-]{2,50})",
        r"(?:^|\n)([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){0,3})",
        r"(?i)^([a-z \t'.-]{2,50})\r?\n",
        r"\n([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){0,3})[ \t]*\r?\n",
        r"([A-Z][a-z]+[ \t]+[A-Z][a-z]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("name rule must compile"))
    .collect()
});

static CAPITALISED_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){0,3})").expect("prefix rule must compile")
});

/// Finds the most plausible candidate name in `text`.
///
/// Rules are tried in priority order against the whole text; the first capture
/// that passes [`is_valid_name`] wins. If none does, the first ten lines are
/// scanned individually. Returns an empty string when nothing qualifies.
pub fn extract_name(text: &str, policy: NameCasePolicy) -> String {
    for rule in NAME_RULES.iter() {
        let Some(capture) = rule.captures(text).and_then(|c| c.get(1)) else {
            continue;
        };
        let candidate = capture.as_str().trim();
        if is_valid_name(candidate, policy) {
            debug!(candidate, rule = rule.as_str(), "name rule matched");
            return format_name(candidate);
        }
        debug!(candidate, "name candidate rejected");
    }

    for line in text.split('\n').take(FALLBACK_LINE_COUNT) {
        let line = line.trim();
        let len = line.chars().count();
        if len > 2 && len < MAX_NAME_CHARS && is_valid_name(line, policy) {
            return format_name(line);
        }
        if let Some(prefix) = CAPITALISED_PREFIX.captures(line).and_then(|c| c.get(1)) {
            if is_valid_name(prefix.as_str(), policy) {
                return format_name(prefix.as_str());
            }
        }
    }

    String::new()
}

/// Returns true when `name` looks like a personal name rather than résumé chrome.
pub fn is_valid_name(name: &str, policy: NameCasePolicy) -> bool {
    let name = name.trim();
    let len = name.chars().count();
    if len < 2 || len > MAX_NAME_CHARS {
        return false;
    }

    let allowed = |c: char| c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | '.');
    if !name.chars().all(allowed) {
        return false;
    }

    if name.split_whitespace().count() > MAX_NAME_WORDS {
        return false;
    }

    let lower = name.to_lowercase();
    if NON_NAME_WORDS.iter().any(|word| lower.contains(word)) {
        return false;
    }

    match policy {
        NameCasePolicy::Lenient => true,
        NameCasePolicy::Strict => name.chars().next().is_some_and(|c| c.is_uppercase()),
    }
}

/// Title-cases each word, treating hyphenated and apostrophe names specially.
///
/// `"o'brien-smith"` becomes `"O'brien-Smith"`.
pub fn format_name(name: &str) -> String {
    name.split_whitespace()
        .map(format_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_word(word: &str) -> String {
    if word.contains('-') {
        return word.split('-').map(title_case).collect::<Vec<_>>().join("-");
    }
    if let Some((head, tail)) = word.split_once('\'') {
        return format!("{}'{}", title_case(head), tail.to_lowercase());
    }
    title_case(word)
}

fn title_case(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let mut out: String = first.to_uppercase().collect();
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
