//! Highest-qualification detection.
//!
//! Every keyword variant maps to a canonical label. All labels found in the
//! text are ranked by [`education_rank`] and the highest wins; equal ranks keep
//! the label whose keyword comes first in [`EDUCATION_KEYWORDS`], so the order
//! of mention in the résumé never changes the outcome.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

struct EducationKeyword {
    keyword: &'static str,
    label: &'static str,
    /// Two-letter abbreviations that are also ordinary words ("be", "me",
    /// and "ME" in an "ABOUT ME" heading). They only count in capitals and
    /// followed by a discipline ("BE Mechanical", "MA in English", "BA (Hons)").
    needs_discipline: bool,
}

const fn kw(keyword: &'static str, label: &'static str) -> EducationKeyword {
    EducationKeyword {
        keyword,
        label,
        needs_discipline: false,
    }
}

const fn abbr(keyword: &'static str, label: &'static str) -> EducationKeyword {
    EducationKeyword {
        keyword,
        label,
        needs_discipline: true,
    }
}

const EDUCATION_KEYWORDS: &[EducationKeyword] = &[
    // bachelor's
    kw("bca", "BCA"),
    kw("bba", "BBA"),
    kw("bcom", "B.Com"),
    kw("b.sc", "B.Sc"),
    kw("bachelor of science", "B.Sc"),
    kw("bachelor of commerce", "B.Com"),
    kw("bachelor of arts", "BA"),
    abbr("BA", "BA"),
    kw("btech", "B.Tech"),
    kw("b.tech", "B.Tech"),
    abbr("BE", "B.E"),
    kw("b.e", "B.E"),
    kw("bachelor of engineering", "B.E"),
    kw("bachelor of technology", "B.Tech"),
    kw("bachelor", "Bachelor"),
    kw("b.pharma", "B.Pharma"),
    kw("bachelor of pharmacy", "B.Pharma"),
    // master's
    kw("mca", "MCA"),
    kw("mba", "MBA"),
    kw("mcom", "M.Com"),
    kw("m.sc", "M.Sc"),
    kw("master of science", "M.Sc"),
    kw("master of commerce", "M.Com"),
    kw("master of arts", "MA"),
    abbr("MA", "MA"),
    kw("mtech", "M.Tech"),
    kw("m.tech", "M.Tech"),
    abbr("ME", "M.E"),
    kw("m.e", "M.E"),
    kw("master of engineering", "M.E"),
    kw("master of technology", "M.Tech"),
    kw("master", "Master"),
    // school and vocational
    kw("diploma", "Diploma"),
    kw("iti", "ITI"),
    kw("class 10", "Class 10"),
    kw("class x", "Class 10"),
    kw("10th", "Class 10"),
    kw("class 12", "Class 12"),
    kw("class xii", "Class 12"),
    kw("12th", "Class 12"),
];

/// A parenthesised specialisation, or a capitalised subject word optionally
/// introduced by "in".
const DISCIPLINE_SUFFIX: &str = r"(?:[ \t]*\(|[ \t]+(?:in[ \t]+)?[A-Z][a-z])";

static EDUCATION_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    EDUCATION_KEYWORDS
        .iter()
        .map(|entry| {
            let body = regex::escape(entry.keyword).replace(' ', r"\s*");
            let pattern = if entry.needs_discipline {
                format!(r"\b{body}{DISCIPLINE_SUFFIX}")
            } else {
                format!(r"(?i)\b{body}\b")
            };
            let re = Regex::new(&pattern)
                .expect("education keyword must compile");
            (re, entry.label)
        })
        .collect()
});

/// Position of a canonical label in the qualification hierarchy; 0 if unknown.
pub fn education_rank(label: &str) -> u8 {
    match label {
        "Class 10" => 1,
        "Class 12" => 2,
        "ITI" => 3,
        "Diploma" => 4,
        "Bachelor" | "BCA" | "BBA" | "B.Com" | "B.Sc" | "BA" | "B.E" | "B.Tech" | "B.Pharma" => 5,
        "Master" | "MCA" | "MBA" | "M.Com" | "M.Sc" | "MA" | "M.E" | "M.Tech" => 6,
        _ => 0,
    }
}

/// Returns the highest canonical qualification mentioned in `text`, or an
/// empty string when none is found.
pub fn extract_education(text: &str) -> String {
    let mut highest: Option<&'static str> = None;

    for &(ref pattern, label) in EDUCATION_PATTERNS.iter() {
        if !pattern.is_match(text) {
            continue;
        }
        debug!(label, "education keyword matched");
        match highest {
            Some(current) if education_rank(label) <= education_rank(current) => {}
            _ => highest = Some(label),
        }
    }

    highest.unwrap_or_default().to_string()
}
