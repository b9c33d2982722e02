// Résumé field extraction: turns PDF-extracted text into candidate attributes.
// Everything here is synchronous over already-extracted text except `pdf`.

pub mod education;
pub mod handlers;
pub mod name;
pub mod pdf;
pub mod skills;

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::extraction::education::extract_education;
use crate::extraction::name::{extract_name, NameCasePolicy};
use crate::extraction::skills::extract_skills;

const MIN_AGE: u8 = 18;
const MAX_AGE: u8 = 35;

static AGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:age|years\s*old)[:\s]*(\d{2})").expect("age pattern must compile")
});

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No file selected. You can still get recommendations without uploading a resume.")]
    NoFile,

    #[error("Please select a PDF file.")]
    NotPdf,

    #[error("No resume text to extract from.")]
    EmptyText,

    #[error("Could not read the uploaded file: {0}")]
    Upload(String),

    #[error("Error extracting information from PDF: {0}")]
    Unparseable(String),
}

/// Candidate attributes recovered from one résumé. Transient: the caller
/// merges it into the form and drops it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub name: String,
    pub age: Option<u8>,
    /// Deduplicated, first-seen order.
    pub skills: Vec<String>,
    /// One canonical education label, or empty.
    pub education: String,
}

/// Runs the name, age, skill and education extractors over one text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeFieldExtractor {
    pub name_policy: NameCasePolicy,
}

impl ResumeFieldExtractor {
    pub fn new(name_policy: NameCasePolicy) -> Self {
        Self { name_policy }
    }

    pub fn extract(&self, text: &str) -> ExtractedProfile {
        let profile = ExtractedProfile {
            name: extract_name(text, self.name_policy),
            age: extract_age(text),
            skills: extract_skills(text),
            education: extract_education(text),
        };

        info!(
            has_name = !profile.name.is_empty(),
            age = ?profile.age,
            skills = profile.skills.len(),
            education = %profile.education,
            "Resume fields extracted"
        );

        profile
    }
}

/// Lower-cases text for the keyword matchers.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// First `age: NN` / `NN years old`-style mention, kept only within 18..=35.
pub fn extract_age(text: &str) -> Option<u8> {
    let digits = AGE_RE.captures(text)?.get(1)?.as_str();
    let age: u8 = digits.parse().ok()?;
    (MIN_AGE..=MAX_AGE).contains(&age).then_some(age)
}
