use tracing::debug;

use crate::extraction::ExtractedProfile;
use crate::form::FormFields;

/// Options offered by the intake form's education dropdown.
pub const DEFAULT_EDUCATION_OPTIONS: &[&str] = &[
    "Class 10", "ITI", "Diploma", "BCA", "BA", "BBA", "B.Sc", "B.Com", "B.Pharma",
];

fn option_level(option: &str) -> u8 {
    match option.to_lowercase().as_str() {
        "class 10" => 1,
        "iti" => 2,
        "diploma" => 3,
        "bca" | "ba" | "bba" | "b.sc" | "b.com" | "b.pharma" => 4,
        _ => 0,
    }
}

/// Merges an extracted profile into the form without clobbering user input.
///
/// Name and age are only written into empty fields. Skills are appended to
/// the existing comma-separated list with exact duplicates dropped.
/// Education is mapped onto `edu_options`.
pub fn merge_profile(fields: &mut FormFields, profile: &ExtractedProfile, edu_options: &[&str]) {
    if !profile.name.is_empty() && fields.name.trim().is_empty() {
        fields.name = profile.name.clone();
    }

    if let Some(age) = profile.age {
        if fields.age.trim().is_empty() {
            fields.age = age.to_string();
        }
    }

    if !profile.skills.is_empty() {
        let mut merged: Vec<String> = fields
            .skills
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for skill in &profile.skills {
            if !merged.contains(skill) {
                merged.push(skill.clone());
            }
        }
        fields.skills = merged.join(", ");
    }

    if !profile.education.is_empty() {
        match match_education_option(&profile.education, edu_options) {
            Some(option) => fields.edu_min = option.to_string(),
            None if fields.edu_min.trim().is_empty() => {
                if let Some(first) = edu_options.first() {
                    fields.edu_min = first.to_string();
                }
            }
            None => {}
        }
        debug!(education = %profile.education, selected = %fields.edu_min, "Education mapped");
    }
}

/// Exact case-insensitive match, then an option containing the label, then
/// the highest-level option the dropdown knows about.
fn match_education_option<'a>(education: &str, options: &[&'a str]) -> Option<&'a str> {
    let wanted = education.to_lowercase();

    if let Some(exact) = options.iter().find(|o| o.to_lowercase() == wanted) {
        return Some(exact);
    }
    if let Some(partial) = options.iter().find(|o| o.to_lowercase().contains(&wanted)) {
        return Some(partial);
    }

    let mut best: Option<(&'a str, u8)> = None;
    for &option in options {
        let level = option_level(option);
        if level > best.map_or(0, |(_, l)| l) {
            best = Some((option, level));
        }
    }
    best.map(|(option, _)| option)
}
