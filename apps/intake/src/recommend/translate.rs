use crate::recommend::models::{Recommendation, Translation};

/// Pairs translations with their originals by position. Entries the service
/// did not return keep their original text, so a short response never fails.
pub fn apply_translations(originals: &[String], translations: &[Translation]) -> Vec<String> {
    originals
        .iter()
        .enumerate()
        .map(|(i, original)| {
            translations
                .get(i)
                .map(|t| t.translated.clone())
                .unwrap_or_else(|| original.clone())
        })
        .collect()
}

/// The seven display strings of a recommendation card, in card order:
/// header, then Domain, Location, Type, Duration, Stipend, Why Recommended.
/// `index` is zero-based; the header numbers cards from 1.
pub fn recommendation_field_strings(index: usize, rec: &Recommendation) -> Vec<String> {
    vec![
        format!("{}. {} - {}", index + 1, rec.company, rec.role),
        format!("Domain: {}", rec.domain),
        format!("Location: {}", rec.location),
        format!("Type: {}", rec.internship_type),
        format!("Duration: {}", rec.duration),
        format!("Stipend: {}", rec.stipend),
        format!("Why Recommended: {}", rec.reason),
    ]
}
