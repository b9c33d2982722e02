//! Wire types for the remote recommendation and translation service.

use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /ai_recommend`. Keys mirror the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub name: String,
    pub citizenship: String,
    pub age: u32,
    pub edu_min: String,
    /// Comma-joined skill list.
    pub skills: String,
    pub domain: String,
    pub location: String,
    pub duration: String,
    /// Enrollment form value.
    pub edu: String,
    pub income: String,
    pub aadhaar_link: String,
    pub govt_job: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub education: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub skills: String,
    #[serde(default)]
    pub preferred_domain: String,
    #[serde(default)]
    pub preferred_location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub internship_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub duration: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub stipend: String,
    /// Opaque relevance in [0, 1].
    pub similarity_score: f64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub total_recommendations: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub user_profile: UserProfile,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

pub const NO_RESULTS_MESSAGE: &str =
    "No internships found matching your criteria. Please try adjusting your preferences.";

impl RecommendationResponse {
    /// Heading for the result list: the server's message when present,
    /// otherwise "Top N Internship Recommendation(s)".
    pub fn headline(&self) -> String {
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            return message.to_string();
        }
        match self.total_recommendations {
            0 => NO_RESULTS_MESSAGE.to_string(),
            1 => "Top 1 Internship Recommendation".to_string(),
            n => format!("Top {n} Internship Recommendations"),
        }
    }
}

/// Display band for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ScoreBand::High
        } else if score >= 0.5 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

/// Target language of a translation batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
    Bn,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateBatchRequest {
    pub texts: Vec<String>,
    pub target_lang: Language,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub translated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateBatchResponse {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// Accepts a string, number or list (joined with ", ") where the service is
/// loose about types, e.g. a numeric stipend or a skills array.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_with_form_keys() {
        let request = RecommendationRequest {
            name: "Ananya Iyer".to_string(),
            citizenship: "Indian".to_string(),
            age: 22,
            edu_min: "B.Tech".to_string(),
            skills: "Python, SQL".to_string(),
            domain: "Technology".to_string(),
            location: "Pune".to_string(),
            duration: "12 Months".to_string(),
            edu: "Not in full-time".to_string(),
            income: "Up to ₹8,00,000".to_string(),
            aadhaar_link: "yes".to_string(),
            govt_job: "no".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["eduMin"], "B.Tech");
        assert_eq!(json["aadhaarLink"], "yes");
        assert_eq!(json["govtJob"], "no");
        assert_eq!(json["age"], 22);
        assert!(json.get("edu_min").is_none());
    }

    #[test]
    fn test_response_deserializes_service_payload() {
        let json = r#"{
            "user_profile": {
                "name": "Ananya Iyer",
                "citizenship": "Indian",
                "education": "B.Tech",
                "skills": "Python, SQL",
                "preferred_domain": "Technology",
                "preferred_location": "Pune"
            },
            "recommendations": [{
                "company": "Infosys",
                "role": "Data Intern",
                "domain": "Technology",
                "location": "Pune",
                "type": "Hybrid",
                "duration": "6 Months",
                "stipend": 15000,
                "similarity_score": 0.87,
                "reason": "Strong Python match"
            }],
            "total_recommendations": 1,
            "model_type": "ml-based",
            "message": "Found 1 internship matching your criteria."
        }"#;

        let response: RecommendationResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_recommendations, 1);
        assert_eq!(response.user_profile.preferred_location, "Pune");
        let rec = &response.recommendations[0];
        assert_eq!(rec.internship_type, "Hybrid");
        assert_eq!(rec.stipend, "15000");
        assert!((rec.similarity_score - 0.87).abs() < f64::EPSILON);
        assert_eq!(response.headline(), "Found 1 internship matching your criteria.");
    }

    #[test]
    fn test_skills_array_is_joined() {
        let json = r#"{"name": "A", "skills": ["Python", "SQL"]}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.skills, "Python, SQL");
    }

    #[test]
    fn test_headline_fallbacks() {
        let mut response = RecommendationResponse {
            total_recommendations: 0,
            message: None,
            user_profile: UserProfile::default(),
            recommendations: vec![],
        };
        assert_eq!(response.headline(), NO_RESULTS_MESSAGE);
        response.total_recommendations = 1;
        assert_eq!(response.headline(), "Top 1 Internship Recommendation");
        response.total_recommendations = 3;
        assert_eq!(response.headline(), "Top 3 Internship Recommendations");
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(0.95), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(0.8), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(0.79), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(0.5), ScoreBand::Medium);
        assert_eq!(ScoreBand::from_score(0.49), ScoreBand::Low);
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(serde_json::to_string(&Language::Hi).unwrap(), r#""hi""#);
        let lang: Language = serde_json::from_str(r#""bn""#).unwrap();
        assert_eq!(lang, Language::Bn);
        assert!(serde_json::from_str::<Language>(r#""fr""#).is_err());
    }
}
