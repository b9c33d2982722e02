// Form controller: submission gating, payload assembly, and merging extracted
// résumé fields into the form.

pub mod populate;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eligibility::{
    AadhaarLink, EligibilitySelection, EnrollmentStatus, GovtJobStatus,
};
use crate::recommend::models::RecommendationRequest;

pub const DEFAULT_CITIZENSHIP: &str = "Indian";
pub const DEFAULT_DURATION: &str = "12 Months";
pub const DEFAULT_INCOME: &str = "Up to ₹8,00,000";

/// Snapshot of every input on the intake form. Text inputs hold raw values;
/// radio groups are `None` until a choice is made.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormFields {
    pub name: String,
    pub citizenship: String,
    pub age: String,
    pub edu_min: String,
    pub skills: String,
    pub domain: String,
    pub location: String,
    pub duration: String,
    pub enrollment: Option<EnrollmentStatus>,
    pub income: String,
    pub aadhaar_link: Option<AadhaarLink>,
    pub govt_job: Option<GovtJobStatus>,
    pub resume_attached: bool,
}

impl FormFields {
    pub fn selection(&self) -> EligibilitySelection {
        EligibilitySelection {
            enrollment: self.enrollment,
            govt_job: self.govt_job,
            aadhaar_link: self.aadhaar_link,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    Name,
    Age,
    EduMin,
    Skills,
    Domain,
    Location,
    Enrollment,
    AadhaarLink,
    GovtJob,
    ResumeUpload,
}

impl FieldId {
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Age => "Age",
            FieldId::EduMin => "Education",
            FieldId::Skills => "Skills",
            FieldId::Domain => "Preferred Domain",
            FieldId::Location => "Preferred Location",
            FieldId::Enrollment => "Current Status",
            FieldId::AadhaarLink => "Bank Account & Aadhaar Linking",
            FieldId::GovtJob => "Government Job Status",
            FieldId::ResumeUpload => "Resume Upload",
        }
    }

    fn is_filled(self, fields: &FormFields) -> bool {
        let text = |value: &str| !value.trim().is_empty();
        match self {
            FieldId::Name => text(&fields.name),
            FieldId::Age => text(&fields.age),
            FieldId::EduMin => text(&fields.edu_min),
            FieldId::Skills => text(&fields.skills),
            FieldId::Domain => text(&fields.domain),
            FieldId::Location => text(&fields.location),
            FieldId::Enrollment => fields.enrollment.is_some(),
            FieldId::AadhaarLink => fields.aadhaar_link.is_some(),
            FieldId::GovtJob => fields.govt_job.is_some(),
            FieldId::ResumeUpload => fields.resume_attached,
        }
    }
}

const ALWAYS_REQUIRED: &[FieldId] = &[
    FieldId::Name,
    FieldId::Age,
    FieldId::EduMin,
    FieldId::Skills,
    FieldId::Domain,
    FieldId::Location,
    FieldId::Enrollment,
    FieldId::AadhaarLink,
    FieldId::GovtJob,
];

/// Submission policy knobs that differ between deployments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormPolicy {
    /// When false the résumé upload is optional.
    pub resume_upload_required: bool,
}

impl FormPolicy {
    pub fn required_fields(&self) -> Vec<FieldId> {
        let mut required = ALWAYS_REQUIRED.to_vec();
        if self.resume_upload_required {
            required.push(FieldId::ResumeUpload);
        }
        required
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please complete the Government Job Status section. You must not be in a government job to be eligible.")]
    GovtJobIneligible,

    #[error("Please complete the Enrollment Status section. You must not be enrolled in full-time study/job to be eligible.")]
    EnrollmentIneligible,

    #[error("Please fill in all required fields: {}", field_labels(.0))]
    MissingFields(Vec<FieldId>),
}

fn field_labels(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Validates the form and assembles the request for the recommendation service.
///
/// Checks run in order: government job, enrollment, then required fields.
/// Blank optional fields fall back to fixed defaults.
pub fn prepare_submission(
    fields: &FormFields,
    policy: &FormPolicy,
) -> Result<RecommendationRequest, ValidationError> {
    let govt_job = match fields.govt_job {
        Some(GovtJobStatus::No) => GovtJobStatus::No,
        Some(GovtJobStatus::Yes) | None => return Err(ValidationError::GovtJobIneligible),
    };

    let enrollment = match fields.enrollment {
        Some(EnrollmentStatus::EnrolledFullTime) | None => {
            return Err(ValidationError::EnrollmentIneligible)
        }
        Some(status) => status,
    };

    let missing: Vec<FieldId> = policy
        .required_fields()
        .into_iter()
        .filter(|field| !field.is_filled(fields))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    Ok(RecommendationRequest {
        name: fields.name.trim().to_string(),
        citizenship: or_default(&fields.citizenship, DEFAULT_CITIZENSHIP),
        age: parse_leading_int(&fields.age),
        edu_min: fields.edu_min.trim().to_string(),
        skills: fields.skills.trim().to_string(),
        domain: fields.domain.trim().to_string(),
        location: fields.location.trim().to_string(),
        duration: or_default(&fields.duration, DEFAULT_DURATION),
        edu: enrollment.form_value().to_string(),
        income: or_default(&fields.income, DEFAULT_INCOME),
        aadhaar_link: fields
            .aadhaar_link
            .unwrap_or(AadhaarLink::No)
            .form_value()
            .to_string(),
        govt_job: govt_job.form_value().to_string(),
    })
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

/// Parses the leading decimal digits of `raw`; 0 when there are none. A
/// leading sign is not a digit, so negative input also collapses to 0.
fn parse_leading_int(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
