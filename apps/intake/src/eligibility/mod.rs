//! Eligibility evaluation for the two gating radio groups.
//!
//! Each group is evaluated from scratch on every selection change:
//! `Unselected -> Eligible | Ineligible`. The submit gate is derived from both
//! verdicts in one place; changing one group never touches the other's verdict.

pub mod handlers;

use serde::{Deserialize, Serialize};

pub const ENROLLED_FULL_TIME_MESSAGE: &str =
    "Sorry, you are not eligible for this internship as you are enrolled in full-time study/job.";
pub const GOVT_JOB_MESSAGE: &str = "Sorry, you are not eligible for this internship as you or your family members or your spouse has a government job.";
pub const ELIGIBLE_MESSAGE: &str = "You are eligible to apply for this internship.";

pub const AADHAAR_LINKED_MESSAGE: &str = "Great! Your bank account is linked with Aadhaar.";
pub const AADHAAR_UNLINKED_MESSAGE: &str = "Please link your bank account with Aadhaar before the internship starts for stipend disbursement.";

pub const SUBMIT_LABEL: &str = "Get AI Recommendations";
pub const NOT_ELIGIBLE_LABEL: &str = "Not Eligible";

/// Current enrollment, serialized with the form's option values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnrollmentStatus {
    #[serde(rename = "Not in full-time")]
    NotEnrolled,
    #[serde(rename = "Enrolled full-time")]
    EnrolledFullTime,
    #[serde(rename = "Distance/Online OK")]
    DistanceLearning,
}

impl EnrollmentStatus {
    pub fn form_value(self) -> &'static str {
        match self {
            EnrollmentStatus::NotEnrolled => "Not in full-time",
            EnrollmentStatus::EnrolledFullTime => "Enrolled full-time",
            EnrollmentStatus::DistanceLearning => "Distance/Online OK",
        }
    }
}

/// Whether the applicant, a family member or a spouse holds a government job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovtJobStatus {
    Yes,
    No,
}

impl GovtJobStatus {
    pub fn form_value(self) -> &'static str {
        match self {
            GovtJobStatus::Yes => "yes",
            GovtJobStatus::No => "no",
        }
    }
}

/// Whether the applicant's bank account is linked with Aadhaar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AadhaarLink {
    Yes,
    No,
}

impl AadhaarLink {
    pub fn form_value(self) -> &'static str {
        match self {
            AadhaarLink::Yes => "yes",
            AadhaarLink::No => "no",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityVerdict {
    pub eligible: bool,
    pub reason_message: &'static str,
}

impl EligibilityVerdict {
    const fn eligible() -> Self {
        Self {
            eligible: true,
            reason_message: ELIGIBLE_MESSAGE,
        }
    }

    const fn ineligible(reason_message: &'static str) -> Self {
        Self {
            eligible: false,
            reason_message,
        }
    }
}

pub fn evaluate_enrollment(status: EnrollmentStatus) -> EligibilityVerdict {
    match status {
        EnrollmentStatus::EnrolledFullTime => {
            EligibilityVerdict::ineligible(ENROLLED_FULL_TIME_MESSAGE)
        }
        EnrollmentStatus::NotEnrolled | EnrollmentStatus::DistanceLearning => {
            EligibilityVerdict::eligible()
        }
    }
}

pub fn evaluate_govt_job(status: GovtJobStatus) -> EligibilityVerdict {
    match status {
        GovtJobStatus::Yes => EligibilityVerdict::ineligible(GOVT_JOB_MESSAGE),
        GovtJobStatus::No => EligibilityVerdict::eligible(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryLevel {
    Success,
    Warning,
}

/// Informational Aadhaar notice. Never affects the submit gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AadhaarAdvisory {
    pub level: AdvisoryLevel,
    pub message: &'static str,
}

pub fn aadhaar_advisory(link: AadhaarLink) -> AadhaarAdvisory {
    match link {
        AadhaarLink::Yes => AadhaarAdvisory {
            level: AdvisoryLevel::Success,
            message: AADHAAR_LINKED_MESSAGE,
        },
        AadhaarLink::No => AadhaarAdvisory {
            level: AdvisoryLevel::Warning,
            message: AADHAAR_UNLINKED_MESSAGE,
        },
    }
}

/// The radio selections that drive eligibility. `None` means unselected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilitySelection {
    #[serde(default)]
    pub enrollment: Option<EnrollmentStatus>,
    #[serde(default)]
    pub govt_job: Option<GovtJobStatus>,
    #[serde(default)]
    pub aadhaar_link: Option<AadhaarLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmitGate {
    pub enabled: bool,
    pub label: &'static str,
}

/// Everything a view needs to render the eligibility sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityReport {
    pub enrollment: Option<EligibilityVerdict>,
    pub govt_job: Option<EligibilityVerdict>,
    pub aadhaar: Option<AadhaarAdvisory>,
    pub submit: SubmitGate,
}

impl EligibilitySelection {
    pub fn enrollment_verdict(&self) -> Option<EligibilityVerdict> {
        self.enrollment.map(evaluate_enrollment)
    }

    pub fn govt_job_verdict(&self) -> Option<EligibilityVerdict> {
        self.govt_job.map(evaluate_govt_job)
    }

    /// Enabled only while both groups report eligible. Any ineligible group
    /// switches the label to "Not Eligible"; an unselected group just keeps
    /// the button disabled.
    pub fn submit_gate(&self) -> SubmitGate {
        let verdicts = [self.enrollment_verdict(), self.govt_job_verdict()];
        let any_ineligible = verdicts.iter().flatten().any(|v| !v.eligible);
        let all_eligible = verdicts.iter().all(|v| v.as_ref().is_some_and(|v| v.eligible));

        SubmitGate {
            enabled: all_eligible,
            label: if any_ineligible {
                NOT_ELIGIBLE_LABEL
            } else {
                SUBMIT_LABEL
            },
        }
    }

    pub fn report(&self) -> EligibilityReport {
        EligibilityReport {
            enrollment: self.enrollment_verdict(),
            govt_job: self.govt_job_verdict(),
            aadhaar: self.aadhaar_link.map(aadhaar_advisory),
            submit: self.submit_gate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENROLLMENTS: [EnrollmentStatus; 3] = [
        EnrollmentStatus::NotEnrolled,
        EnrollmentStatus::EnrolledFullTime,
        EnrollmentStatus::DistanceLearning,
    ];

    fn selection(
        enrollment: Option<EnrollmentStatus>,
        govt_job: Option<GovtJobStatus>,
    ) -> EligibilitySelection {
        EligibilitySelection {
            enrollment,
            govt_job,
            aadhaar_link: None,
        }
    }

    #[test]
    fn test_enrollment_rules() {
        assert!(!evaluate_enrollment(EnrollmentStatus::EnrolledFullTime).eligible);
        assert!(evaluate_enrollment(EnrollmentStatus::NotEnrolled).eligible);
        assert!(evaluate_enrollment(EnrollmentStatus::DistanceLearning).eligible);
        assert_eq!(
            evaluate_enrollment(EnrollmentStatus::EnrolledFullTime).reason_message,
            ENROLLED_FULL_TIME_MESSAGE
        );
    }

    #[test]
    fn test_govt_job_rules() {
        let yes = evaluate_govt_job(GovtJobStatus::Yes);
        assert!(!yes.eligible);
        assert_eq!(yes.reason_message, GOVT_JOB_MESSAGE);
        let no = evaluate_govt_job(GovtJobStatus::No);
        assert!(no.eligible);
        assert_eq!(no.reason_message, ELIGIBLE_MESSAGE);
    }

    #[test]
    fn test_full_time_enrollment_disables_submit_regardless_of_govt_job() {
        for govt_job in [None, Some(GovtJobStatus::Yes), Some(GovtJobStatus::No)] {
            let gate = selection(Some(EnrollmentStatus::EnrolledFullTime), govt_job).submit_gate();
            assert!(!gate.enabled);
            assert_eq!(gate.label, NOT_ELIGIBLE_LABEL);
        }
    }

    #[test]
    fn test_eligible_enrollment_and_no_govt_job_enables_submit() {
        for enrollment in [EnrollmentStatus::NotEnrolled, EnrollmentStatus::DistanceLearning] {
            let gate = selection(Some(enrollment), Some(GovtJobStatus::No)).submit_gate();
            assert!(gate.enabled);
            assert_eq!(gate.label, SUBMIT_LABEL);
        }
    }

    #[test]
    fn test_govt_job_yes_disables_submit_for_every_enrollment() {
        for enrollment in ENROLLMENTS {
            let gate = selection(Some(enrollment), Some(GovtJobStatus::Yes)).submit_gate();
            assert!(!gate.enabled);
        }
    }

    #[test]
    fn test_unselected_group_keeps_submit_disabled_without_rejection() {
        let gate = selection(Some(EnrollmentStatus::NotEnrolled), None).submit_gate();
        assert!(!gate.enabled);
        assert_eq!(gate.label, SUBMIT_LABEL);
        assert_eq!(EligibilitySelection::default().submit_gate().label, SUBMIT_LABEL);
    }

    #[test]
    fn test_fixing_one_group_keeps_other_verdict() {
        let mut sel = selection(
            Some(EnrollmentStatus::EnrolledFullTime),
            Some(GovtJobStatus::Yes),
        );
        sel.govt_job = Some(GovtJobStatus::No);
        let report = sel.report();
        assert!(report.govt_job.as_ref().is_some_and(|v| v.eligible));
        assert!(report.enrollment.as_ref().is_some_and(|v| !v.eligible));
        assert!(!report.submit.enabled);

        sel.enrollment = Some(EnrollmentStatus::DistanceLearning);
        assert!(sel.submit_gate().enabled);
    }

    #[test]
    fn test_aadhaar_is_advisory_only() {
        let mut sel = selection(Some(EnrollmentStatus::NotEnrolled), Some(GovtJobStatus::No));
        sel.aadhaar_link = Some(AadhaarLink::No);
        let report = sel.report();
        assert!(report.submit.enabled);
        let advisory = report.aadhaar.expect("advisory present");
        assert_eq!(advisory.level, AdvisoryLevel::Warning);
        assert_eq!(advisory.message, AADHAAR_UNLINKED_MESSAGE);
        assert_eq!(aadhaar_advisory(AadhaarLink::Yes).level, AdvisoryLevel::Success);
    }

    #[test]
    fn test_selection_deserializes_form_values() {
        let json = r#"{"enrollment": "Enrolled full-time", "govt_job": "no"}"#;
        let sel: EligibilitySelection = serde_json::from_str(json).unwrap();
        assert_eq!(sel.enrollment, Some(EnrollmentStatus::EnrolledFullTime));
        assert_eq!(sel.govt_job, Some(GovtJobStatus::No));
        assert_eq!(sel.aadhaar_link, None);
    }

    #[test]
    fn test_form_values_round_trip_through_serde() {
        for status in ENROLLMENTS {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.form_value()));
        }
    }
}
