//! Axum route handlers for résumé extraction.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::eligibility::EligibilityReport;
use crate::errors::AppError;
use crate::extraction::pdf::{ensure_pdf_filename, extract_pdf_text};
use crate::extraction::{ExtractedProfile, ExtractionError};
use crate::form::populate::{merge_profile, DEFAULT_EDUCATION_OPTIONS};
use crate::form::FormFields;
use crate::state::AppState;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";
/// Optional multipart field carrying the current form as JSON.
pub const FORM_FIELD: &str = "form";

#[derive(Debug, Deserialize)]
pub struct ExtractTextRequest {
    pub text: String,
    /// Form as the user currently has it; blank when omitted.
    #[serde(default)]
    pub form: FormFields,
}

/// Extracted fields, the form with them merged in, and the eligibility view
/// of that form.
#[derive(Debug, Serialize)]
pub struct ExtractionResult {
    pub profile: ExtractedProfile,
    pub form: FormFields,
    pub eligibility: EligibilityReport,
}

impl ExtractionResult {
    fn merge(profile: ExtractedProfile, mut form: FormFields) -> Self {
        form.resume_attached = true;
        merge_profile(&mut form, &profile, DEFAULT_EDUCATION_OPTIONS);
        let eligibility = form.selection().report();
        Self {
            profile,
            form,
            eligibility,
        }
    }
}

/// POST /api/v1/resume/extract
///
/// Accepts a multipart upload with a `resume` PDF and an optional `form`
/// JSON part, extracts the text and merges the profile into the form.
/// Failures are non-fatal for the caller: the form can still be submitted
/// without résumé data.
pub async fn handle_extract_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionResult>, AppError> {
    let mut upload: Option<(Option<String>, Bytes)> = None;
    let mut form = FormFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ExtractionError::Upload(e.to_string()))?
    {
        match field.name() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().map(str::to_owned);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ExtractionError::Upload(e.to_string()))?;
                upload = Some((file_name, data));
            }
            Some(FORM_FIELD) => {
                let raw = field
                    .bytes()
                    .await
                    .map_err(|e| ExtractionError::Upload(e.to_string()))?;
                form = serde_json::from_slice(&raw)
                    .map_err(|e| ExtractionError::Upload(format!("invalid form part: {e}")))?;
            }
            _ => continue,
        }
    }

    let (file_name, data) = upload
        .filter(|(_, data)| !data.is_empty())
        .ok_or(ExtractionError::NoFile)?;
    ensure_pdf_filename(file_name.as_deref())?;

    info!(file = ?file_name, bytes = data.len(), "Extracting resume upload");
    let text = extract_pdf_text(data).await?;

    Ok(Json(ExtractionResult::merge(
        state.extractor.extract(&text),
        form,
    )))
}

/// POST /api/v1/resume/extract-text
///
/// Runs the extractors over text the client already pulled out of the PDF.
pub async fn handle_extract_text(
    State(state): State<AppState>,
    Json(request): Json<ExtractTextRequest>,
) -> Result<Json<ExtractionResult>, AppError> {
    if request.text.trim().is_empty() {
        return Err(ExtractionError::EmptyText.into());
    }

    Ok(Json(ExtractionResult::merge(
        state.extractor.extract(&request.text),
        request.form,
    )))
}
