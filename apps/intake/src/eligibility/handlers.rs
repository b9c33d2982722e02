use axum::Json;

use crate::eligibility::{EligibilityReport, EligibilitySelection};

/// POST /api/v1/eligibility
///
/// Re-evaluates both radio groups from the posted selection. Called on every
/// selection change; nothing is stored between calls.
pub async fn handle_eligibility(
    Json(selection): Json<EligibilitySelection>,
) -> Json<EligibilityReport> {
    Json(selection.report())
}
