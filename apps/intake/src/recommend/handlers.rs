//! Axum route handlers for recommendations and translation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::form::{prepare_submission, FormFields};
use crate::recommend::models::{Language, Recommendation, RecommendationResponse, ScoreBand};
use crate::recommend::translate::{apply_translations, recommendation_field_strings};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsPayload {
    pub headline: String,
    /// One band per recommendation, same order.
    pub score_bands: Vec<ScoreBand>,
    #[serde(flatten)]
    pub response: RecommendationResponse,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub texts: Vec<String>,
    pub target_lang: Language,
}

#[derive(Debug, Serialize)]
pub struct TranslateResult {
    pub translations: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateCardRequest {
    /// Zero-based position of the card in the result list.
    pub index: usize,
    pub recommendation: Recommendation,
    pub target_lang: Language,
}

/// POST /api/v1/recommendations
///
/// Validates the posted form and forwards it to the recommendation service.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(fields): Json<FormFields>,
) -> Result<Json<RecommendationsPayload>, AppError> {
    let request = prepare_submission(&fields, &state.form_policy)?;
    info!(domain = %request.domain, location = %request.location, "Requesting recommendations");

    let response = state.recommender.get_recommendations(&request).await?;
    let score_bands = response
        .recommendations
        .iter()
        .map(|r| ScoreBand::from_score(r.similarity_score))
        .collect();

    Ok(Json(RecommendationsPayload {
        headline: response.headline(),
        score_bands,
        response,
    }))
}

/// POST /api/v1/translate
///
/// Always returns one string per input; untranslated entries keep their text.
pub async fn handle_translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> Result<Json<TranslateResult>, AppError> {
    Ok(Json(TranslateResult {
        translations: translate_aligned(&state, &request.texts, request.target_lang).await?,
    }))
}

/// POST /api/v1/recommendations/translate
///
/// Translates the seven display strings of one recommendation card.
pub async fn handle_translate_card(
    State(state): State<AppState>,
    Json(request): Json<TranslateCardRequest>,
) -> Result<Json<TranslateResult>, AppError> {
    let texts = recommendation_field_strings(request.index, &request.recommendation);
    Ok(Json(TranslateResult {
        translations: translate_aligned(&state, &texts, request.target_lang).await?,
    }))
}

async fn translate_aligned(
    state: &AppState,
    texts: &[String],
    target_lang: Language,
) -> Result<Vec<String>, AppError> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }
    let translations = state.recommender.translate_batch(texts, target_lang).await?;
    Ok(apply_translations(texts, &translations))
}
