//! Recommendation client: the only place that talks to the remote
//! recommendation and translation endpoints.
//!
//! One POST per call. There is no retry and no de-duplication; concurrent
//! submissions race and the caller keeps whichever completes last.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::recommend::models::{
    Language, RecommendationRequest, RecommendationResponse, TranslateBatchRequest,
    TranslateBatchResponse, Translation,
};

const RECOMMEND_PATH: &str = "/ai_recommend";
const TRANSLATE_PATH: &str = "/translate_batch";

/// Network or HTTP failure on a remote call. `status` is absent when the
/// request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe_failure(.status, .body))]
pub struct RequestFailed {
    pub status: Option<u16>,
    pub body: Option<String>,
}

fn describe_failure(status: &Option<u16>, body: &Option<String>) -> String {
    match (status, body.as_deref()) {
        (Some(status), Some(body)) => format!("HTTP error! status: {status}, body: {body}"),
        (Some(status), None) => format!("HTTP error! status: {status}"),
        (None, Some(body)) => format!("Network error: could not reach the server ({body})"),
        (None, None) => "Network error: could not reach the server".to_string(),
    }
}

/// Seam between the handlers and the remote service. Carried in `AppState`
/// as `Arc<dyn RecommendationService>`.
#[async_trait]
pub trait RecommendationService: Send + Sync {
    async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RequestFailed>;

    /// Translations come back positionally aligned with `texts`; the list may
    /// be shorter than the input.
    async fn translate_batch(
        &self,
        texts: &[String],
        target_lang: Language,
    ) -> Result<Vec<Translation>, RequestFailed>;
}

#[derive(Clone)]
pub struct RecommendationClient {
    client: Client,
    recommend_base: String,
    translate_base: String,
}

impl RecommendationClient {
    pub fn new(
        recommend_base: &str,
        translate_base: &str,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            recommend_base: recommend_base.trim_end_matches('/').to_string(),
            translate_base: translate_base.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, RequestFailed>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self.client.post(url).json(body).send().await.map_err(|e| {
            warn!("Request to {url} failed: {e}");
            RequestFailed {
                status: e.status().map(|s| s.as_u16()),
                body: Some(e.to_string()),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{url} returned {status}: {body}");
            return Err(RequestFailed {
                status: Some(status.as_u16()),
                body: Some(body).filter(|b| !b.is_empty()),
            });
        }

        response.json::<T>().await.map_err(|e| RequestFailed {
            status: Some(status.as_u16()),
            body: Some(format!("invalid response body: {e}")),
        })
    }
}

#[async_trait]
impl RecommendationService for RecommendationClient {
    async fn get_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RequestFailed> {
        let url = format!("{}{RECOMMEND_PATH}", self.recommend_base);
        let response: RecommendationResponse = self.post_json(&url, request).await?;
        debug!(
            total = response.total_recommendations,
            "Recommendations received"
        );
        Ok(response)
    }

    async fn translate_batch(
        &self,
        texts: &[String],
        target_lang: Language,
    ) -> Result<Vec<Translation>, RequestFailed> {
        let url = format!("{}{TRANSLATE_PATH}", self.translate_base);
        let body = TranslateBatchRequest {
            texts: texts.to_vec(),
            target_lang,
        };
        let response: TranslateBatchResponse = self.post_json(&url, &body).await?;
        if response.translations.len() != texts.len() {
            warn!(
                sent = texts.len(),
                received = response.translations.len(),
                "Translation batch size mismatch"
            );
        }
        Ok(response.translations)
    }
}
