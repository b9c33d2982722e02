use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeFieldExtractor;
use crate::form::FormPolicy;
use crate::recommend::client::RecommendationService;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub extractor: ResumeFieldExtractor,
    /// Remote recommendation/translation service. Default: RecommendationClient.
    pub recommender: Arc<dyn RecommendationService>,
    pub form_policy: FormPolicy,
}

impl AppState {
    pub fn new(config: &Config, recommender: Arc<dyn RecommendationService>) -> Self {
        Self {
            extractor: ResumeFieldExtractor::new(config.name_case_policy),
            form_policy: FormPolicy {
                resume_upload_required: config.resume_upload_required,
            },
            recommender,
        }
    }
}
