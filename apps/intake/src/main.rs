mod config;
mod eligibility;
mod errors;
mod extraction;
mod form;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::recommend::client::RecommendationClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting intake service v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the recommendation/translation client
    let recommender = RecommendationClient::new(
        &config.recommend_api_url,
        &config.translate_api_url,
        config.http_timeout,
    )?;
    info!(
        recommend = %config.recommend_api_url,
        translate = %config.translate_api_url,
        timeout_secs = config.http_timeout.as_secs(),
        "Recommendation client initialized"
    );
    info!(
        name_case_policy = ?config.name_case_policy,
        resume_upload_required = config.resume_upload_required,
        "Intake policies"
    );

    let state = AppState::new(&config, Arc::new(recommender));

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
