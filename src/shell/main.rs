use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use sentiment_service::modules::feedback::core::feedback::FeedbackStore;
use sentiment_service::modules::predictions::adapters::outbound::keyword_classifier::KeywordClassifier;
use sentiment_service::modules::predictions::core::classifier::Classifier;
use sentiment_service::modules::predictions::core::prediction::StatsStore;
use sentiment_service::shell::config::AppConfig;
use sentiment_service::shell::http::router;
use sentiment_service::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let stats = Arc::new(
        StatsStore::open(config.history_path.clone(), config.stats_max_history)
            .await
            .context("opening prediction history")?,
    );
    if config.reset_stats_on_start {
        stats.reset().await;
    }
    let feedback = Arc::new(
        FeedbackStore::open(config.feedback_path.clone(), config.feedback_cache_size)
            .await
            .context("opening feedback log")?,
    );

    let classifier: Arc<dyn Classifier> = Arc::new(KeywordClassifier::new());
    tracing::info!(classifier = classifier.name(), "classifier ready");

    let app = router(AppState::new(classifier, stats, feedback), &config.allow_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("listening on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
