//! AI Hunter backend entry point.
//!
//! Explicit lifecycle: load configuration, initialize tracing, bring up the
//! database pool (best effort), wire the pipeline and serve until shutdown.

use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ai_hunter::adapters::ai::{OpenAIConfig, OpenAIProvider};
use ai_hunter::adapters::http::diagnostic::api_router;
use ai_hunter::adapters::http::AppState;
use ai_hunter::adapters::postgres::{self, PostgresLeadRepository};
use ai_hunter::adapters::report::HtmlReportRenderer;
use ai_hunter::adapters::webhook::DeliveryDispatcher;
use ai_hunter::application::diagnostic::DiagnosticPipeline;
use ai_hunter::application::recommendation::RecommendationService;
use ai_hunter::config::AppConfig;
use ai_hunter::ports::LeadRepository;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("fatal: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.server.log_level.clone())),
        )
        .init();

    info!(environment = ?config.server.environment, "starting ai-hunter backend");

    if !config.ai.has_api_key() {
        warn!("AI API key not configured, reports will use fallback content");
    }

    // Best-effort storage: the service answers diagnostics without it.
    let pool = postgres::try_connect(&config.database).await;
    let repository: Option<Arc<dyn LeadRepository>> = pool
        .clone()
        .map(|pool| Arc::new(PostgresLeadRepository::new(pool)) as Arc<dyn LeadRepository>);

    let provider = Arc::new(OpenAIProvider::new(
        OpenAIConfig::new(config.ai.api_key.expose_secret().clone())
            .with_model(config.ai.model.clone())
            .with_base_url(config.ai.base_url.clone())
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    ));

    let pipeline = Arc::new(DiagnosticPipeline::new(
        RecommendationService::new(provider),
        repository.clone(),
        Arc::new(HtmlReportRenderer::new()),
        Arc::new(DeliveryDispatcher::new(config.webhook.clone())),
    ));

    let app = api_router(AppState::new(pipeline, repository));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pool) = pool {
        pool.close().await;
        info!("database connection pool closed");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
