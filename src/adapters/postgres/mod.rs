//! PostgreSQL adapters - database implementation of the persistence gateway.

mod lead_repository;

pub use lead_repository::PostgresLeadRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::DatabaseConfig;

/// Best-effort pool bring-up.
///
/// Mirrors the startup contract of the service: a missing URL or a failed
/// connection downgrades to "running without database" instead of aborting
/// the process. The connection is verified eagerly so a broken URL surfaces
/// here, not on the first request.
pub async fn try_connect(config: &DatabaseConfig) -> Option<PgPool> {
    let url = match config.url() {
        Some(url) => url,
        None => {
            warn!("DATABASE URL not configured, running without database");
            return None;
        }
    };

    match PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(url)
        .await
    {
        Ok(pool) => {
            info!(
                max_connections = config.max_connections,
                "database connection pool created"
            );
            Some(pool)
        }
        Err(err) => {
            warn!(error = %err, "database connection failed, running without database");
            None
        }
    }
}
