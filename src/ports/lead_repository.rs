//! Lead Repository Port - persistence gateway for diagnostic results.
//!
//! Persistence is best-effort: the pipeline calls `save` only when a
//! repository handle is present, and a failure is logged without touching the
//! HTTP response.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::lead::LeadProfile;
use crate::domain::report::ReportDocument;

/// Port for storing questionnaire submissions with their reports.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Stores the raw answers plus the generated report as one row and
    /// returns the generated row id.
    async fn save(
        &self,
        lead: &LeadProfile,
        report: &ReportDocument,
    ) -> Result<Uuid, RepositoryError>;

    /// Round-trips a query to verify the connection is alive.
    async fn health(&self) -> Result<DateTime<Utc>, RepositoryError>;

    /// Describes the connected storage for the diagnostics endpoints.
    async fn info(&self) -> Result<StorageInfo, RepositoryError>;
}

/// Storage description returned by [`LeadRepository::info`].
#[derive(Debug, Clone, Serialize)]
pub struct StorageInfo {
    pub database: String,
    pub user: String,
    pub version: String,
    pub lead_profiles_table_exists: bool,
    pub pool_size: u32,
    pub pool_idle: usize,
}

/// Persistence failures. Never surfaced to the HTTP caller.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_error_displays_cause() {
        let err = RepositoryError::Database("connection refused".to_string());
        assert_eq!(err.to_string(), "database error: connection refused");
    }

    #[test]
    fn storage_info_serializes() {
        let info = StorageInfo {
            database: "postgres".to_string(),
            user: "ai_hunter".to_string(),
            version: "PostgreSQL 15.4".to_string(),
            lead_profiles_table_exists: true,
            pool_size: 5,
            pool_idle: 4,
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["database"], "postgres");
        assert_eq!(json["lead_profiles_table_exists"], true);
    }
}
