//! PostgreSQL implementation of LeadRepository.
//!
//! Persists each diagnostic run as one row in `lead_profiles`: the raw
//! questionnaire answers plus the scoring output and the full report as JSON
//! blobs.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::lead::LeadProfile;
use crate::domain::report::ReportDocument;
use crate::ports::{LeadRepository, RepositoryError, StorageInfo};

/// PostgreSQL implementation of LeadRepository.
#[derive(Clone)]
pub struct PostgresLeadRepository {
    pool: PgPool,
}

impl PostgresLeadRepository {
    /// Creates a new PostgresLeadRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LeadRepository for PostgresLeadRepository {
    async fn save(
        &self,
        lead: &LeadProfile,
        report: &ReportDocument,
    ) -> Result<Uuid, RepositoryError> {
        let scores_json = serde_json::to_string(&report.dimensions)?;
        let report_json = serde_json::to_string(report)?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO lead_profiles (
                lead_email, lead_phone, name,
                raw_p1_sector, raw_p2_company_size, raw_p3_role,
                raw_p4_main_pain, raw_p5_critical_area, raw_p6_pain_quant,
                raw_p7_digital_maturity, raw_p8_investment, raw_p9_urgency,
                status, ai_score_final, ai_scores_json, ai_full_report_json
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                $13, $14, $15::jsonb, $16::jsonb
            )
            RETURNING id
            "#,
        )
        .bind(&lead.email)
        .bind(&lead.phone)
        .bind(&lead.name)
        .bind(&lead.sector)
        .bind(&lead.company_size)
        .bind(&lead.role)
        .bind(&lead.main_pain)
        .bind(&lead.critical_area)
        .bind(&lead.pain_quantification)
        .bind(&lead.digital_maturity)
        .bind(&lead.investment_capacity)
        .bind(&lead.urgency)
        .bind("COMPLETED")
        .bind(report.final_score)
        .bind(scores_json)
        .bind(report_json)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn health(&self) -> Result<DateTime<Utc>, RepositoryError> {
        sqlx::query_scalar("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))
    }

    async fn info(&self) -> Result<StorageInfo, RepositoryError> {
        let database: String = sqlx::query_scalar("SELECT current_database()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let user: String = sqlx::query_scalar("SELECT current_user")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let version: String = sqlx::query_scalar("SELECT version()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Database(e.to_string()))?;

        let table_exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT FROM information_schema.tables
                WHERE table_schema = 'public'
                AND table_name = 'lead_profiles'
            )
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Database(e.to_string()))?;

        Ok(StorageInfo {
            database,
            user,
            version,
            lead_profiles_table_exists: table_exists,
            pool_size: self.pool.size(),
            pool_idle: self.pool.num_idle(),
        })
    }
}
