//! Diagnostic pipeline.
//!
//! Drives one questionnaire through scoring, recommendation, assembly,
//! best-effort persistence and HTML rendering, then schedules the webhook
//! delivery. Only a rendering failure aborts the request; everything else
//! degrades invisibly.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::lead::LeadProfile;
use crate::domain::report::ReportDocument;
use crate::domain::scoring;
use crate::ports::{DeliveryJob, LeadRepository, RenderError, ReportDelivery, ReportRenderer};

use super::recommendation::RecommendationService;

/// The full request pipeline behind `POST /api/v2/diagnostico`.
#[derive(Clone)]
pub struct DiagnosticPipeline {
    recommendations: RecommendationService,
    repository: Option<Arc<dyn LeadRepository>>,
    renderer: Arc<dyn ReportRenderer>,
    dispatcher: Arc<dyn ReportDelivery>,
}

/// Pipeline output: the response body plus the assembled report.
#[derive(Debug, Clone)]
pub struct DiagnosticOutcome {
    pub html: String,
    pub report: ReportDocument,
}

impl DiagnosticPipeline {
    pub fn new(
        recommendations: RecommendationService,
        repository: Option<Arc<dyn LeadRepository>>,
        renderer: Arc<dyn ReportRenderer>,
        dispatcher: Arc<dyn ReportDelivery>,
    ) -> Self {
        Self {
            recommendations,
            repository,
            renderer,
            dispatcher,
        }
    }

    /// Runs the pipeline for one validated questionnaire.
    ///
    /// The delivery task is scheduled after the HTML exists and owns copies
    /// of everything it needs; the caller returns the response without
    /// waiting on it.
    pub async fn run(&self, lead: LeadProfile) -> Result<DiagnosticOutcome, PipelineError> {
        let breakdown = scoring::calculate_scores(&lead);
        info!(final_score = breakdown.final_score, "scores calculated");

        let recommendations = self.recommendations.generate(&lead).await;

        let report = ReportDocument::assemble(
            lead.company_name(),
            breakdown,
            recommendations.introduction,
            recommendations.opportunities,
        );

        // Best effort: a missing or failing database never fails the request.
        if let Some(repository) = &self.repository {
            match repository.save(&lead, &report).await {
                Ok(id) => info!(lead_id = %id, "lead saved"),
                Err(err) => warn!(error = %err, "failed to save lead, continuing"),
            }
        }

        let html = self.renderer.render(&report)?;

        self.dispatcher.dispatch(DeliveryJob::new(&lead, html.clone()));

        Ok(DiagnosticOutcome { html, report })
    }
}

/// Request-fatal pipeline failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("report rendering failed: {0}")]
    Rendering(#[from] RenderError),
}
