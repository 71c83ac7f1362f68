//! HTTP adapters - axum routes, handlers and DTOs.

pub mod diagnostic;
pub mod health;

use std::sync::Arc;

use crate::application::diagnostic::DiagnosticPipeline;
use crate::ports::LeadRepository;

/// Shared state for all HTTP handlers.
///
/// The repository is duplicated here (it also lives inside the pipeline) so
/// the peripheral status endpoints can answer database questions without
/// running a diagnostic.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DiagnosticPipeline>,
    pub repository: Option<Arc<dyn LeadRepository>>,
}

impl AppState {
    pub fn new(
        pipeline: Arc<DiagnosticPipeline>,
        repository: Option<Arc<dyn LeadRepository>>,
    ) -> Self {
        Self {
            pipeline,
            repository,
        }
    }
}
