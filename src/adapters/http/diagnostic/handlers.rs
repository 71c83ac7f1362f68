//! HTTP handler for the diagnostic endpoint.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tracing::{error, info};

use crate::adapters::http::AppState;
use crate::domain::lead::LeadProfile;

use super::dto::{DiagnosticRequest, ErrorResponse};

/// POST /api/v2/diagnostico - run the full diagnostic flow.
///
/// Returns the rendered HTML report. Webhook delivery runs in the background
/// after this handler has already produced its response.
pub async fn run_diagnostic(
    State(state): State<AppState>,
    Json(request): Json<DiagnosticRequest>,
) -> Response {
    let lead = match LeadProfile::try_from(request) {
        Ok(lead) => lead,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(err.to_string())),
            )
                .into_response();
        }
    };

    info!(client = %lead.company_name(), "processing diagnostic request");

    match state.pipeline.run(lead).await {
        Ok(outcome) => Html(outcome.html).into_response(),
        Err(err) => {
            error!(error = %err, "diagnostic pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(format!(
                    "An unexpected error occurred: {err}"
                ))),
            )
                .into_response()
        }
    }
}
