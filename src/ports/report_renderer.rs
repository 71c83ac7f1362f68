//! Rendering ports - report-to-HTML and HTML-to-PDF conversion seams.
//!
//! HTML rendering failure is fatal to a request (there is no response body
//! without it). PDF rendering only ever runs inside the background delivery
//! task, where a failure merely drops the attachment.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::report::ReportDocument;

/// Port for rendering a report document into a self-contained HTML page.
pub trait ReportRenderer: Send + Sync {
    /// Renders the report. The output must embed the company name and the
    /// literal final score.
    fn render(&self, report: &ReportDocument) -> Result<String, RenderError>;
}

/// Port for converting rendered HTML into PDF bytes.
///
/// The concrete converter is an external collaborator; the crate ships no
/// production implementation and the delivery dispatcher treats an absent
/// renderer as "send without attachment".
#[async_trait]
pub trait PdfRenderer: Send + Sync {
    async fn render_pdf(&self, html: &str) -> Result<Vec<u8>, PdfError>;
}

/// HTML rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(String),
}

/// PDF conversion failures.
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("pdf conversion failed: {0}")]
    Conversion(String),
}
