//! Delivery dispatcher.
//!
//! Posts the finished report to the downstream notification webhook as a
//! detached background task. The request path only schedules the task; every
//! failure past that point (PDF conversion, network, non-2xx) is logged and
//! swallowed. Converting the typed job into the wire payload happens here,
//! in one place, right before the POST.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::Utc;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::WebhookConfig;
use crate::domain::lead::LeadProfile;
use crate::ports::{DeliveryJob, PdfRenderer, ReportDelivery};

/// Webhook implementation of the ReportDelivery port.
#[derive(Clone)]
pub struct DeliveryDispatcher {
    client: Client,
    config: WebhookConfig,
    pdf_renderer: Option<Arc<dyn PdfRenderer>>,
}

impl DeliveryDispatcher {
    /// Creates a dispatcher without PDF support.
    pub fn new(config: WebhookConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            pdf_renderer: None,
        }
    }

    /// Wires in a PDF renderer for report attachments.
    pub fn with_pdf_renderer(mut self, renderer: Arc<dyn PdfRenderer>) -> Self {
        self.pdf_renderer = Some(renderer);
        self
    }

    /// Builds the payload and posts it. Used directly by tests; production
    /// code goes through [`ReportDelivery::dispatch`].
    pub async fn deliver(&self, job: DeliveryJob) -> Result<(), DeliveryError> {
        let pdf_data = self.render_pdf_attachment(&job.html_content).await;

        let now = Utc::now();
        let payload = DeliveryPayload {
            form_data: LeadFormData::from(&job.lead),
            html_content: job.html_content,
            pdf_data,
            metadata: DeliveryMetadata {
                generated_at: now.to_rfc3339(),
                timestamp: now.format("%Y%m%d_%H%M%S").to_string(),
                client_name: job.lead.name.clone(),
                client_email: job.lead.email.clone(),
            },
        };

        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// PDF conversion is optional twice over: the renderer may be absent, and
    /// a conversion failure only drops the attachment.
    async fn render_pdf_attachment(&self, html: &str) -> Option<PdfAttachment> {
        if !self.config.attach_pdf {
            return None;
        }
        let renderer = self.pdf_renderer.as_ref()?;

        match renderer.render_pdf(html).await {
            Ok(bytes) => Some(PdfAttachment {
                filename: format!("diagnostico_{}.pdf", Utc::now().format("%Y%m%d_%H%M%S")),
                content: BASE64.encode(bytes),
                content_type: "application/pdf".to_string(),
            }),
            Err(err) => {
                warn!(error = %err, "pdf conversion failed, delivering without attachment");
                None
            }
        }
    }
}

impl ReportDelivery for DeliveryDispatcher {
    /// Schedules the delivery and returns immediately.
    ///
    /// The spawned task is not awaited and not cancellable; its outcome is
    /// only visible in the logs.
    fn dispatch(&self, job: DeliveryJob) {
        let worker = self.clone();
        tokio::spawn(async move {
            match worker.deliver(job).await {
                Ok(()) => info!("report delivered to webhook"),
                Err(err) => warn!(error = %err, "webhook delivery failed"),
            }
        });
    }
}

/// Questionnaire fields under their public aliases.
#[derive(Debug, Clone, Serialize)]
struct LeadFormData {
    name: String,
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<String>,
    sector: String,
    company_size: String,
    role: String,
    main_pain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    critical_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pain_quantification: Option<String>,
    digital_maturity: String,
    investment_capacity: String,
    urgency: String,
}

impl From<&LeadProfile> for LeadFormData {
    fn from(lead: &LeadProfile) -> Self {
        Self {
            name: lead.name.clone(),
            email: lead.email.clone(),
            phone: lead.phone.clone(),
            sector: lead.sector.clone(),
            company_size: lead.company_size.clone(),
            role: lead.role.clone(),
            main_pain: lead.main_pain.clone(),
            critical_area: lead.critical_area.clone(),
            pain_quantification: lead.pain_quantification.clone(),
            digital_maturity: lead.digital_maturity.clone(),
            investment_capacity: lead.investment_capacity.clone(),
            urgency: lead.urgency.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct DeliveryPayload {
    form_data: LeadFormData,
    html_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pdf_data: Option<PdfAttachment>,
    metadata: DeliveryMetadata,
}

#[derive(Debug, Serialize)]
struct PdfAttachment {
    filename: String,
    content: String,
    content_type: String,
}

#[derive(Debug, Serialize)]
struct DeliveryMetadata {
    generated_at: String,
    timestamp: String,
    client_name: String,
    client_email: String,
}

/// Delivery failures. Logged by the background task, never propagated.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("webhook returned status {0}")]
    Status(u16),
}
