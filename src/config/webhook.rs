//! Webhook delivery configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Configuration for the downstream notification webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Notification endpoint the finished report is posted to
    #[serde(default = "default_url")]
    pub url: String,

    /// Attach a PDF rendering of the report when a PDF renderer is wired in
    #[serde(default)]
    pub attach_pdf: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl WebhookConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate webhook configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidWebhookUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            attach_pdf: false,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    "https://flows.profissionalai.com.br/webhook-test/6e2f0fa5-6cc5-4415-943c-7d7b9a6a7719"
        .to_string()
}

fn default_timeout() -> u64 {
    30
}
