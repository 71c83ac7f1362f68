//! Report Delivery Port - fire-and-forget handoff to the notification webhook.
//!
//! Dispatch happens after the HTTP response is already decided; the job owns
//! copies of everything it needs, so nothing borrows from the request once
//! the handler returns.

use crate::domain::lead::LeadProfile;

/// Work order for one report delivery.
#[derive(Debug, Clone)]
pub struct DeliveryJob {
    pub lead: LeadProfile,
    pub html_content: String,
}

impl DeliveryJob {
    /// Captures the questionnaire and the rendered report for delivery.
    pub fn new(lead: &LeadProfile, html_content: String) -> Self {
        Self {
            lead: lead.clone(),
            html_content,
        }
    }
}

/// Port for scheduling report deliveries.
///
/// `dispatch` returns immediately; the delivery runs detached and reports
/// failures only to the logs.
pub trait ReportDelivery: Send + Sync {
    fn dispatch(&self, job: DeliveryJob);
}
