//! Ports - trait seams between the pipeline and its external collaborators.
//!
//! The diagnostic pipeline depends only on these traits; concrete
//! implementations live under `adapters`.

mod ai_provider;
mod lead_repository;
mod report_delivery;
mod report_renderer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, Message, MessageRole,
    ProviderInfo,
};
pub use lead_repository::{LeadRepository, RepositoryError, StorageInfo};
pub use report_delivery::{DeliveryJob, ReportDelivery};
pub use report_renderer::{PdfError, PdfRenderer, RenderError, ReportRenderer};
