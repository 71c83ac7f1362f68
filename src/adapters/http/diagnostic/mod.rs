//! Diagnostic endpoint - the core HTTP surface.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::api_router;
