//! Webhook delivery adapter.

mod dispatcher;

pub use dispatcher::{DeliveryDispatcher, DeliveryError};
