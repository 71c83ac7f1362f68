//! AI Hunter - Lead Diagnostic Backend
//!
//! This crate implements the "Diagnóstico IA" pipeline: an incoming
//! questionnaire is scored deterministically, enriched with model-generated
//! opportunity recommendations, rendered as an HTML report and delivered to a
//! downstream webhook without blocking the HTTP response.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
