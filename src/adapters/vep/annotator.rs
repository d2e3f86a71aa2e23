//! Annotation service trait and lookup outcomes
//!
//! This module defines the seam between the run orchestration and a concrete
//! annotation service.

use crate::domain::{ErrorRecord, RawAnnotation, Result, VariantId};
use async_trait::async_trait;
use serde_json::Value;

/// Result of one lookup, classified into exactly one category
///
/// Transport-level failures never carry a response body: a body is only
/// inspected when the service actually answered.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// Transport and HTTP status both succeeded
    Success(RawAnnotation),

    /// The service answered with a 4xx/5xx status
    HttpError {
        /// Numeric status code
        status: u16,
        /// Human-readable status line including the requested URL
        detail: String,
        /// The service's error body, decoded as JSON
        description: Value,
    },

    /// The connection could not be established or completed
    ConnectionError(String),

    /// The request timed out
    TimeoutError(String),

    /// Any other request-layer failure
    RequestError(String),
}

impl LookupOutcome {
    /// Splits the outcome into a raw annotation or an error record for `variant`
    pub fn into_record(self, variant: &VariantId) -> std::result::Result<RawAnnotation, ErrorRecord> {
        match self {
            LookupOutcome::Success(raw) => Ok(raw),
            LookupOutcome::HttpError {
                detail,
                description,
                ..
            } => Err(ErrorRecord::http(variant.clone(), detail, description)),
            LookupOutcome::ConnectionError(detail) => {
                Err(ErrorRecord::connection(variant.clone(), detail))
            }
            LookupOutcome::TimeoutError(detail) => Err(ErrorRecord::timeout(variant.clone(), detail)),
            LookupOutcome::RequestError(detail) => Err(ErrorRecord::request(variant.clone(), detail)),
        }
    }
}

/// Service able to annotate a single variant
///
/// Implementations perform exactly one lookup per call and report
/// per-variant failures as [`LookupOutcome`] variants. An `Err` return is
/// reserved for failures that must abort the whole run.
#[async_trait]
pub trait VariantAnnotator: Send + Sync {
    /// Look up one variant
    async fn lookup(&self, variant: &VariantId) -> Result<LookupOutcome>;

    /// Endpoint description used in logs
    fn endpoint(&self) -> &str;
}
