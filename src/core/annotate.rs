//! Sequential annotation of a variant list
//!
//! One lookup per identifier, in input order, each fully resolved before the
//! next begins. Per-variant failures become [`ErrorRecord`]s and the loop
//! continues; only errors the annotator returns as `Err` stop the run.

use crate::adapters::vep::{LookupOutcome, VariantAnnotator};
use crate::domain::{ErrorRecord, LookupErrorKind, RawAnnotation, Result, VariantId};
use crate::log_lookup_failure;

/// Accumulated results of annotating a variant list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationBatch {
    /// Successful lookups, in response order
    pub annotations: Vec<RawAnnotation>,

    /// Failed lookups, in input order
    pub errors: Vec<ErrorRecord>,
}

impl AnnotationBatch {
    /// Number of variants that produced an outcome
    pub fn outcome_count(&self) -> usize {
        self.annotations.len() + self.errors.iter().filter(|e| e.variant().is_some()).count()
    }
}

/// Annotate every variant in order
///
/// An empty list short-circuits to a single "no variants" error record
/// without contacting the service.
///
/// # Errors
///
/// Propagates fatal errors from the annotator, such as an undecodable
/// response body.
pub async fn annotate_all(
    annotator: &dyn VariantAnnotator,
    variants: &[VariantId],
) -> Result<AnnotationBatch> {
    let mut batch = AnnotationBatch::default();

    if variants.is_empty() {
        tracing::warn!("{}", ErrorRecord::NO_VARIANTS);
        batch.errors.push(ErrorRecord::no_variants());
        return Ok(batch);
    }

    tracing::info!(
        endpoint = annotator.endpoint(),
        variants = variants.len(),
        "Annotating variants"
    );

    for (index, variant) in variants.iter().enumerate() {
        tracing::debug!(
            current = index + 1,
            total = variants.len(),
            variant = %variant,
            "Looking up variant"
        );

        let outcome = annotator.lookup(variant).await?;
        log_outcome(variant, &outcome);

        match outcome.into_record(variant) {
            Ok(annotation) => batch.annotations.push(annotation),
            Err(record) => batch.errors.push(record),
        }
    }

    tracing::info!(
        successful = batch.annotations.len(),
        failed = batch.errors.len(),
        "Annotation finished"
    );

    Ok(batch)
}

fn log_outcome(variant: &VariantId, outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::Success(raw) => {
            tracing::debug!(variant = %variant, consequences = raw.len(), "Annotation received");
        }
        LookupOutcome::HttpError { detail, .. } => {
            log_lookup_failure!(variant, LookupErrorKind::Http, detail);
        }
        LookupOutcome::ConnectionError(detail) => {
            log_lookup_failure!(variant, LookupErrorKind::Connection, detail);
        }
        LookupOutcome::TimeoutError(detail) => {
            log_lookup_failure!(variant, LookupErrorKind::Timeout, detail);
        }
        LookupOutcome::RequestError(detail) => {
            log_lookup_failure!(variant, LookupErrorKind::Request, detail);
        }
    }
}
