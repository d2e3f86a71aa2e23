//! Annotation pipeline - orchestrates one run end to end
//!
//! The stages run strictly in sequence: load the variant file, annotate each
//! identifier, flatten the successful responses, write both tables.

use crate::adapters::tsv::TsvWriter;
use crate::adapters::variant_file::{load_variant_lines, parse_variants};
use crate::adapters::vep::{VariantAnnotator, VepClient};
use crate::config::{MissingGenePolicy, VepFlatConfig};
use crate::core::annotate::annotate_all;
use crate::core::flatten::flatten_annotations;
use crate::core::summary::RunSummary;
use crate::domain::{Result, RunId};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

/// Annotation pipeline
pub struct AnnotationPipeline {
    annotator: Arc<dyn VariantAnnotator>,
    missing_gene: MissingGenePolicy,
    writer: TsvWriter,
}

impl AnnotationPipeline {
    /// Create a pipeline backed by the VEP REST service
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built from the `[vep]` section.
    pub fn new(config: &VepFlatConfig, run_id: RunId) -> Result<Self> {
        let client = VepClient::new(&config.vep)?;
        Ok(Self::with_annotator(config, run_id, Arc::new(client)))
    }

    /// Create a pipeline around an existing annotator
    pub fn with_annotator(
        config: &VepFlatConfig,
        run_id: RunId,
        annotator: Arc<dyn VariantAnnotator>,
    ) -> Self {
        let writer = TsvWriter::new(&config.output.directory, run_id)
            .allow_empty(config.output.allow_empty);

        Self {
            annotator,
            missing_gene: config.flatten.missing_gene,
            writer,
        }
    }

    /// Run identifier used for the output file names
    pub fn run_id(&self) -> RunId {
        self.writer.run_id()
    }

    /// Execute the run against a variant file
    ///
    /// # Errors
    ///
    /// Any error other than a per-variant lookup failure aborts the run:
    /// unreadable or empty input, an undecodable service response, a
    /// flattening failure, or an output write failure.
    pub async fn run(&self, input: &Path) -> Result<RunSummary> {
        let start_time = Instant::now();

        tracing::info!(
            run_id = %self.run_id(),
            input = %input.display(),
            "Starting annotation run"
        );

        let lines = load_variant_lines(input)?;
        let variants = parse_variants(&lines);
        tracing::info!(lines = lines.len(), variants = variants.len(), "Read variant file");

        let batch = annotate_all(self.annotator.as_ref(), &variants).await?;

        let records = flatten_annotations(&batch.annotations, self.missing_gene)?;

        let output = self.writer.write(&records, &batch.errors)?;

        Ok(RunSummary {
            run_id: self.run_id(),
            total_variants: variants.len(),
            successful_lookups: batch.annotations.len(),
            failed_lookups: batch.errors.len(),
            flat_records: records.len(),
            duration: start_time.elapsed(),
            output,
        })
    }
}
