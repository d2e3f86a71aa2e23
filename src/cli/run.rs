//! Annotation run command
//!
//! Loads configuration, applies command-line overrides, initializes logging,
//! runs the pipeline and maps the result to an exit code.

use crate::cli::Cli;
use crate::config::{load_config, load_default_config, VepFlatConfig};
use crate::core::{AnnotationPipeline, RunSummary};
use crate::domain::{Result, RunId};
use crate::logging::init_logging;

/// Exit code for a run where every lookup succeeded
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for a completed run with failed lookups
pub const EXIT_PARTIAL: i32 = 1;

/// Exit code for configuration and usage errors
pub const EXIT_CONFIG: i32 = 2;

impl Cli {
    /// Resolve the effective configuration for this invocation
    ///
    /// The configuration file (if any) is loaded first; `--log-level` and
    /// `--output-dir` then take precedence over it.
    pub fn resolve_config(&self) -> Result<VepFlatConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => load_default_config()?,
        };

        if let Some(level) = &self.log_level {
            config.application.log_level = level.clone();
        }

        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.display().to_string();
        }

        config
            .validate()
            .map_err(crate::domain::VepFlatError::Configuration)?;

        Ok(config)
    }

    /// Execute the annotation run
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let config = match self.resolve_config() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {e}");
                return Ok(EXIT_CONFIG);
            }
        };

        let _guard = match init_logging(&config.application.log_level, &config.logging) {
            Ok(guard) => guard,
            Err(e) => {
                eprintln!("Failed to initialize logging: {e}");
                return Ok(e.exit_code());
            }
        };

        tracing::info!(
            version = env!("CARGO_PKG_VERSION"),
            base_url = %config.vep.base_url,
            "vepflat - VEP annotation flattener"
        );

        let pipeline = match AnnotationPipeline::new(&config, RunId::now()) {
            Ok(pipeline) => pipeline,
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize pipeline");
                eprintln!("Failed to initialize: {e}");
                return Ok(e.exit_code());
            }
        };

        let summary = match pipeline.run(&self.file_path).await {
            Ok(summary) => summary,
            Err(e) => {
                tracing::error!(error = %e, "Annotation run failed");
                eprintln!("Annotation run failed: {e}");
                return Ok(e.exit_code());
            }
        };

        summary.log_summary();
        print_summary(&summary);

        Ok(exit_code_for(&summary))
    }
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("Run Summary ({}):", summary.run_id);
    println!("  Variants: {}", summary.total_variants);
    println!("  Successful lookups: {}", summary.successful_lookups);
    println!("  Failed lookups: {}", summary.failed_lookups);
    println!("  Flat records: {}", summary.flat_records);
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());
    println!("  Output: {}", summary.output.records.display());
    println!("  Errors: {}", summary.output.errors.display());
    println!();
}

/// Exit code for a completed run
pub fn exit_code_for(summary: &RunSummary) -> i32 {
    if summary.is_successful() {
        EXIT_SUCCESS
    } else {
        EXIT_PARTIAL
    }
}
