//! Run summary and reporting

use crate::adapters::tsv::OutputPaths;
use crate::domain::RunId;
use crate::log_run_complete;
use std::time::Duration;

/// Summary of one annotation run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Run identifier embedded in the output file names
    pub run_id: RunId,

    /// Identifiers read from the input file
    pub total_variants: usize,

    /// Lookups that returned an annotation
    pub successful_lookups: usize,

    /// Rows in the error table
    pub failed_lookups: usize,

    /// Rows in the output table
    pub flat_records: usize,

    /// Wall-clock duration of the run
    pub duration: Duration,

    /// Files written
    pub output: OutputPaths,
}

impl RunSummary {
    /// Whether every lookup succeeded
    pub fn is_successful(&self) -> bool {
        self.failed_lookups == 0
    }

    /// Successful lookups as a percentage of all identifiers
    pub fn success_rate(&self) -> f64 {
        if self.total_variants == 0 {
            return 0.0;
        }
        (self.successful_lookups as f64 / self.total_variants as f64) * 100.0
    }

    /// Log the summary
    pub fn log_summary(&self) {
        log_run_complete!(
            self.total_variants,
            self.flat_records,
            self.failed_lookups,
            self.duration
        );
        tracing::info!(
            run_id = %self.run_id,
            successful = self.successful_lookups,
            success_rate = %format!("{:.2}%", self.success_rate()),
            output = %self.output.records.display(),
            errors = %self.output.errors.display(),
            "Run summary"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn summary(total: usize, ok: usize, failed: usize) -> RunSummary {
        RunSummary {
            run_id: RunId::from_timestamp(1),
            total_variants: total,
            successful_lookups: ok,
            failed_lookups: failed,
            flat_records: ok,
            duration: Duration::from_millis(250),
            output: OutputPaths {
                records: PathBuf::from("output_1.tsv"),
                errors: PathBuf::from("error_1.tsv"),
            },
        }
    }

    #[test]
    fn test_success_rate() {
        assert_eq!(summary(4, 3, 1).success_rate(), 75.0);
        assert_eq!(summary(0, 0, 1).success_rate(), 0.0);
    }

    #[test]
    fn test_is_successful() {
        assert!(summary(2, 2, 0).is_successful());
        assert!(!summary(2, 1, 1).is_successful());
    }
}
