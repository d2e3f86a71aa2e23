//! Logging and observability
//!
//! Structured logging through `tracing`, with console output and optional
//! JSON rolling files.
//!
//! # Example
//!
//! ```no_run
//! use vepflat::logging::init_logging;
//! use vepflat::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log a per-variant lookup failure
///
/// # Example
///
/// ```no_run
/// use vepflat::log_lookup_failure;
/// use vepflat::domain::{LookupErrorKind, VariantId};
///
/// let variant = VariantId::new("NC_000001.11:g.40819893T>A").unwrap();
/// log_lookup_failure!(&variant, LookupErrorKind::Timeout, "operation timed out");
/// ```
#[macro_export]
macro_rules! log_lookup_failure {
    ($variant:expr, $kind:expr, $detail:expr) => {
        tracing::warn!(
            variant = %$variant,
            category = $kind.column_name(),
            detail = %$detail,
            "{}: {}",
            $kind,
            $detail
        )
    };
}

/// Log the completion of a run
///
/// # Example
///
/// ```no_run
/// use vepflat::log_run_complete;
/// use std::time::Duration;
///
/// log_run_complete!(10, 8, 2, Duration::from_secs(4));
/// ```
#[macro_export]
macro_rules! log_run_complete {
    ($variants:expr, $records:expr, $errors:expr, $duration:expr) => {
        tracing::info!(
            variants = $variants,
            records = $records,
            errors = $errors,
            duration_ms = $duration.as_millis(),
            "Run completed"
        )
    };
}
