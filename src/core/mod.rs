//! Core run logic
//!
//! # Modules
//!
//! - [`annotate`] - Sequential per-variant lookups
//! - [`flatten`] - Projection of raw responses onto flat records
//! - [`pipeline`] - End-to-end orchestration of a run
//! - [`summary`] - Run summary and reporting
//!
//! # Example
//!
//! ```rust,no_run
//! use vepflat::config::load_default_config;
//! use vepflat::core::AnnotationPipeline;
//! use vepflat::domain::RunId;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_default_config()?;
//! let pipeline = AnnotationPipeline::new(&config, RunId::now())?;
//!
//! let summary = pipeline.run(Path::new("variants.txt")).await?;
//!
//! println!("Records: {}", summary.flat_records);
//! println!("Failed lookups: {}", summary.failed_lookups);
//! # Ok(())
//! # }
//! ```

pub mod annotate;
pub mod flatten;
pub mod pipeline;
pub mod summary;

pub use annotate::{annotate_all, AnnotationBatch};
pub use flatten::flatten_annotations;
pub use pipeline::AnnotationPipeline;
pub use summary::RunSummary;
