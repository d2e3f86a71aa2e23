// vepflat - Ensembl VEP annotation flattener
// Copyright (c) 2025 vepflat Contributors
// Licensed under the MIT License

//! # vepflat - Ensembl VEP annotation flattener
//!
//! vepflat reads a list of HGVS variant identifiers, annotates each one with
//! the Ensembl Variant Effect Predictor REST service, and writes the results
//! as two tab-separated tables: one row per predicted consequence, and one
//! row per failed lookup.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and exit codes
//! - [`core`] - Run logic (annotation loop, flattening, orchestration)
//! - [`adapters`] - External integrations (VEP REST, input files, TSV output)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vepflat::config::load_default_config;
//! use vepflat::core::AnnotationPipeline;
//! use vepflat::domain::RunId;
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_default_config()?;
//!     let pipeline = AnnotationPipeline::new(&config, RunId::now())?;
//!
//!     let summary = pipeline.run(Path::new("variants.txt")).await?;
//!
//!     println!("Wrote {} records", summary.flat_records);
//!     Ok(())
//! }
//! ```
//!
//! ## Failure handling
//!
//! Each lookup ends in exactly one outcome. Transport and HTTP failures are
//! recorded in the error table and the run continues with the next variant.
//! Everything else (unreadable input, an undecodable response, a flattening
//! failure, an output write failure) aborts the run with a
//! [`domain::VepFlatError`].
//!
//! ## Logging
//!
//! vepflat uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(variants = 12, "Annotating variants");
//! warn!(variant = "NC_000001.11:g.999999999A>T", "HTTP error");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
