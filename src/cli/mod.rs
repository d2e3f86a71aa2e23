//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for vepflat using clap.

pub mod run;

use crate::adapters::variant_file::validate_input_path;
use clap::Parser;
use std::path::PathBuf;

/// vepflat - annotate HGVS variants with Ensembl VEP and flatten the results
#[derive(Parser, Debug)]
#[command(name = "vepflat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, env = "VEPFLAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VEPFLAT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Directory for the output and error tables
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Variant file, one HGVS identifier per line (.txt)
    #[arg(value_parser = parse_input_path)]
    pub file_path: PathBuf,
}

fn parse_input_path(value: &str) -> Result<PathBuf, String> {
    validate_input_path(value).map_err(|e| e.to_string())
}
