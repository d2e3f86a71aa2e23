//! Configuration management for vepflat.
//!
//! vepflat runs without any configuration file; a TOML file can override the
//! annotation endpoint, timeouts, flattening policy, output directory and
//! logging.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use vepflat::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("vepflat.toml")?;
//! println!("VEP endpoint: {}", config.vep.base_url);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`VepConfig`] - Endpoint, timeouts, user agent
//! - [`FlattenConfig`] - Missing gene policy
//! - [`OutputConfig`] - Output directory, empty table handling
//! - [`LoggingConfig`] - Rolling file logs
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [vep]
//! base_url = "https://${VEP_HOST}/vep/human/hgvs/"
//! timeout_seconds = 60
//!
//! [flatten]
//! missing_gene = "fail"
//!
//! [output]
//! directory = "results"
//! allow_empty = false
//!
//! [logging]
//! local_enabled = true
//! local_path = "logs"
//! local_rotation = "daily"
//! ```
//!
//! # Environment Variables
//!
//! `${VAR_NAME}` placeholders are substituted before parsing, and
//! `VEPFLAT_<SECTION>_<KEY>` variables override parsed values.

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_default_config};
pub use schema::{
    ApplicationConfig, FlattenConfig, LoggingConfig, MissingGenePolicy, OutputConfig, VepConfig,
    VepFlatConfig, DEFAULT_VEP_BASE_URL,
};
