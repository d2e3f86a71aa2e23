//! Configuration schema types
//!
//! Every section and field has a default, so an absent configuration file
//! behaves exactly like an empty one.

use serde::{Deserialize, Serialize};

/// Default annotation endpoint; identifiers are appended verbatim
pub const DEFAULT_VEP_BASE_URL: &str = "http://rest.ensembl.org/vep/human/hgvs/";

/// Main vepflat configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VepFlatConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Annotation service settings
    #[serde(default)]
    pub vep: VepConfig,

    /// Flattening behavior
    #[serde(default)]
    pub flatten: FlattenConfig,

    /// Output file settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VepFlatConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.vep.validate()?;
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Annotation service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VepConfig {
    /// Endpoint prefix; each variant identifier is appended without escaping
    #[serde(default = "default_vep_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds (0 = no client-side timeout)
    #[serde(default)]
    pub timeout_seconds: u64,

    /// Connect timeout in seconds (0 = no client-side timeout)
    #[serde(default)]
    pub connect_timeout_seconds: u64,

    /// User-Agent header sent with every lookup
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl VepConfig {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("vep.base_url cannot be empty".to_string());
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("vep.base_url must start with http:// or https://".to_string());
        }

        url::Url::parse(&self.base_url)
            .map_err(|e| format!("vep.base_url '{}' is not a valid URL: {e}", self.base_url))?;

        Ok(())
    }
}

impl Default for VepConfig {
    fn default() -> Self {
        Self {
            base_url: default_vep_base_url(),
            timeout_seconds: 0,
            connect_timeout_seconds: 0,
            user_agent: default_user_agent(),
        }
    }
}

/// What to do when a consequence has no transcript consequences to take a
/// gene symbol from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingGenePolicy {
    /// Abort flattening with an error
    #[default]
    Fail,
    /// Leave `gene` empty and continue
    Null,
}

/// Flattening configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlattenConfig {
    /// Handling of absent or empty `transcript_consequences`
    #[serde(default)]
    pub missing_gene: MissingGenePolicy,
}

/// Output file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the two TSV files are written to
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Write header-only tables instead of failing when a record list is empty
    #[serde(default)]
    pub allow_empty: bool,
}

impl OutputConfig {
    fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("output.directory cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_output_directory(),
            allow_empty: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rolling files in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation (daily, hourly, never)
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_vep_base_url() -> String {
    DEFAULT_VEP_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("vepflat/{}", env!("CARGO_PKG_VERSION"))
}

fn default_output_directory() -> String {
    ".".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}
