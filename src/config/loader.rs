//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{MissingGenePolicy, VepFlatConfig};
use crate::domain::errors::VepFlatError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into VepFlatConfig
/// 4. Applies environment variable overrides (VEPFLAT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use vepflat::config::loader::load_config;
///
/// let config = load_config("vepflat.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<VepFlatConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VepFlatError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VepFlatError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: VepFlatConfig = toml::from_str(&contents)
        .map_err(|e| VepFlatError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        VepFlatError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Built-in defaults with environment overrides applied
///
/// Used when no configuration file is given.
pub fn load_default_config() -> Result<VepFlatConfig> {
    let mut config = VepFlatConfig::default();
    apply_env_overrides(&mut config)?;
    config.validate().map_err(|e| {
        VepFlatError::Configuration(format!("Configuration validation failed: {e}"))
    })?;
    Ok(config)
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("environment variable pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = env_var_pattern();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(VepFlatError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using VEPFLAT_* prefix
///
/// Environment variables follow the pattern VEPFLAT_<SECTION>_<KEY>,
/// for example VEPFLAT_VEP_BASE_URL or VEPFLAT_OUTPUT_DIRECTORY.
fn apply_env_overrides(config: &mut VepFlatConfig) -> Result<()> {
    if let Ok(val) = std::env::var("VEPFLAT_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("VEPFLAT_VEP_BASE_URL") {
        config.vep.base_url = val;
    }
    if let Ok(val) = std::env::var("VEPFLAT_VEP_TIMEOUT_SECONDS") {
        config.vep.timeout_seconds = parse_override("VEPFLAT_VEP_TIMEOUT_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("VEPFLAT_VEP_CONNECT_TIMEOUT_SECONDS") {
        config.vep.connect_timeout_seconds =
            parse_override("VEPFLAT_VEP_CONNECT_TIMEOUT_SECONDS", &val)?;
    }
    if let Ok(val) = std::env::var("VEPFLAT_VEP_USER_AGENT") {
        config.vep.user_agent = val;
    }

    if let Ok(val) = std::env::var("VEPFLAT_FLATTEN_MISSING_GENE") {
        config.flatten.missing_gene = match val.to_lowercase().as_str() {
            "fail" => MissingGenePolicy::Fail,
            "null" => MissingGenePolicy::Null,
            other => {
                return Err(VepFlatError::Configuration(format!(
                    "Invalid VEPFLAT_FLATTEN_MISSING_GENE '{other}'. Must be one of: fail, null"
                )))
            }
        };
    }

    if let Ok(val) = std::env::var("VEPFLAT_OUTPUT_DIRECTORY") {
        config.output.directory = val;
    }
    if let Ok(val) = std::env::var("VEPFLAT_OUTPUT_ALLOW_EMPTY") {
        config.output.allow_empty = parse_override("VEPFLAT_OUTPUT_ALLOW_EMPTY", &val)?;
    }

    if let Ok(val) = std::env::var("VEPFLAT_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_override("VEPFLAT_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("VEPFLAT_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}

fn parse_override<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| {
        VepFlatError::Configuration(format!("Invalid value for {name}: '{value}'"))
    })
}
