//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX to avoid
//! interfering with each other.

use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;
use vepflat::config::{load_config, load_default_config, MissingGenePolicy, DEFAULT_VEP_BASE_URL};

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn cleanup_env_vars() {
    std::env::remove_var("VEPFLAT_APPLICATION_LOG_LEVEL");
    std::env::remove_var("VEPFLAT_VEP_BASE_URL");
    std::env::remove_var("VEPFLAT_VEP_TIMEOUT_SECONDS");
    std::env::remove_var("VEPFLAT_FLATTEN_MISSING_GENE");
    std::env::remove_var("VEPFLAT_OUTPUT_DIRECTORY");
    std::env::remove_var("VEPFLAT_OUTPUT_ALLOW_EMPTY");
    std::env::remove_var("VEPFLAT_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("TEST_VEP_HOST");
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = config_file(
        r#"
[application]
log_level = "debug"

[vep]
base_url = "https://grch37.rest.ensembl.org/vep/human/hgvs/"
timeout_seconds = 10
connect_timeout_seconds = 3
user_agent = "lab-pipeline/1.0"

[flatten]
missing_gene = "null"

[output]
directory = "results"
allow_empty = true

[logging]
local_enabled = true
local_path = "/var/log/vepflat"
local_rotation = "hourly"
"#,
    );

    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(
        config.vep.base_url,
        "https://grch37.rest.ensembl.org/vep/human/hgvs/"
    );
    assert_eq!(config.vep.timeout_seconds, 10);
    assert_eq!(config.vep.connect_timeout_seconds, 3);
    assert_eq!(config.vep.user_agent, "lab-pipeline/1.0");
    assert_eq!(config.flatten.missing_gene, MissingGenePolicy::Null);
    assert_eq!(config.output.directory, "results");
    assert!(config.output.allow_empty);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = config_file("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.vep.base_url, DEFAULT_VEP_BASE_URL);
    assert_eq!(config.flatten.missing_gene, MissingGenePolicy::Fail);
    assert!(!config.output.allow_empty);
    assert_eq!(config, load_default_config().unwrap());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_VEP_HOST", "vep.internal.example.org");

    let file = config_file(
        r#"
[vep]
base_url = "http://${TEST_VEP_HOST}/vep/human/hgvs/"
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.vep.base_url,
        "http://vep.internal.example.org/vep/human/hgvs/"
    );
    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable_fails() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = config_file(
        r#"
[vep]
base_url = "http://${TEST_VEP_HOST}/vep/human/hgvs/"
"#,
    );
    let err = load_config(file.path()).unwrap_err();

    assert!(err.to_string().contains("TEST_VEP_HOST"));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_env_overrides_take_precedence() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("VEPFLAT_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("VEPFLAT_FLATTEN_MISSING_GENE", "null");
    std::env::set_var("VEPFLAT_OUTPUT_ALLOW_EMPTY", "true");

    let file = config_file(
        r#"
[application]
log_level = "debug"

[flatten]
missing_gene = "fail"
"#,
    );
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.flatten.missing_gene, MissingGenePolicy::Null);
    assert!(config.output.allow_empty);
    cleanup_env_vars();
}

#[test]
fn test_invalid_override_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("VEPFLAT_VEP_TIMEOUT_SECONDS", "soon");

    let result = load_default_config();

    cleanup_env_vars();
    assert!(result.is_err());
}

#[test]
fn test_invalid_boolean_overrides_are_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();

    for name in ["VEPFLAT_OUTPUT_ALLOW_EMPTY", "VEPFLAT_LOGGING_LOCAL_ENABLED"] {
        cleanup_env_vars();
        std::env::set_var(name, "enabled");

        let result = load_default_config();

        cleanup_env_vars();
        let err = result.unwrap_err();
        assert!(err.to_string().contains(name), "unexpected error: {err}");
    }
}

#[test]
fn test_invalid_values_are_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    for contents in [
        "[application]\nlog_level = \"loud\"\n",
        "[vep]\nbase_url = \"ftp://rest.ensembl.org/\"\n",
        "[flatten]\nmissing_gene = \"skip\"\n",
        "[logging]\nlocal_rotation = \"weekly\"\n",
    ] {
        let file = config_file(contents);
        assert!(
            load_config(file.path()).is_err(),
            "expected rejection of {contents:?}"
        );
    }
}

#[test]
fn test_missing_file_is_a_configuration_error() {
    let err = load_config("/definitely/not/here/vepflat.toml").unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
