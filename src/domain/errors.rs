//! Domain error types
//!
//! This module defines the error hierarchy for vepflat. Per-variant lookup
//! failures are not errors at this level: they are recovered into
//! [`ErrorRecord`](crate::domain::records::ErrorRecord)s and the run continues.
//! Everything represented here aborts the run.

use thiserror::Error;

/// Main vepflat error type
///
/// This is the primary error type used throughout the application.
/// It wraps the component-specific error types and provides context for
/// mapping failures to exit codes.
#[derive(Debug, Error)]
pub enum VepFlatError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input file errors, raised before any network activity
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Fatal errors from the annotation service
    #[error("VEP service error: {0}")]
    VepService(#[from] VepServiceError),

    /// Response flattening errors
    #[error("Flattening error: {0}")]
    Flattening(#[from] FlatteningError),

    /// Result writer errors
    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Input file errors
#[derive(Debug, Error)]
pub enum InputError {
    /// The path does not exist or is not a regular file
    #[error("File not found: {0}")]
    NotFound(String),

    /// The path does not carry the `.txt` extension
    #[error("Not a .txt file: {0}")]
    InvalidExtension(String),

    /// The file exists but contains no lines
    #[error("File is empty: {0}")]
    EmptyFile(String),

    /// The file could not be read
    #[error("Failed to read {path}: {message}")]
    Unreadable { path: String, message: String },
}

/// Annotation service errors that cannot be recorded per variant
///
/// These don't expose third-party HTTP client types.
#[derive(Debug, Error)]
pub enum VepServiceError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// A response body could not be decoded as the expected JSON shape
    #[error("Invalid response for {variant}: {message}")]
    InvalidResponse { variant: String, message: String },
}

/// Errors raised while projecting raw annotations onto flat records
#[derive(Debug, Error)]
pub enum FlatteningError {
    /// `transcript_consequences` is absent, null or empty
    #[error("No transcript consequences for input {input} (from variant {variant})")]
    MissingTranscriptConsequences { variant: String, input: String },

    /// An element is not an object or a field carries the wrong JSON type
    #[error("Malformed annotation for variant {variant}: {message}")]
    Malformed { variant: String, message: String },
}

/// Result writer errors
#[derive(Debug, Error)]
pub enum OutputError {
    /// A record sequence has no rows to derive a table from
    #[error("No {0} records to write")]
    EmptyRecords(&'static str),

    /// Writing a table failed
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

impl VepFlatError {
    /// Process exit code for this error
    ///
    /// `2` for configuration problems, `3` for input problems and `5` for
    /// every other fatal error.
    pub fn exit_code(&self) -> i32 {
        match self {
            VepFlatError::Configuration(_) => 2,
            VepFlatError::Input(_) => 3,
            _ => 5,
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for VepFlatError {
    fn from(err: std::io::Error) -> Self {
        VepFlatError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VepFlatError {
    fn from(err: serde_json::Error) -> Self {
        VepFlatError::Serialization(err.to_string())
    }
}

// Conversion from csv::Error
impl From<csv::Error> for VepFlatError {
    fn from(err: csv::Error) -> Self {
        VepFlatError::Serialization(format!("TSV error: {err}"))
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VepFlatError {
    fn from(err: toml::de::Error) -> Self {
        VepFlatError::Configuration(format!("TOML parse error: {err}"))
    }
}
