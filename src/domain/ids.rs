//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for the identifiers vepflat passes
//! between components.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Variant identifier newtype wrapper
///
/// An HGVS-style variant notation such as `NC_000001.11:g.40819893T>A`.
/// The only check performed locally is that the identifier is not blank;
/// syntax validation is left to the annotation service.
///
/// # Examples
///
/// ```
/// use vepflat::domain::ids::VariantId;
/// use std::str::FromStr;
///
/// let variant = VariantId::from_str("NC_000006.12:g.152387156G>A").unwrap();
/// assert_eq!(variant.as_str(), "NC_000006.12:g.152387156G>A");
/// assert!(VariantId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantId(String);

impl VariantId {
    /// Creates a new VariantId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(VariantId)` if the identifier is non-blank, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Variant identifier cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VariantId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Run identifier
///
/// Whole seconds since the Unix epoch, rendered as a decimal string. It is
/// computed once per run and embedded in both output file names.
///
/// # Examples
///
/// ```
/// use vepflat::domain::ids::RunId;
///
/// let run_id = RunId::from_timestamp(1_700_000_000);
/// assert_eq!(run_id.to_string(), "1700000000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(i64);

impl RunId {
    /// Run identifier for the current instant
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Run identifier for the given instant, truncated to whole seconds
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        Self(at.timestamp())
    }

    /// Run identifier for a raw epoch-seconds value
    pub fn from_timestamp(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Epoch seconds
    pub fn timestamp(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
