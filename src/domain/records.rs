//! Flat output records
//!
//! Both record types have a fixed schema. Every record in a table carries the
//! same columns, so the header can never lose a field that only later rows
//! populate.

use super::ids::VariantId;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Eight-field projection of one consequence object
///
/// Values are carried through exactly as the service returned them; a
/// missing key or a JSON null is `None`. Fields are declared in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    pub assembly_name: Option<Value>,
    pub end: Option<Value>,
    pub gene: Option<Value>,
    pub input: Option<Value>,
    pub most_severe_consequence: Option<Value>,
    pub seq_region_name: Option<Value>,
    pub start: Option<Value>,
    pub strand: Option<Value>,
}

impl FlatRecord {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 8] = [
        "assembly_name",
        "end",
        "gene",
        "input",
        "most_severe_consequence",
        "seq_region_name",
        "start",
        "strand",
    ];

    /// Field values in column order
    pub fn fields(&self) -> [Option<&Value>; 8] {
        [
            self.assembly_name.as_ref(),
            self.end.as_ref(),
            self.gene.as_ref(),
            self.input.as_ref(),
            self.most_severe_consequence.as_ref(),
            self.seq_region_name.as_ref(),
            self.start.as_ref(),
            self.strand.as_ref(),
        ]
    }

    /// Field values in column order, rendered as table cells
    pub fn cells(&self) -> [String; 8] {
        self.fields().map(cell_text)
    }

    /// Cells keyed by column name, as a table row reads back
    pub fn row(&self) -> HashMap<String, String> {
        Self::COLUMNS
            .iter()
            .map(|column| column.to_string())
            .zip(self.cells())
            .collect()
    }
}

/// Renders an optional JSON value as a table cell
///
/// Missing values and nulls are empty and strings are written as-is. Numbers,
/// booleans and nested values are written as compact JSON.
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Category of a failed lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupErrorKind {
    /// The service answered with a non-success status
    Http,
    /// The connection could not be established or completed
    Connection,
    /// The request timed out
    Timeout,
    /// Any other request-layer failure
    Request,
}

impl LookupErrorKind {
    /// Output column that carries the detail for this category
    pub fn column_name(&self) -> &'static str {
        match self {
            LookupErrorKind::Http => "http_error",
            LookupErrorKind::Connection => "connection_error",
            LookupErrorKind::Timeout => "timeout_error",
            LookupErrorKind::Request => "request_error",
        }
    }
}

impl fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LookupErrorKind::Http => "HTTP error",
            LookupErrorKind::Connection => "Connection error",
            LookupErrorKind::Timeout => "Timeout error",
            LookupErrorKind::Request => "Request error",
        };
        f.write_str(label)
    }
}

/// One failed lookup, or the "no variants" marker
///
/// A lookup failure carries its variant and exactly one categorized detail.
/// Only HTTP failures carry an `error_description`: the service's own error
/// body, parsed as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    variant: Option<VariantId>,
    failure: Option<(LookupErrorKind, String)>,
    error_description: Option<Value>,
}

impl ErrorRecord {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 6] = [
        "connection_error",
        "error_description",
        "http_error",
        "request_error",
        "timeout_error",
        "variant",
    ];

    /// Text recorded when a run is given no identifiers
    pub const NO_VARIANTS: &'static str = "No variants were given.";

    /// HTTP status failure with the service's decoded error body
    pub fn http(variant: VariantId, detail: impl Into<String>, description: Value) -> Self {
        Self {
            variant: Some(variant),
            failure: Some((LookupErrorKind::Http, detail.into())),
            error_description: Some(description),
        }
    }

    /// Connection failure
    pub fn connection(variant: VariantId, detail: impl Into<String>) -> Self {
        Self::transport(variant, LookupErrorKind::Connection, detail)
    }

    /// Timeout
    pub fn timeout(variant: VariantId, detail: impl Into<String>) -> Self {
        Self::transport(variant, LookupErrorKind::Timeout, detail)
    }

    /// Other request-layer failure
    pub fn request(variant: VariantId, detail: impl Into<String>) -> Self {
        Self::transport(variant, LookupErrorKind::Request, detail)
    }

    /// Marker for a run that had no identifiers to look up
    pub fn no_variants() -> Self {
        Self {
            variant: None,
            failure: None,
            error_description: Some(Value::String(Self::NO_VARIANTS.to_string())),
        }
    }

    fn transport(variant: VariantId, kind: LookupErrorKind, detail: impl Into<String>) -> Self {
        Self {
            variant: Some(variant),
            failure: Some((kind, detail.into())),
            error_description: None,
        }
    }

    /// Variant that failed, absent on the "no variants" marker
    pub fn variant(&self) -> Option<&VariantId> {
        self.variant.as_ref()
    }

    /// Failure category
    pub fn kind(&self) -> Option<LookupErrorKind> {
        self.failure.as_ref().map(|(kind, _)| *kind)
    }

    /// Detail text of the failure, whatever its category
    pub fn detail(&self) -> Option<&str> {
        self.failure.as_ref().map(|(_, detail)| detail.as_str())
    }

    /// Service error body, or the "no variants" text
    pub fn error_description(&self) -> Option<&Value> {
        self.error_description.as_ref()
    }

    /// Detail text if this record belongs to `kind`
    pub fn detail_for(&self, kind: LookupErrorKind) -> Option<&str> {
        match &self.failure {
            Some((k, detail)) if *k == kind => Some(detail.as_str()),
            _ => None,
        }
    }

    /// Value of the `http_error` column
    pub fn http_error(&self) -> Option<&str> {
        self.detail_for(LookupErrorKind::Http)
    }

    /// Value of the `connection_error` column
    pub fn connection_error(&self) -> Option<&str> {
        self.detail_for(LookupErrorKind::Connection)
    }

    /// Value of the `timeout_error` column
    pub fn timeout_error(&self) -> Option<&str> {
        self.detail_for(LookupErrorKind::Timeout)
    }

    /// Value of the `request_error` column
    pub fn request_error(&self) -> Option<&str> {
        self.detail_for(LookupErrorKind::Request)
    }
}
