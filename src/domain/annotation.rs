//! Raw annotation documents as returned by the VEP service

use super::ids::VariantId;
use serde_json::Value;

/// The JSON document returned by the annotation service for one variant
///
/// The service answers with a list of consequence objects; the list is
/// commonly of length one but may be empty or longer. Elements are kept as
/// raw JSON until flattening.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAnnotation {
    /// Identifier the document was requested for
    pub variant: VariantId,

    /// Top-level list elements, in response order
    pub consequences: Vec<Value>,
}

impl RawAnnotation {
    /// Wraps a decoded response body
    ///
    /// # Errors
    ///
    /// Returns an error message if the body is not a JSON list.
    ///
    /// # Examples
    ///
    /// ```
    /// use vepflat::domain::{RawAnnotation, VariantId};
    /// use serde_json::json;
    ///
    /// let variant = VariantId::new("X").unwrap();
    /// let raw = RawAnnotation::from_json(variant, json!([{"input": "X"}])).unwrap();
    /// assert_eq!(raw.len(), 1);
    /// ```
    pub fn from_json(variant: VariantId, body: Value) -> Result<Self, String> {
        match body {
            Value::Array(consequences) => Ok(Self {
                variant,
                consequences,
            }),
            other => Err(format!(
                "expected a JSON list of consequences, got {}",
                json_type_name(&other)
            )),
        }
    }

    /// Number of top-level elements
    pub fn len(&self) -> usize {
        self.consequences.len()
    }

    /// Whether the service returned an empty list
    pub fn is_empty(&self) -> bool {
        self.consequences.is_empty()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
