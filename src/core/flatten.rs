//! Response flattening
//!
//! Projects every consequence object of every raw annotation onto the fixed
//! eight-column [`FlatRecord`]. Documents are processed in collection order
//! and consequences in list order.

use crate::config::MissingGenePolicy;
use crate::domain::annotation::json_type_name;
use crate::domain::{cell_text, FlatRecord, FlatteningError, RawAnnotation, Result};
use serde_json::{Map, Value};

/// Flatten raw annotations into flat records
///
/// Each raw annotation contributes exactly as many records as it has list
/// elements; an empty list contributes none. Field values are taken as-is,
/// whatever their JSON type; a missing key or a null leaves the field empty.
///
/// # Arguments
///
/// * `annotations` - Successful lookups, in response order
/// * `missing_gene` - Handling of consequences without transcript consequences
///
/// # Errors
///
/// Returns [`FlatteningError::Malformed`] if a list element, or the first
/// transcript consequence, is not an object, or if `transcript_consequences`
/// is not a list. Under [`MissingGenePolicy::Fail`],
/// [`FlatteningError::MissingTranscriptConsequences`] is returned when
/// `transcript_consequences` is absent, null or empty. The first error aborts
/// flattening.
///
/// # Examples
///
/// ```
/// use vepflat::config::MissingGenePolicy;
/// use vepflat::core::flatten::flatten_annotations;
/// use vepflat::domain::{RawAnnotation, VariantId};
/// use serde_json::json;
///
/// # fn example() -> vepflat::domain::Result<()> {
/// let raw = RawAnnotation::from_json(
///     VariantId::new("X").unwrap(),
///     json!([{"input": "X", "transcript_consequences": [{"gene_symbol": "BRCA1"}]}]),
/// ).unwrap();
///
/// let records = flatten_annotations(&[raw], MissingGenePolicy::Fail)?;
/// assert_eq!(records[0].gene, Some(json!("BRCA1")));
/// # Ok(())
/// # }
/// ```
pub fn flatten_annotations(
    annotations: &[RawAnnotation],
    missing_gene: MissingGenePolicy,
) -> Result<Vec<FlatRecord>> {
    let mut records = Vec::with_capacity(annotations.iter().map(RawAnnotation::len).sum());

    for annotation in annotations {
        if annotation.is_empty() {
            tracing::debug!(variant = %annotation.variant, "Annotation has no consequences");
        }
        for consequence in &annotation.consequences {
            records.push(flatten_consequence(annotation, consequence, missing_gene)?);
        }
    }

    tracing::debug!(
        documents = annotations.len(),
        records = records.len(),
        "Flattened annotations"
    );

    Ok(records)
}

fn flatten_consequence(
    annotation: &RawAnnotation,
    consequence: &Value,
    missing_gene: MissingGenePolicy,
) -> Result<FlatRecord> {
    let object = consequence
        .as_object()
        .ok_or_else(|| malformed(annotation, "a consequence object", consequence))?;

    let gene = match object.get("transcript_consequences") {
        Some(Value::Array(list)) if !list.is_empty() => {
            let first = list[0]
                .as_object()
                .ok_or_else(|| malformed(annotation, "a transcript consequence object", &list[0]))?;
            field(first, "gene_symbol")
        }
        None | Some(Value::Null) | Some(Value::Array(_)) => match missing_gene {
            MissingGenePolicy::Fail => {
                return Err(FlatteningError::MissingTranscriptConsequences {
                    variant: annotation.variant.to_string(),
                    input: object
                        .get("input")
                        .map(|input| cell_text(Some(input)))
                        .unwrap_or_default(),
                }
                .into())
            }
            MissingGenePolicy::Null => {
                tracing::debug!(
                    variant = %annotation.variant,
                    "No transcript consequences, leaving gene empty"
                );
                None
            }
        },
        Some(other) => {
            return Err(malformed(annotation, "a transcript_consequences list", other).into())
        }
    };

    Ok(FlatRecord {
        assembly_name: field(object, "assembly_name"),
        end: field(object, "end"),
        gene,
        input: field(object, "input"),
        most_severe_consequence: field(object, "most_severe_consequence"),
        seq_region_name: field(object, "seq_region_name"),
        start: field(object, "start"),
        strand: field(object, "strand"),
    })
}

/// Value of `key`, with null treated as absent
fn field(object: &Map<String, Value>, key: &str) -> Option<Value> {
    object.get(key).filter(|value| !value.is_null()).cloned()
}

fn malformed(annotation: &RawAnnotation, expected: &str, found: &Value) -> FlatteningError {
    FlatteningError::Malformed {
        variant: annotation.variant.to_string(),
        message: format!("expected {expected}, got {}", json_type_name(found)),
    }
}
