//! Tab-separated result tables
//!
//! Each run writes `output_<run_id>.tsv` with one row per [`FlatRecord`] and
//! `error_<run_id>.tsv` with one row per [`ErrorRecord`]. Headers are the
//! sorted column names; missing values are empty fields, strings are written
//! as-is and other JSON values as compact JSON.

use crate::domain::{cell_text, ErrorRecord, FlatRecord, OutputError, Result, RunId};
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Locations of the two tables written for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Flat annotation records
    pub records: PathBuf,

    /// Failed lookups
    pub errors: PathBuf,
}

/// Writes the result tables of one run
///
/// # Example
///
/// ```no_run
/// use vepflat::adapters::tsv::TsvWriter;
/// use vepflat::domain::RunId;
///
/// # fn example() -> vepflat::domain::Result<()> {
/// let writer = TsvWriter::new("results", RunId::now());
/// let paths = writer.write(&[], &[])?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TsvWriter {
    directory: PathBuf,
    run_id: RunId,
    allow_empty: bool,
}

impl TsvWriter {
    pub fn new(directory: impl Into<PathBuf>, run_id: RunId) -> Self {
        Self {
            directory: directory.into(),
            run_id,
            allow_empty: false,
        }
    }

    /// Write header-only tables instead of failing on empty record lists
    pub fn allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Paths the tables of this run are written to
    pub fn paths(&self) -> OutputPaths {
        OutputPaths {
            records: self.directory.join(format!("output_{}.tsv", self.run_id)),
            errors: self.directory.join(format!("error_{}.tsv", self.run_id)),
        }
    }

    /// Writes the record table, then the error table
    ///
    /// # Errors
    ///
    /// Unless empty tables are allowed, an empty record list is rejected with
    /// [`OutputError::EmptyRecords`]. The record table is written before the
    /// error list is checked, so a run without failures keeps its records.
    pub fn write(&self, records: &[FlatRecord], errors: &[ErrorRecord]) -> Result<OutputPaths> {
        let paths = self.paths();

        fs::create_dir_all(&self.directory).map_err(|e| OutputError::WriteFailed {
            path: self.directory.display().to_string(),
            message: e.to_string(),
        })?;

        if records.is_empty() && !self.allow_empty {
            return Err(OutputError::EmptyRecords("output").into());
        }
        write_table(
            &paths.records,
            &FlatRecord::COLUMNS,
            records.iter().map(FlatRecord::cells),
        )?;
        tracing::info!(path = %paths.records.display(), rows = records.len(), "Wrote output table");

        if errors.is_empty() && !self.allow_empty {
            return Err(OutputError::EmptyRecords("error").into());
        }
        write_table(&paths.errors, &ErrorRecord::COLUMNS, errors.iter().map(error_cells))?;
        tracing::info!(path = %paths.errors.display(), rows = errors.len(), "Wrote error table");

        Ok(paths)
    }
}

/// Cells of an [`ErrorRecord`] in column order
fn error_cells(record: &ErrorRecord) -> [String; 6] {
    let text = |detail: Option<&str>| detail.unwrap_or_default().to_string();
    [
        text(record.connection_error()),
        cell_text(record.error_description()),
        text(record.http_error()),
        text(record.request_error()),
        text(record.timeout_error()),
        text(record.variant().map(|v| v.as_str())),
    ]
}

fn write_table<const N: usize>(
    path: &Path,
    columns: &[&str; N],
    rows: impl Iterator<Item = [String; N]>,
) -> Result<()> {
    let write_failed = |message: String| OutputError::WriteFailed {
        path: path.display().to_string(),
        message,
    };

    let file = File::create(path).map_err(|e| write_failed(e.to_string()))?;
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(columns)
        .map_err(|e| write_failed(e.to_string()))?;
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| write_failed(e.to_string()))?;
    }
    writer.flush().map_err(|e| write_failed(e.to_string()))?;

    Ok(())
}

/// Reads a table back as header-keyed cells
///
/// Cells are text; a row read back equals [`FlatRecord::row`] of the record
/// that was written.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<HashMap<String, String>>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path.as_ref())?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{VariantId, VepFlatError};
    use serde_json::json;
    use tempfile::TempDir;

    fn brca1() -> FlatRecord {
        FlatRecord {
            input: Some(json!("X")),
            start: Some(json!(100)),
            end: Some(json!(100)),
            strand: Some(json!(1)),
            most_severe_consequence: Some(json!("missense_variant")),
            gene: Some(json!("BRCA1")),
            ..Default::default()
        }
    }

    fn variant(id: &str) -> VariantId {
        VariantId::new(id).unwrap()
    }

    #[test]
    fn test_paths_embed_run_id() {
        let writer = TsvWriter::new("/out", RunId::from_timestamp(1_700_000_000));
        let paths = writer.paths();
        assert_eq!(paths.records, PathBuf::from("/out/output_1700000000.tsv"));
        assert_eq!(paths.errors, PathBuf::from("/out/error_1700000000.tsv"));
    }

    #[test]
    fn test_write_and_read_back_records() {
        let dir = TempDir::new().unwrap();
        let writer = TsvWriter::new(dir.path(), RunId::from_timestamp(1));
        let records = vec![brca1(), FlatRecord::default()];
        let errors = vec![ErrorRecord::connection(variant("Y"), "refused")];

        let paths = writer.write(&records, &errors).unwrap();

        let contents = fs::read_to_string(&paths.records).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "assembly_name\tend\tgene\tinput\tmost_severe_consequence\tseq_region_name\tstart\tstrand"
        );
        assert_eq!(lines.next().unwrap(), "\t100\tBRCA1\tX\tmissense_variant\t\t100\t1");

        let rows = read_rows(&paths.records).unwrap();
        let expected: Vec<_> = records.iter().map(FlatRecord::row).collect();
        assert_eq!(rows, expected);
    }

    #[test]
    fn test_non_string_values_are_written_as_json_text() {
        let dir = TempDir::new().unwrap();
        let writer = TsvWriter::new(dir.path(), RunId::from_timestamp(7));
        let record = FlatRecord {
            input: Some(json!("A")),
            seq_region_name: Some(json!(1)),
            start: Some(json!(100.0)),
            gene: Some(json!(["G1", "G2"])),
            ..Default::default()
        };

        let paths = writer
            .write(&[record], &[ErrorRecord::timeout(variant("B"), "timed out")])
            .unwrap();

        let rows = read_rows(&paths.records).unwrap();
        assert_eq!(rows[0]["seq_region_name"], "1");
        assert_eq!(rows[0]["start"], "100.0");
        assert_eq!(rows[0]["gene"], r#"["G1","G2"]"#);
        assert_eq!(rows[0]["end"], "");
    }

    #[test]
    fn test_error_table_columns() {
        let dir = TempDir::new().unwrap();
        let writer = TsvWriter::new(dir.path(), RunId::from_timestamp(2));
        let errors = vec![
            ErrorRecord::http(
                variant("A"),
                "400 Client Error: Bad Request for url: http://x/A",
                json!({"error": "not found"}),
            ),
            ErrorRecord::timeout(variant("B"), "timed out"),
        ];

        let paths = writer.write(&[brca1()], &errors).unwrap();

        let header = fs::read_to_string(&paths.errors).unwrap();
        assert!(header.starts_with(
            "connection_error\terror_description\thttp_error\trequest_error\ttimeout_error\tvariant\n"
        ));

        let rows = read_rows(&paths.errors).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["variant"], "A");
        assert_eq!(rows[0]["error_description"], r#"{"error":"not found"}"#);
        assert_eq!(rows[0]["http_error"], "400 Client Error: Bad Request for url: http://x/A");
        assert_eq!(rows[0]["timeout_error"], "");
        assert_eq!(rows[1]["variant"], "B");
        assert_eq!(rows[1]["timeout_error"], "timed out");
        assert_eq!(rows[1]["error_description"], "");
    }

    #[test]
    fn test_no_variants_description_is_plain_text() {
        let dir = TempDir::new().unwrap();
        let writer = TsvWriter::new(dir.path(), RunId::from_timestamp(3)).allow_empty(true);

        let paths = writer.write(&[], &[ErrorRecord::no_variants()]).unwrap();

        let rows = read_rows(&paths.errors).unwrap();
        assert_eq!(rows[0]["error_description"], "No variants were given.");
        assert_eq!(rows[0]["variant"], "");
        assert!(read_rows(&paths.records).unwrap().is_empty());
    }

    #[test]
    fn test_empty_records_are_rejected() {
        let dir = TempDir::new().unwrap();
        let writer = TsvWriter::new(dir.path(), RunId::from_timestamp(4));

        let result = writer.write(&[], &[ErrorRecord::no_variants()]);

        assert!(matches!(
            result,
            Err(VepFlatError::Output(OutputError::EmptyRecords("output")))
        ));
        assert!(!writer.paths().records.exists());
        assert!(!writer.paths().errors.exists());
    }

    #[test]
    fn test_empty_errors_are_rejected_after_records_are_written() {
        let dir = TempDir::new().unwrap();
        let writer = TsvWriter::new(dir.path(), RunId::from_timestamp(5));

        let result = writer.write(&[brca1()], &[]);

        assert!(matches!(
            result,
            Err(VepFlatError::Output(OutputError::EmptyRecords("error")))
        ));
        assert!(writer.paths().records.exists());
        assert!(!writer.paths().errors.exists());
    }

    #[test]
    fn test_creates_output_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("results");
        let writer = TsvWriter::new(&nested, RunId::from_timestamp(6)).allow_empty(true);

        let paths = writer.write(&[], &[]).unwrap();

        assert!(paths.records.exists());
        assert!(paths.errors.exists());
    }
}
