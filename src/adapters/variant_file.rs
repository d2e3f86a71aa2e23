//! Variant list input files
//!
//! A variant file is UTF-8 text with one identifier per line.

use crate::domain::{InputError, Result, VariantId};
use std::fs;
use std::path::{Path, PathBuf};

/// Required extension for variant files
pub const VARIANT_FILE_EXTENSION: &str = "txt";

/// Checks that `path` names an existing `.txt` file
///
/// # Returns
///
/// The canonical (absolute) path of the file.
///
/// # Errors
///
/// [`InputError::NotFound`] if the path does not exist or is not a regular
/// file, [`InputError::InvalidExtension`] if it does not end in `.txt`.
pub fn validate_input_path(path: impl AsRef<Path>) -> std::result::Result<PathBuf, InputError> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(InputError::NotFound(path.display().to_string()));
    }

    let has_txt_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == VARIANT_FILE_EXTENSION);
    if !has_txt_extension {
        return Err(InputError::InvalidExtension(path.display().to_string()));
    }

    path.canonicalize().map_err(|e| InputError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Reads the lines of a variant file
///
/// Only the line terminator is stripped; blank lines are kept in place.
///
/// # Errors
///
/// Returns [`InputError::EmptyFile`] when the file has no lines and
/// [`InputError::Unreadable`] when it cannot be read as UTF-8.
///
/// # Examples
///
/// ```no_run
/// use vepflat::adapters::variant_file::load_variant_lines;
///
/// let lines = load_variant_lines("/data/variants.txt").unwrap();
/// ```
pub fn load_variant_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| InputError::Unreadable {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let lines: Vec<String> = contents.lines().map(str::to_string).collect();

    if lines.is_empty() {
        return Err(InputError::EmptyFile(path.display().to_string()).into());
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "Loaded variant file");

    Ok(lines)
}

/// Turns raw lines into variant identifiers
///
/// Lines are trimmed; blank lines do not name a variant and are skipped.
pub fn parse_variants(lines: &[String]) -> Vec<VariantId> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| match VariantId::new(line.trim()) {
            Ok(variant) => Some(variant),
            Err(_) => {
                tracing::debug!(line = index + 1, "Skipping blank line");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VepFlatError;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn write_variant_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_preserves_order_and_blank_lines() {
        let file = write_variant_file("NC_000001.11:g.40819893T>A\n\nNC_000006.12:g.152387156G>A\n");
        let lines = load_variant_lines(file.path()).unwrap();
        assert_eq!(
            lines,
            vec![
                "NC_000001.11:g.40819893T>A".to_string(),
                String::new(),
                "NC_000006.12:g.152387156G>A".to_string(),
            ]
        );
    }

    #[test]
    fn test_load_without_trailing_newline() {
        let file = write_variant_file("A\r\nB");
        let lines = load_variant_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn test_load_empty_file_fails() {
        let file = write_variant_file("");
        let result = load_variant_lines(file.path());
        assert!(matches!(
            result,
            Err(VepFlatError::Input(InputError::EmptyFile(_)))
        ));
    }

    #[test]
    fn test_load_blank_only_file_is_not_empty() {
        let file = write_variant_file("\n\n");
        let lines = load_variant_lines(file.path()).unwrap();
        assert_eq!(lines.len(), 2);
        assert!(parse_variants(&lines).is_empty());
    }

    #[test]
    fn test_parse_variants_trims_and_skips_blank() {
        let lines = vec![
            "  NC_000001.11:g.40819893T>A ".to_string(),
            "   ".to_string(),
            "NC_000006.12:g.152387156G>A".to_string(),
        ];
        let variants = parse_variants(&lines);
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].as_str(), "NC_000001.11:g.40819893T>A");
        assert_eq!(variants[1].as_str(), "NC_000006.12:g.152387156G>A");
    }

    #[test]
    fn test_validate_input_path() {
        let file = write_variant_file("A\n");
        let path = validate_input_path(file.path()).unwrap();
        assert!(path.is_absolute());
    }

    #[test]
    fn test_validate_input_path_missing() {
        let result = validate_input_path("/definitely/not/here/variants.txt");
        assert!(matches!(result, Err(InputError::NotFound(_))));
    }

    #[test]
    fn test_validate_input_path_wrong_extension() {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(b"A\n").unwrap();
        let result = validate_input_path(file.path());
        assert!(matches!(result, Err(InputError::InvalidExtension(_))));
    }

    #[test]
    fn test_validate_input_path_directory() {
        let dir = TempDir::new().unwrap();
        let result = validate_input_path(dir.path());
        assert!(matches!(result, Err(InputError::NotFound(_))));
    }
}
