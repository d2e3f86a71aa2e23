//! Result type alias for vepflat

use super::errors::VepFlatError;

/// Result type alias for vepflat operations
///
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use vepflat::domain::result::Result;
/// use vepflat::domain::errors::VepFlatError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(VepFlatError::Configuration("Invalid base URL".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, VepFlatError>;
