//! Domain models and types for vepflat.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`VariantId`], [`RunId`])
//! - **Annotation documents** ([`RawAnnotation`])
//! - **Output records** ([`FlatRecord`], [`ErrorRecord`])
//! - **Error types** ([`VepFlatError`] and its component errors)
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VepFlatError>`]:
//!
//! ```rust
//! use vepflat::domain::{InputError, Result};
//!
//! fn example(lines: &[String]) -> Result<()> {
//!     if lines.is_empty() {
//!         return Err(InputError::EmptyFile("variants.txt".to_string()).into());
//!     }
//!     Ok(())
//! }
//! ```

pub mod annotation;
pub mod errors;
pub mod ids;
pub mod records;
pub mod result;

// Re-export commonly used types for convenience
pub use annotation::RawAnnotation;
pub use errors::{FlatteningError, InputError, OutputError, VepFlatError, VepServiceError};
pub use ids::{RunId, VariantId};
pub use records::{cell_text, ErrorRecord, FlatRecord, LookupErrorKind};
pub use result::Result;
