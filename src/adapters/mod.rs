//! External integrations
//!
//! - [`vep`] - Ensembl VEP REST service
//! - [`variant_file`] - Variant list input files
//! - [`tsv`] - Tab-separated result tables
//!
//! The annotation service sits behind the [`vep::VariantAnnotator`] trait so
//! runs can be driven by a stub in tests.

pub mod tsv;
pub mod variant_file;
pub mod vep;
