//! Ensembl VEP annotation service adapter

pub mod annotator;
pub mod client;

pub use annotator::{LookupOutcome, VariantAnnotator};
pub use client::VepClient;
