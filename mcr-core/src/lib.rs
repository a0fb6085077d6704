//! Core models for minimal common region analysis.
//!
//! This crate holds the small set of types shared by the rest of the workspace:
//!
//! - [`Chromosome`](models::Chromosome): a grouping key with natural (karyotypic) ordering
//! - [`GenomicRegion`](models::GenomicRegion): a closed interval on one chromosome
//! - [`Feature`](models::Feature): a genomic region tagged with a sample or segment id
//! - [`Table`](models::Table): a minimal row/column table used as input and output
//!
//! # Example
//!
//! ```
//! use mcr_core::models::GenomicRegion;
//!
//! let a: GenomicRegion = "chr1:100-200".parse().unwrap();
//! let b: GenomicRegion = "chr1:150-250".parse().unwrap();
//!
//! let overlap = a.overlap(&b).unwrap();
//! assert_eq!(overlap.to_string(), "chr1:150-200");
//! ```

pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use errors::{McrCoreError, McrCoreResult};
