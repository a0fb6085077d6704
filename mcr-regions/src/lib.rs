//! Minimal common regions (MCR) for sample segments.
//!
//! Given segments from many samples (for example copy number calls), this
//! crate finds, per chromosome, each cluster of overlapping segments and
//! shrinks it to the region every member shares, together with the ids of
//! the segments that contributed.
//!
//! # Example
//!
//! ```
//! use mcr_core::models::{Cell, Table};
//! use mcr_regions::{OverlapTarget, reduce};
//!
//! let mut input = Table::new(&["id", "chr", "start", "end"]);
//! input.push_row(vec!["s1".into(), "chr1".into(), "100".into(), "200".into()]);
//! input.push_row(vec!["s2".into(), "chr1".into(), "150".into(), "250".into()]);
//!
//! let output = reduce(&input, OverlapTarget::Neighbor).unwrap();
//! assert_eq!(output.cell(0, 0), Some(&Cell::Text("chr1:150-200".to_string())));
//! assert_eq!(output.cell(0, 2), Some(&Cell::Text("s1;s2".to_string())));
//! ```

pub mod adapter;
pub mod config;
pub mod consensus;
pub mod errors;
pub mod host;
pub mod reduce;

// re-exports
pub use adapter::{COL_NAMES, reduce};
pub use config::McrConfig;
pub use consensus::ConsensusRegion;
pub use errors::{McrConfigError, McrError, McrResult};
pub use host::{HistorySink, TableProvider, run_with_host};
pub use reduce::{OverlapTarget, UniqueSet, minimal_common_regions};
