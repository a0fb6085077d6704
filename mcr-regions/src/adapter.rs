//! Conversion between tables and the reduction engine.
//!
//! Input rows are read as `id, chromosome, start, end` from the first four
//! columns; anything after that is ignored. Output has one row per minimal
//! common region with the columns in [`COL_NAMES`].

use mcr_core::McrCoreResult;
use mcr_core::models::{Cell, Feature, Table, TableSource};

use crate::consensus::ConsensusRegion;
use crate::errors::McrResult;
use crate::reduce::{OverlapTarget, minimal_common_regions};

pub const COL_NAMES: [&str; 3] = ["Genomic Location", "Number of Samples", "Segment Ids"];

pub const ID_COL: usize = 0;
pub const CHR_COL: usize = 1;
pub const START_COL: usize = 2;
pub const END_COL: usize = 3;

///
/// Read every row of `table` as a [Feature].
///
/// Fails on the first row whose start or end is not an integer; no
/// features are returned in that case. Negative and reversed coordinates
/// are read as they are.
///
pub fn read_features<S: TableSource + ?Sized>(table: &S) -> McrCoreResult<Vec<Feature>> {
    (0..table.n_rows())
        .map(|row| read_feature(table, row))
        .collect()
}

fn read_feature<S: TableSource + ?Sized>(table: &S, row: usize) -> McrCoreResult<Feature> {
    let id = table.text(row, ID_COL)?;
    let chr = table.text(row, CHR_COL)?;
    let start = table.int(row, START_COL)?;
    let end = table.int(row, END_COL)?;

    Ok(Feature::new(id, chr, start, end))
}

///
/// Build the result table from regions that are already in output order.
///
pub fn regions_to_table(regions: &[ConsensusRegion]) -> Table {
    let mut table = Table::new(&COL_NAMES);

    for region in regions {
        table.push_row(vec![
            Cell::Text(region.location.to_string()),
            Cell::Int(region.n_samples() as i64),
            Cell::Text(region.joined_ids()),
        ]);
    }

    table
}

///
/// Compute the minimal common regions table of an input table.
///
/// The input is left untouched. An empty input gives a table with the
/// three headers and no rows.
///
pub fn reduce<S: TableSource + ?Sized>(table: &S, target: OverlapTarget) -> McrResult<Table> {
    let features = read_features(table)?;
    log::info!("Read {} features", features.len());

    let regions = minimal_common_regions(features, target);

    Ok(regions_to_table(&regions))
}
