//! Narrow interface to the application hosting a run.
//!
//! The host supplies the table the user selected and records the result
//! under a label. A run touches each side exactly once.

use mcr_core::models::Table;

use crate::adapter::reduce;
use crate::config::McrConfig;
use crate::errors::McrResult;

pub trait TableProvider {
    /// The table the user is currently working on.
    fn current_table(&self) -> McrResult<Table>;
}

pub trait HistorySink {
    fn add_to_history(&mut self, label: &str, table: Table) -> McrResult<()>;
}

///
/// Reduce the host's current table and hand the result back to its history.
///
/// Nothing reaches the sink if reading or parsing the input fails.
///
pub fn run_with_host<P, H>(provider: &P, sink: &mut H, config: &McrConfig) -> McrResult<()>
where
    P: TableProvider + ?Sized,
    H: HistorySink + ?Sized,
{
    let input = provider.current_table()?;
    let target = config.overlap_target();

    log::info!("Computing minimal common regions ({} overlap target)", target);
    let result = reduce(&input, target)?;

    sink.add_to_history(config.label(), result)
}
