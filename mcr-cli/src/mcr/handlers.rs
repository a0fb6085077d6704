use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use mcr_core::models::{Table, TableFormat, TableSource};
use mcr_regions::{HistorySink, McrConfig, McrResult, TableProvider, run_with_host};

/// Reads the input table from disk.
struct FileTableProvider {
    path: PathBuf,
    format: TableFormat,
}

impl TableProvider for FileTableProvider {
    fn current_table(&self) -> McrResult<Table> {
        let table = Table::from_path(&self.path, &self.format)?;
        log::info!("Loaded {} rows from {}", table.n_rows(), self.path.display());
        Ok(table)
    }
}

/// Writes the result to a file, or to stdout when no path is given.
struct DelimitedHistorySink {
    output: Option<PathBuf>,
    format: TableFormat,
}

impl HistorySink for DelimitedHistorySink {
    fn add_to_history(&mut self, label: &str, table: Table) -> McrResult<()> {
        match &self.output {
            Some(path) => {
                table.to_file(path, &self.format)?;
                log::info!(
                    "{}: {} regions written to {}",
                    label,
                    table.n_rows(),
                    path.display()
                );
            }
            None => {
                let stdout = io::stdout();
                table.write_to(stdout.lock(), &self.format)?;
                log::info!("{}: {} regions", label, table.n_rows());
            }
        }
        Ok(())
    }
}

pub fn run_mcr(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("--input is required");

    let config = load_config(matches)?;
    let input_format = config.table_format()?;

    // results always carry their column names
    let output_format = TableFormat {
        has_header: true,
        ..input_format.clone()
    };

    let provider = FileTableProvider {
        path: PathBuf::from(input),
        format: input_format,
    };
    let mut sink = DelimitedHistorySink {
        output: matches.get_one::<String>("output").map(PathBuf::from),
        format: output_format,
    };

    run_with_host(&provider, &mut sink, &config)
        .with_context(|| format!("Failed to compute minimal common regions for {}", input))?;

    Ok(())
}

///
/// Load the config file if one was given, then apply command line overrides.
///
fn load_config(matches: &ArgMatches) -> Result<McrConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => McrConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => McrConfig::default(),
    };

    if let Some(delimiter) = matches.get_one::<String>("delimiter") {
        config.delimiter = Some(delimiter.clone());
    }
    if matches.get_flag("no-header") {
        config.has_header = Some(false);
    }
    if let Some(target) = matches.get_one::<String>("overlap-target") {
        config.overlap_target = Some(target.parse()?);
    }
    if let Some(label) = matches.get_one::<String>("label") {
        config.label = Some(label.clone());
    }

    Ok(config)
}
