use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};

#[cfg(feature = "dataframe")]
use polars::prelude::*;

use crate::errors::{McrCoreError, McrCoreResult};
use crate::utils::get_dynamic_reader;

///
/// A single table value. Cells read from text files are always `Text`;
/// typed access goes through [`TableSource::int`].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Int(i64),
}

impl Cell {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(value) => Some(*value),
            Cell::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Int(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

///
/// Read access to a table by row and column index.
///
/// This is the only view of the input the reduction needs, so any tabular
/// host structure can feed it by implementing these three methods.
///
pub trait TableSource {
    fn n_rows(&self) -> usize;

    fn text(&self, row: usize, column: usize) -> McrCoreResult<String>;

    fn int(&self, row: usize, column: usize) -> McrCoreResult<i64>;
}

///
/// Delimited text layout for reading and writing a [Table].
///
#[derive(Debug, Clone, PartialEq)]
pub struct TableFormat {
    pub delimiter: u8,
    pub has_header: bool,
}

impl Default for TableFormat {
    fn default() -> Self {
        TableFormat {
            delimiter: b'\t',
            has_header: true,
        }
    }
}

///
/// Named columns over rows of cells. Rows may be ragged.
///
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: AsRef<str>>(columns: &[S]) -> Self {
        Table {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn required_cell(&self, row: usize, column: usize) -> McrCoreResult<&Cell> {
        let cells = self
            .rows
            .get(row)
            .ok_or(McrCoreError::RowOutOfBounds(row))?;

        cells.get(column).ok_or(McrCoreError::MissingColumn {
            row,
            column,
            found: cells.len(),
        })
    }

    ///
    /// Read a delimited table from any reader.
    ///
    /// Without a header row, columns are named `V1`, `V2`, ... up to the
    /// widest row.
    ///
    pub fn from_reader<R: Read>(reader: R, format: &TableFormat) -> McrCoreResult<Table> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(format.delimiter)
            .has_headers(format.has_header)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let mut columns: Vec<String> = match format.has_header {
            true => csv_reader.headers()?.iter().map(String::from).collect(),
            false => Vec::new(),
        };

        let mut rows: Vec<Vec<Cell>> = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(Cell::from).collect());
        }

        if !format.has_header {
            let width = rows.iter().map(Vec::len).max().unwrap_or(0);
            columns = (1..=width).map(|i| format!("V{}", i)).collect();
        }

        Ok(Table { columns, rows })
    }

    ///
    /// Read a delimited table from disk. Files ending in `.gz` are
    /// decompressed on the fly.
    ///
    pub fn from_path<P: AsRef<Path>>(path: P, format: &TableFormat) -> McrCoreResult<Table> {
        let reader = get_dynamic_reader(path.as_ref())?;
        Table::from_reader(reader, format)
    }

    ///
    /// Write the table as delimited text.
    ///
    pub fn write_to<W: Write>(&self, writer: W, format: &TableFormat) -> McrCoreResult<()> {
        let mut csv_writer = WriterBuilder::new()
            .delimiter(format.delimiter)
            .flexible(true)
            .from_writer(writer);

        if format.has_header {
            csv_writer.write_record(&self.columns)?;
        }

        for row in &self.rows {
            csv_writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    ///
    /// Save the table to disk, creating parent directories as needed.
    ///
    pub fn to_file<P: AsRef<Path>>(&self, path: P, format: &TableFormat) -> McrCoreResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_to(BufWriter::new(file), format)
    }

    ///
    /// Create Polars DataFrame. Columns holding only integers become `i64`
    /// columns, everything else is text.
    ///
    #[cfg(feature = "dataframe")]
    pub fn to_polars(&self) -> PolarsResult<DataFrame> {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let cells: Vec<Option<&Cell>> =
                    self.rows.iter().map(|row| row.get(idx)).collect();

                let all_ints = cells.iter().all(|c| matches!(c, Some(Cell::Int(_))));
                let series = if all_ints {
                    let values: Vec<i64> = cells
                        .iter()
                        .filter_map(|&c| c.and_then(Cell::as_int))
                        .collect();
                    Series::new(name.as_str().into(), values)
                } else {
                    let values: Vec<Option<String>> = cells
                        .iter()
                        .map(|&c| c.map(|cell| cell.to_string()))
                        .collect();
                    Series::new(name.as_str().into(), values)
                };
                Column::from(series)
            })
            .collect();

        DataFrame::new(columns)
    }
}

impl TableSource for Table {
    fn n_rows(&self) -> usize {
        self.rows.len()
    }

    fn text(&self, row: usize, column: usize) -> McrCoreResult<String> {
        Ok(self.required_cell(row, column)?.to_string())
    }

    fn int(&self, row: usize, column: usize) -> McrCoreResult<i64> {
        let cell = self.required_cell(row, column)?;
        cell.as_int().ok_or_else(|| McrCoreError::MalformedCell {
            row,
            column,
            value: cell.to_string(),
        })
    }
}
