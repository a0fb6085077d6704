use thiserror::Error;

#[derive(Error, Debug)]
pub enum McrCoreError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Malformed cell at row {row}, column {column}: {value:?} is not a valid coordinate")]
    MalformedCell {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Row {0} is out of bounds")]
    RowOutOfBounds(usize),

    #[error("Row {row} has {found} columns, column {column} is required")]
    MissingColumn {
        row: usize,
        column: usize,
        found: usize,
    },

    #[error("Error parsing region: {0}")]
    RegionParseError(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type McrCoreResult<T> = std::result::Result<T, McrCoreError>;
