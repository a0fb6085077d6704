use mcr_core::McrCoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum McrConfigError {
    #[error("Invalid delimiter in config: {0:?}. Use a single character, `tab` or `comma`")]
    InvalidDelimiter(String),
    #[error("Invalid overlap target: {0:?}. Valid options are 'neighbor' or 'seed'")]
    InvalidOverlapTarget(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum McrError {
    #[error(transparent)]
    Core(#[from] McrCoreError),
    #[error(transparent)]
    Config(#[from] McrConfigError),
}

pub type McrResult<T> = std::result::Result<T, McrError>;
