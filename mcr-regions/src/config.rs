use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use mcr_core::models::TableFormat;
use mcr_core::utils::parse_delimiter;

use crate::errors::McrConfigError;
use crate::reduce::OverlapTarget;

pub const DEFAULT_LABEL: &str = "MCR";

///
/// Run settings, usually read from a TOML file. Every field is optional;
/// unset fields fall back to the defaults below.
///
/// ```toml
/// overlap_target = "neighbor"   # or "seed"
/// delimiter = "tab"             # single character, `tab` or `comma`
/// has_header = true
/// label = "MCR"
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
pub struct McrConfig {
    pub overlap_target: Option<OverlapTarget>,
    pub delimiter: Option<String>,
    pub has_header: Option<bool>,
    pub label: Option<String>,
}

pub type McrConfigResult<T> = std::result::Result<T, McrConfigError>;

impl TryFrom<&Path> for McrConfig {
    type Error = McrConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}

impl McrConfig {
    pub fn overlap_target(&self) -> OverlapTarget {
        self.overlap_target.unwrap_or_default()
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(DEFAULT_LABEL)
    }

    ///
    /// Layout of the input and output tables.
    ///
    pub fn table_format(&self) -> McrConfigResult<TableFormat> {
        let mut format = TableFormat::default();

        if let Some(delimiter) = self.delimiter.as_deref() {
            format.delimiter = parse_delimiter(delimiter)
                .ok_or_else(|| McrConfigError::InvalidDelimiter(delimiter.to_string()))?;
        }
        if let Some(has_header) = self.has_header {
            format.has_header = has_header;
        }

        Ok(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use std::path::PathBuf;

    #[rstest]
    fn test_try_from_toml() {
        let path = PathBuf::from("../tests/data/mcr/mcr.toml");
        let config = McrConfig::try_from(path.as_path()).unwrap();

        assert_eq!(config.overlap_target(), OverlapTarget::Seed);
        assert_eq!(config.label(), "MCR (legacy)");
        assert_eq!(
            config.table_format().unwrap(),
            TableFormat {
                delimiter: b',',
                has_header: false
            }
        );
    }

    #[rstest]
    fn test_defaults() {
        let config = McrConfig::default();

        assert_eq!(config.overlap_target(), OverlapTarget::Neighbor);
        assert_eq!(config.label(), DEFAULT_LABEL);
        assert_eq!(config.table_format().unwrap(), TableFormat::default());
    }

    #[rstest]
    fn test_invalid_delimiter() {
        let config: McrConfig = toml::from_str("delimiter = \"||\"").unwrap();
        assert!(matches!(
            config.table_format(),
            Err(McrConfigError::InvalidDelimiter(_))
        ));
    }

    #[rstest]
    fn test_unknown_overlap_target_is_rejected() {
        let result = toml::from_str::<McrConfig>("overlap_target = \"nearest\"");
        assert!(result.is_err());
    }

    #[rstest]
    fn test_missing_file() {
        let path = PathBuf::from("../tests/data/mcr/missing.toml");
        let result = McrConfig::try_from(path.as_path());
        assert!(matches!(result, Err(McrConfigError::Io(_))));
    }
}
