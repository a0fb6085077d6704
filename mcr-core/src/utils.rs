use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::{McrCoreError, McrCoreResult};

///
/// Get a reader for either a gzip'd or non-gzip'd file.
///
/// # Arguments
///
/// - path: path to the file to read
///
pub fn get_dynamic_reader(path: &Path) -> McrCoreResult<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path)
        .map_err(|e| McrCoreError::FileReadError(format!("{}: {}", path.display(), e)))?;
    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    log::debug!("Opened {} (gzipped: {})", path.display(), is_gzipped);

    Ok(BufReader::new(file))
}

///
/// Parse a single-character delimiter given on the command line or in a
/// config file. `\t` and `tab` are accepted for tab.
///
pub fn parse_delimiter(value: &str) -> Option<u8> {
    match value {
        "\\t" | "tab" | "\t" => Some(b'\t'),
        "comma" => Some(b','),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Some(c as u8),
                _ => None,
            }
        }
    }
}
