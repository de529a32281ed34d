//! `catalog` command and catalog file loading.

use std::io::{BufReader, Write};

use camino::Utf8Path;
use sommelier_core::{Wine, seed_catalog};

use crate::fs::open_utf8_file;
use crate::{CliError, write_json};

pub(crate) fn run_catalog_with(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &seed_catalog())
}

/// Loads a JSON array of wines from disk.
///
/// Entries are decoded as-is; validation happens when they are recommended.
pub(crate) fn load_catalog(path: &Utf8Path) -> Result<Vec<Wine>, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let wines: Vec<Wine> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} wines from {path}", wines.len());
    Ok(wines)
}
