//! File helpers that attach the offending path to I/O errors.
//!
//! Output files are overwritten wholesale on each run.

use std::fs;
use std::path::Path;

use tracing::info;

use super::error::{Error, Result};

/// Read a whole UTF-8 file.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Create or truncate `path` and write `contents` to it.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}
