//! Reading import payloads and writing export payloads.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::TransferError;

/// Read an import payload from `source`; `-` reads stdin.
pub fn read_payload(source: &Path) -> Result<String, TransferError> {
    let read_err = |source_err| TransferError::Read {
        path: source.to_path_buf(),
        source: source_err,
    };
    if source == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(read_err)?;
        return Ok(text);
    }
    let text = fs::read_to_string(source).map_err(read_err)?;
    tracing::debug!(path = %source.display(), bytes = text.len(), "read import payload");
    Ok(text)
}

/// Write an export payload to `target`, followed by a newline.
pub fn write_payload(target: &Path, text: &str) -> Result<(), TransferError> {
    fs::write(target, format!("{text}\n")).map_err(|source| TransferError::Write {
        path: target.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %target.display(), "wrote export payload");
    Ok(())
}
