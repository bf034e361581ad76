pub mod output;
pub mod walker;

use crate::errors::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Outcome of reading one snippet file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceText {
    Text(String),
    TooLarge { bytes: u64 },
}

/// Read a snippet file, decoding invalid UTF-8 lossily.
///
/// Files above `max_bytes` are reported rather than read.
pub fn read_source(path: &Path, max_bytes: u64) -> Result<SourceText> {
    let metadata = fs::metadata(path).map_err(|e| Error::file_system(path, e))?;
    if metadata.len() > max_bytes {
        return Ok(SourceText::TooLarge {
            bytes: metadata.len(),
        });
    }

    let bytes = fs::read(path).map_err(|e| Error::file_system(path, e))?;
    Ok(SourceText::Text(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Read all of stdin, up to `max_bytes`.
pub fn read_stdin(max_bytes: u64) -> Result<SourceText> {
    let mut bytes = Vec::new();
    // One byte past the cap tells an oversized stream from an exact fit
    std::io::stdin()
        .lock()
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;

    if bytes.len() as u64 > max_bytes {
        return Ok(SourceText::TooLarge {
            bytes: bytes.len() as u64,
        });
    }
    Ok(SourceText::Text(String::from_utf8_lossy(&bytes).into_owned()))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::file_system(path, e))
}
