use crate::error::{ActdocsError, ActdocsResult};
use std::fs;
use std::path::Path;

/// Read a whole UTF-8 file into memory; the handle is closed on return.
pub fn read_text(path: &Path) -> ActdocsResult<String> {
    let text = fs::read_to_string(path).map_err(|source| ActdocsError::Io {
        op: "read",
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read file");
    Ok(text)
}

pub fn write_text(path: &Path, text: &str) -> ActdocsResult<()> {
    fs::write(path, text.as_bytes()).map_err(|source| ActdocsError::Io {
        op: "write",
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote file");
    Ok(())
}
