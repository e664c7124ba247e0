use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Result, RewriteError};

/// Split a line into its content and its terminator (`\r\n`, `\n` or none).
pub(crate) fn split_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

pub(crate) fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RewriteError::read(path, source))
}

/// Replace the file through a sibling temp file.
pub(crate) fn write(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp =
        tempfile::NamedTempFile::new_in(dir).map_err(|source| RewriteError::write(path, source))?;
    temp.write_all(content.as_bytes())
        .map_err(|source| RewriteError::write(path, source))?;
    temp.persist(path)
        .map_err(|err| RewriteError::write(path, err.error))?;
    Ok(())
}
