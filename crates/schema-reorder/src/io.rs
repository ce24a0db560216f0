use std::fs;
use std::io::Write as _;
use std::path::Path;

use serde_json::Value;

use crate::diagnostics::{ParseDiagnostic, ReorderError};

/// Read and parse the schema at `path`.
///
/// # Errors
///
/// Returns [`ReorderError::Read`] if the file cannot be read and
/// [`ReorderError::Parse`] if it is not valid JSON.
pub fn load(path: &Path) -> Result<Value, ReorderError> {
    let content = fs::read_to_string(path).map_err(|source| ReorderError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = serde_json::from_str(&content)
        .map_err(|e| ParseDiagnostic::new(&path.display().to_string(), &content, &e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded schema");
    Ok(doc)
}

/// Serialize the whole document with two-space indentation and a trailing
/// newline.
///
/// # Errors
///
/// Returns [`ReorderError::Serialize`] if serialization fails.
pub fn render(doc: &Value) -> Result<String, ReorderError> {
    let json = serde_json::to_string_pretty(doc).map_err(ReorderError::Serialize)?;
    Ok(format!("{json}\n"))
}

/// Replace the file at `path` with `contents`.
///
/// The contents go to a temporary file in the same directory which is then
/// renamed over `path`, so a failed write leaves the original in place.
///
/// # Errors
///
/// Returns [`ReorderError::Write`] if the temporary file cannot be created,
/// written, or renamed.
pub fn persist(path: &Path, contents: &str) -> Result<(), ReorderError> {
    let write_err = |source: std::io::Error| ReorderError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Write through symlinks instead of replacing them.
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    // Temporary files are created owner-only; keep the schema's own mode.
    if let Ok(meta) = fs::metadata(&target) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_err)?;
    }
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(&target).map_err(|e| write_err(e.error))?;

    tracing::debug!(path = %target.display(), bytes = contents.len(), "wrote schema");
    Ok(())
}
