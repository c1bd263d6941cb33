//! Atomic text writes for the catalog file.

use std::io::Write;
use std::path::Path;

use crate::store::error::StoreError;

/// Write text content atomically:
/// - ensure parent directory exists
/// - write to a temp file in the same directory
/// - fsync file + rename into place
pub(crate) fn atomic_write_text(path: &Path, content: &str) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|error| StoreError::io(parent, error))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("catalog.json");
    let temp_path = parent.join(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));

    let written = std::fs::File::create(&temp_path).and_then(|mut temp_file| {
        temp_file.write_all(content.as_bytes())?;
        temp_file.sync_all()
    });
    if let Err(error) = written {
        let _ = std::fs::remove_file(&temp_path);
        return Err(StoreError::io(&temp_path, error));
    }

    if let Err(error) = std::fs::rename(&temp_path, path) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(StoreError::io(path, error));
    }
    Ok(())
}
