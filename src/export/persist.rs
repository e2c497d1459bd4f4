use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::ExportError;

/// Write `content` to `path` through a temp file in the same directory.
///
/// The target either receives the full content or is left untouched.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<PathBuf, ExportError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ExportError::io(path, e))?;
    tmp.write_all(content).map_err(|e| ExportError::io(path, e))?;
    tmp.flush().map_err(|e| ExportError::io(path, e))?;
    tmp.as_file_mut()
        .sync_all()
        .map_err(|e| ExportError::io(path, e))?;

    // Temp files are created owner-only; exports are plain 0644 files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| ExportError::io(path, e))?;
    }

    tmp.persist(path).map_err(|e| ExportError::io(path, e.error))?;
    Ok(path.to_path_buf())
}
