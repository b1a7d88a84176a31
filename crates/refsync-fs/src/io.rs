//! Text I/O, atomic writes with file locking, and directory listing

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file with locking.
///
/// Uses a write-to-temp-then-rename strategy so readers never observe a
/// partially written file. An existing target is resolved through symlinks
/// first, so the link stays in place and its destination receives the new
/// content; the destination's permissions are copied onto the replacement.
/// The temp file lives next to the resolved target so the rename stays on
/// one filesystem.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    let (target, permissions) = match fs::metadata(&native_path) {
        Ok(metadata) => {
            let target =
                dunce::canonicalize(&native_path).map_err(|e| Error::io(&native_path, e))?;
            (target, Some(metadata.permissions()))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => (native_path.clone(), None),
        Err(e) => return Err(Error::io(&native_path, e)),
    };

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        target
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = target.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    let discard = |err: Error| {
        let _ = fs::remove_file(&temp_path);
        err
    };

    temp_file.lock_exclusive().map_err(|_| {
        discard(Error::LockFailed {
            path: target.clone(),
        })
    })?;

    temp_file
        .write_all(content)
        .and_then(|()| temp_file.sync_all())
        .map_err(|e| discard(Error::io(&temp_path, e)))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| discard(Error::io(&temp_path, e)))?;
    }

    temp_file.unlock().map_err(|_| {
        discard(Error::LockFailed {
            path: target.clone(),
        })
    })?;
    drop(temp_file);

    fs::rename(&temp_path, &target).map_err(|e| discard(Error::io(&target, e)))?;

    tracing::debug!(
        path = %path,
        target = %target.display(),
        bytes = content.len(),
        "wrote file atomically"
    );
    Ok(())
}

/// Read a UTF-8 text file in full.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Replace a text file's content atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// List the entry names of a directory, one level deep.
///
/// Names are returned in the order the OS yields them. Entries whose names
/// are not valid UTF-8 are skipped with a warning.
pub fn list_dir(path: &NormalizedPath) -> Result<Vec<String>> {
    let native_path = path.to_native();
    let entries = fs::read_dir(&native_path).map_err(|e| Error::io(&native_path, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(&native_path, e))?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => {
                tracing::warn!(dir = %path, name = ?raw, "skipping non UTF-8 directory entry");
            }
        }
    }
    Ok(names)
}
