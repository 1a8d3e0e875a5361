//! Atomic file replacement.
//!
//! Every write follows the same steps:
//! 1. Write the content to `.{filename}.tmp` in the target's directory
//! 2. fsync the temporary file
//! 3. Rename it over the target
//!
//! The rename is atomic when source and target share a filesystem, which
//! holds because the temporary file sits next to the target. On a crash a
//! stale `.{filename}.tmp` may remain; the next save overwrites it.

use crate::error::{JotterError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    create_parent_dirs(path)?;

    let temp_path = generate_temp_path(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        JotterError::Storage(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    // Persist the directory entry too.
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Make sure `path` exists, creating an empty file and its parent
/// directories if needed. Returns true if the file had to be created.
pub fn ensure_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(false);
    }

    create_parent_dirs(path)?;
    File::create(path).map_err(|e| {
        JotterError::Storage(format!(
            "failed to create data file '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(true)
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            JotterError::Storage(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Temporary path in the same directory as the target: `.{filename}.tmp`.
fn generate_temp_path(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            JotterError::Storage(format!("invalid data file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        JotterError::Storage(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|_| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            JotterError::Storage(format!("failed to write temporary file: {}", e))
        })
}
