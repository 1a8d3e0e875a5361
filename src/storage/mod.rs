//! Persistence of the task list between sessions.
//!
//! Tasks are stored as newline-delimited JSON, one [`record`] per line, in
//! list order. Loading is tolerant: blank lines and `//` comments are
//! skipped, and every other line is decoded on its own, so a corrupted
//! line costs exactly that one task. Saving rewrites the whole file
//! atomically.

pub mod record;

#[cfg(test)]
mod tests;

use crate::error::{JotterError, Result};
use crate::fs::{atomic_write_file, ensure_file};
use crate::task::{Task, TaskKind, check_schedule};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Prefix of lines ignored by the loader.
pub const COMMENT_PREFIX: &str = "//";

/// A line the loader had to drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based line number in the data file.
    pub line: usize,
    pub reason: String,
}

/// Outcome of [`Storage::load`].
#[derive(Debug, Default)]
pub struct LoadReport {
    pub tasks: Vec<Task>,
    pub skipped: Vec<SkippedRecord>,
}

/// Reads and writes the task file at a fixed path.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all readable tasks.
    ///
    /// A missing file is created empty (along with its parent directories)
    /// and yields an empty list. Only failing to create or read the file is
    /// an error; bad lines end up in [`LoadReport::skipped`].
    pub fn load(&self) -> Result<LoadReport> {
        if ensure_file(&self.path)? {
            info!("created empty data file at {}", self.path.display());
            return Ok(LoadReport::default());
        }

        let bytes = std::fs::read(&self.path).map_err(|e| {
            JotterError::Storage(format!(
                "failed to read data file '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let report = parse_lines(&bytes);
        for skipped in &report.skipped {
            warn!(
                "{}:{}: skipping record: {}",
                self.path.display(),
                skipped.line,
                skipped.reason
            );
        }
        debug!(
            "loaded {} task(s) from {}",
            report.tasks.len(),
            self.path.display()
        );
        Ok(report)
    }

    /// Replace the file contents with `tasks`, in order.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        let mut content = String::new();
        for task in tasks {
            let line = record::encode_line(task)
                .map_err(|e| JotterError::Storage(format!("failed to serialize task: {}", e)))?;
            content.push_str(&line);
            content.push('\n');
        }

        atomic_write_file(&self.path, &content)?;
        debug!("saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}

/// Decode every line independently, collecting tasks and skips.
pub fn parse_lines(bytes: &[u8]) -> LoadReport {
    let mut report = LoadReport::default();

    for (i, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        let line_no = i + 1;
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(_) => {
                report.skipped.push(SkippedRecord {
                    line: line_no,
                    reason: "line is not valid UTF-8".to_string(),
                });
                continue;
            }
        };

        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        match record::decode_line(line) {
            Ok(task) => {
                if let TaskKind::Event { from, to } = task.kind()
                    && let Err(e) = check_schedule(from, to)
                {
                    warn!(
                        "line {}: keeping event with inverted window: {}",
                        line_no, e
                    );
                }
                report.tasks.push(task);
            }
            Err(e) => report.skipped.push(SkippedRecord {
                line: line_no,
                reason: e.to_string(),
            }),
        }
    }

    report
}
