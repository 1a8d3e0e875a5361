use crate::storage::Storage;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Runs a test from inside `dir`; the previous working directory comes back on drop.
pub(crate) struct DirGuard {
    previous: PathBuf,
    _cwd: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(dir: &Path) -> Self {
        // Config discovery reads the process-wide cwd.
        let cwd = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let previous = std::env::current_dir().expect("current dir should be readable");
        std::env::set_current_dir(dir).expect("test dir should be enterable");
        Self {
            previous,
            _cwd: cwd,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// A store whose file (and parent directory) does not exist yet.
pub(crate) fn scratch_store() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().expect("temp dir");
    let storage = Storage::new(temp_dir.path().join("data").join("tasks.jsonl"));
    (temp_dir, storage)
}
