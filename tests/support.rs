#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};

use tempfile::TempDir;

static TEST_MUTEX: Mutex<()> = Mutex::new(());
static TEST_HOME: OnceLock<TempDir> = OnceLock::new();

/// Serializes tests that redirect HOME.
pub fn lock_test_mutex() -> MutexGuard<'static, ()> {
    TEST_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Points HOME/USERPROFILE at a process-wide temp dir and returns its path.
pub fn ensure_test_home() -> PathBuf {
    let dir = TEST_HOME.get_or_init(|| TempDir::new().expect("create test home"));
    let path = dir.path().to_path_buf();
    std::env::set_var("HOME", &path);
    std::env::set_var("USERPROFILE", &path);
    path
}

/// Clears the contents of the test home, keeping the directory itself.
pub fn reset_test_fs() {
    let Some(dir) = TEST_HOME.get() else {
        return;
    };
    if let Ok(entries) = fs::read_dir(dir.path()) {
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            let _ = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
        }
    }
}

/// Creates a fresh temporary project directory.
pub fn temp_project() -> TempDir {
    TempDir::new().expect("create temp project dir")
}
