//! Common file system operations with unified error handling

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::{Result, remove_failed, rename_failed};

/// Attempts made by [`rename_with_retry`]
const RENAME_ATTEMPTS: u32 = 5;

/// Delay between rename attempts
const RENAME_DELAY: Duration = Duration::from_millis(100);

/// Remove a directory tree; a missing directory is not an error
pub fn remove_dir_all_if_exists(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(remove_failed(path, e)),
    }
}

/// Remove a file; a missing file is not an error
pub fn remove_file_if_exists(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(remove_failed(path, e)),
    }
}

/// Best-effort removal that only logs failures
pub fn remove_quietly(path: &Path) {
    let result = if path.is_dir() {
        remove_dir_all_if_exists(path)
    } else {
        remove_file_if_exists(path)
    };
    if let Err(e) = result {
        tracing::warn!("{}", e);
    }
}

/// Rename `from` to `to`, retrying transient failures such as sharing
/// violations from virus scanners or indexers holding a handle.
pub fn rename_with_retry(from: &Path, to: &Path) -> Result<()> {
    let mut attempt = 1;
    loop {
        match fs::rename(from, to) {
            Ok(()) => return Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound || attempt >= RENAME_ATTEMPTS => {
                return Err(rename_failed(from, to, e));
            }
            Err(e) => {
                tracing::debug!(
                    "Rename {} -> {} failed (attempt {}): {}",
                    from.display(),
                    to.display(),
                    attempt,
                    e
                );
                thread::sleep(RENAME_DELAY);
                attempt += 1;
            }
        }
    }
}
