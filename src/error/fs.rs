//! File system errors

use std::path::Path;

use super::LauncherError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> LauncherError {
    LauncherError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> LauncherError {
    LauncherError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a remove failed error
pub fn remove_failed(path: &Path, reason: impl ToString) -> LauncherError {
    LauncherError::RemoveFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a rename failed error
pub fn rename_failed(
    from: impl AsRef<Path>,
    to: impl AsRef<Path>,
    reason: impl ToString,
) -> LauncherError {
    LauncherError::RenameFailed {
        from: from.as_ref().display().to_string(),
        to: to.as_ref().display().to_string(),
        reason: reason.to_string(),
    }
}
