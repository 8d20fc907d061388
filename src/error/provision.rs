//! Provisioning errors

use std::path::Path;

use super::LauncherError;

/// Creates a download failed error
pub fn download_failed(url: impl Into<String>, reason: impl ToString) -> LauncherError {
    LauncherError::DownloadFailed {
        url: url.into(),
        reason: reason.to_string(),
    }
}

/// Creates an integrity mismatch error
pub fn integrity_mismatch(
    path: impl AsRef<Path>,
    expected: impl Into<String>,
    actual: impl Into<String>,
) -> LauncherError {
    LauncherError::IntegrityMismatch {
        path: path.as_ref().display().to_string(),
        expected: expected.into(),
        actual: actual.into(),
    }
}

/// Creates an extraction failed error
pub fn extraction_failed(archive: &Path, reason: impl ToString) -> LauncherError {
    LauncherError::ExtractionFailed {
        archive: archive.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a bundle layout error for an archive missing the expected subtree
pub fn layout_invalid(archive: &Path, subtree: impl Into<String>) -> LauncherError {
    LauncherError::BundleLayoutInvalid {
        archive: archive.display().to_string(),
        subtree: subtree.into(),
    }
}

/// Creates a bootstrap failed error
pub fn bootstrap_failed(entry_point: impl AsRef<Path>) -> LauncherError {
    LauncherError::ArtifactsBootstrapFailed {
        entry_point: entry_point.as_ref().display().to_string(),
    }
}
