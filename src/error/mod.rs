//! Error types and handling for the launcher
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`args`]: Forwarded argument validation errors
//! - [`provision`]: Download, extraction and install errors
//! - [`fs`]: File system errors
//!
//! Telemetry problems never surface here; they are logged and recovered.

pub mod args;
pub mod fs;
pub mod provision;

pub use fs::{
    read_failed as file_read_failed, remove_failed, rename_failed,
    write_failed as file_write_failed,
};
pub use provision::{
    bootstrap_failed, download_failed, extraction_failed, integrity_mismatch, layout_invalid,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for launcher operations
#[derive(Error, Diagnostic, Debug)]
pub enum LauncherError {
    // Environment errors
    #[error(
        "vcpkg-artifacts is not installed, and it can't be installed because the root at '{root}' is readonly"
    )]
    #[diagnostic(
        code(launcher::environment::readonly_root),
        help("Reinstalling with the one-liner bootstrap script may fix this problem")
    )]
    ArtifactsNotInstalledReadonlyRoot { root: String },

    // Provisioning errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(launcher::provision::download_failed),
        help("Check your network connection or pass --bundle-url to use a local copy")
    )]
    DownloadFailed { url: String, reason: String },

    #[error("File {path} does not have the expected hash: expected {expected}, got {actual}")]
    #[diagnostic(code(launcher::provision::integrity_mismatch))]
    IntegrityMismatch {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Failed to extract {archive}: {reason}")]
    #[diagnostic(code(launcher::provision::extraction_failed))]
    ExtractionFailed { archive: String, reason: String },

    #[error("Bundle {archive} does not contain a '{subtree}' directory")]
    #[diagnostic(code(launcher::provision::layout_invalid))]
    BundleLayoutInvalid { archive: String, subtree: String },

    #[error("vcpkg-artifacts is not installed and could not be bootstrapped: missing {entry_point}")]
    #[diagnostic(
        code(launcher::provision::bootstrap_failed),
        help("Run 'artifacts-launcher provision --force' to reinstall")
    )]
    ArtifactsBootstrapFailed { entry_point: String },

    // Validation errors
    #[error("Only one operating system (--windows, --osx, --linux, --freebsd) may be set")]
    #[diagnostic(code(launcher::args::operating_system))]
    MultipleOperatingSystems,

    #[error("Only one host platform (--x86, --x64, --arm, --arm64) may be set")]
    #[diagnostic(code(launcher::args::host_platform))]
    MultipleHostPlatforms,

    #[error(
        "Only one target platform (--target:x86, --target:x64, --target:arm, --target:arm64) may be set"
    )]
    #[diagnostic(code(launcher::args::target_platform))]
    MultipleTargetPlatforms,

    // Process errors
    #[error("Failed to launch {program}: {reason}")]
    #[diagnostic(
        code(launcher::process::launch_failed),
        help("Make sure node is installed or pass --node <PATH>")
    )]
    ProcessLaunchFailed { program: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(launcher::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(launcher::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(launcher::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(launcher::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(launcher::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to rename {from} to {to}: {reason}")]
    #[diagnostic(code(launcher::fs::rename_failed))]
    RenameFailed {
        from: String,
        to: String,
        reason: String,
    },
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LauncherError>;
