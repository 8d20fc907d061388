//! Test fixtures shared by unit tests.
//!
//! Bundle archives are built on the fly with `tar` and `flate2`, and the
//! download and process seams have in-memory fakes so provisioning and
//! launching can be exercised without network access or a Node.js install.
//!
//! ```ignore
//! use crate::test_fixtures::{create_temp_dir, write_bundle_archive};
//!
//! let temp = create_temp_dir();
//! let archive = temp.path().join("bundle.tar.gz");
//! write_bundle_archive(&archive, &[("vcpkg-artifacts/main.js", "")]);
//! ```

use std::cell::{Cell, RefCell};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

use crate::error::{Result, download_failed};
use crate::invoke::{DelegateInvocation, ProcessRunner};
use crate::provision::Downloader;

/// Create a temp directory in the system temp location.
///
/// Uses `crate::temp::temp_dir_base()` to ensure temp dirs are never
/// created under the current working directory.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Write a `.tar.gz` archive holding `entries` as (path, content) files.
///
/// # Panics
///
/// Panics if the archive cannot be written.
pub fn write_bundle_archive(path: &Path, entries: &[(&str, &str)]) {
    let file = File::create(path).expect("Failed to create archive");
    let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
    for (name, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, name, content.as_bytes())
            .expect("Failed to append archive entry");
    }
    builder
        .into_inner()
        .and_then(GzEncoder::finish)
        .expect("Failed to finish archive");
}

/// Lay out an installed artifacts directory with the given files.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_install(install_dir: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = install_dir.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&full_path, content).expect("Failed to write install file");
    }
}

/// Downloader that copies a fixture archive and counts calls
pub struct FixtureDownloader {
    source: PathBuf,
    calls: Cell<usize>,
}

impl FixtureDownloader {
    pub fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Downloader for FixtureDownloader {
    fn download(&self, uri: &str, destination: &Path) -> Result<()> {
        self.calls.set(self.calls.get() + 1);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| download_failed(uri, e))?;
        }
        fs::copy(&self.source, destination).map_err(|e| download_failed(uri, e))?;
        Ok(())
    }
}

/// Downloader that always fails
pub struct FailingDownloader;

impl Downloader for FailingDownloader {
    fn download(&self, uri: &str, _destination: &Path) -> Result<()> {
        Err(download_failed(uri, "connection refused"))
    }
}

/// Process runner that records invocations and returns a canned exit code,
/// optionally writing a telemetry file first
pub struct RecordingRunner {
    exit_code: i64,
    telemetry: Option<String>,
    invocations: RefCell<Vec<DelegateInvocation>>,
}

impl RecordingRunner {
    pub fn new(exit_code: i64) -> Self {
        Self {
            exit_code,
            telemetry: None,
            invocations: RefCell::new(Vec::new()),
        }
    }

    pub fn with_telemetry(mut self, content: &str) -> Self {
        self.telemetry = Some(content.to_string());
        self
    }

    pub fn invocations(&self) -> Vec<DelegateInvocation> {
        self.invocations.borrow().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &DelegateInvocation) -> Result<i64> {
        if let (Some(content), Some(path)) = (&self.telemetry, &invocation.telemetry_file) {
            fs::write(path, content).expect("Failed to write telemetry");
        }
        self.invocations.borrow_mut().push(invocation.clone());
        Ok(self.exit_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_write_bundle_archive() {
        let temp = create_temp_dir();
        let archive = temp.path().join("b.tar.gz");
        write_bundle_archive(&archive, &[("a/b.txt", "x")]);

        let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(File::open(&archive).unwrap()));
        let names: Vec<String> = tar
            .entries()
            .unwrap()
            .map(|e| e.unwrap().path().unwrap().display().to_string())
            .collect();
        assert_eq!(names, vec!["a/b.txt"]);
    }

    #[test]
    fn test_create_install() {
        let temp = create_temp_dir();
        create_install(temp.path(), &[("lib/x.js", "x")]);
        assert!(temp.path().join("lib/x.js").exists());
    }
}
