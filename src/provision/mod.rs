//! Provisioning of the artifacts subsystem
//!
//! A fresh copy is installed by:
//!
//! 1. downloading the standalone bundle into the downloads directory,
//! 2. extracting it into a process-unique sibling of the install directory,
//! 3. removing the existing install directory,
//! 4. renaming the `vcpkg-artifacts` subtree into place,
//! 5. removing the temporary directory and the archive,
//! 6. writing the version marker.
//!
//! Any failure before step 3 leaves the existing install untouched. Two
//! launchers provisioning the same install concurrently are not serialized:
//! a reader can observe the window between steps 3 and 4, and the later
//! rename wins. Unique temporary names keep their extractions apart.

pub mod bundle;
pub mod download;
pub mod extract;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::common::fs::{
    remove_dir_all_if_exists, remove_file_if_exists, remove_quietly, rename_with_retry,
};
use crate::config::BuildStamp;
use crate::config::paths::{ARTIFACTS_DIR, ENTRY_POINT, VERSION_MARKER};
use crate::error::{
    Result, bootstrap_failed, download_failed, file_write_failed, integrity_mismatch,
    layout_invalid,
};
use crate::hash;
use crate::temp::UniqueNames;

pub use bundle::BundleArtifact;
pub use download::{Downloader, HttpDownloader};
pub use extract::{Extractor, TarGzExtractor};

/// Downloads and installs the artifacts subsystem
pub struct BundleProvisioner<'a> {
    downloader: &'a dyn Downloader,
    extractor: &'a dyn Extractor,
    names: &'a dyn UniqueNames,
}

impl<'a> BundleProvisioner<'a> {
    pub fn new(
        downloader: &'a dyn Downloader,
        extractor: &'a dyn Extractor,
        names: &'a dyn UniqueNames,
    ) -> Self {
        Self {
            downloader,
            extractor,
            names,
        }
    }

    /// Replace whatever is at `install_dir` with the contents of `artifact`
    pub fn provision(
        &self,
        artifact: &BundleArtifact,
        install_dir: &Path,
        stamp: &BuildStamp,
    ) -> Result<()> {
        self.fetch(artifact)?;

        let mut staging = Staging {
            archive: artifact.staging_path.clone(),
            temp_dir: self.temp_dir_for(install_dir),
            cleaned: false,
        };
        self.extractor
            .extract(&artifact.staging_path, &staging.temp_dir)?;

        let subtree = staging.temp_dir.join(ARTIFACTS_DIR);
        if !subtree.is_dir() {
            return Err(layout_invalid(&artifact.staging_path, ARTIFACTS_DIR));
        }

        remove_dir_all_if_exists(install_dir)?;
        rename_with_retry(&subtree, install_dir)?;
        info!("Installed vcpkg-artifacts into {}", install_dir.display());

        staging.cleanup();

        if stamp.is_version_stamped() {
            let marker = install_dir.join(VERSION_MARKER);
            fs::write(&marker, &stamp.version).map_err(|e| file_write_failed(&marker, e))?;
        }

        Ok(())
    }

    /// Ensure `artifact.staging_path` holds the bundle, verifying its hash if pinned
    fn fetch(&self, artifact: &BundleArtifact) -> Result<()> {
        let path = &artifact.staging_path;
        match &artifact.sha512 {
            Some(expected) => {
                if path.is_file() && hash::verify_hash(expected, &hash::hash_file(path)?) {
                    debug!("Reusing staged bundle {}", path.display());
                    return Ok(());
                }
                eprintln!("Downloading vcpkg-artifacts bundle {}...", artifact.file_name());
                self.downloader.download(&artifact.uri, path)?;

                let actual = hash::hash_file(path)?;
                if !hash::verify_hash(expected, &actual) {
                    remove_quietly(path);
                    return Err(integrity_mismatch(path, expected.clone(), actual));
                }
            }
            None => {
                eprintln!(
                    "{} Downloading the latest vcpkg-artifacts bundle; this build is not pinned to a release.",
                    console::style("warning:").yellow().bold()
                );
                remove_file_if_exists(path).map_err(|e| download_failed(&artifact.uri, e))?;
                self.downloader.download(&artifact.uri, path)?;
            }
        }
        Ok(())
    }

    /// `<install dir>.partial.<unique>`, a sibling so the final rename stays on one volume
    fn temp_dir_for(&self, install_dir: &Path) -> PathBuf {
        let name = install_dir
            .file_name()
            .map_or_else(|| ARTIFACTS_DIR.into(), |n| n.to_string_lossy());
        install_dir.with_file_name(format!("{}.partial.{}", name, self.names.unique_name()))
    }
}

/// Fail if the entry point is missing after provisioning
pub fn verify_entry_point(install_dir: &Path) -> Result<PathBuf> {
    let entry_point = install_dir.join(ENTRY_POINT);
    if entry_point.is_file() {
        Ok(entry_point)
    } else {
        Err(bootstrap_failed(entry_point))
    }
}

/// Temporary extraction directory and downloaded archive of one attempt.
/// Removed best-effort on every exit path.
struct Staging {
    archive: PathBuf,
    temp_dir: PathBuf,
    cleaned: bool,
}

impl Staging {
    fn cleanup(&mut self) {
        if !self.cleaned {
            self.cleaned = true;
            remove_quietly(&self.temp_dir);
            remove_quietly(&self.archive);
        }
    }
}

impl Drop for Staging {
    fn drop(&mut self) {
        self.cleanup();
    }
}
