//! Where the standalone bundle comes from and where it is staged

use std::path::{Path, PathBuf};

use crate::config::BuildStamp;

/// Release download location of the standalone bundle
const RELEASES_URL: &str = "https://github.com/microsoft/vcpkg-tool/releases";

/// Asset name of the standalone bundle on a release
const BUNDLE_ASSET: &str = "vcpkg-standalone-bundle.tar.gz";

/// A bundle archive for one provisioning attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleArtifact {
    /// Where the archive is downloaded from
    pub uri: String,
    /// Where the archive is staged locally
    pub staging_path: PathBuf,
    /// Expected lowercase hex SHA-512, if pinned
    pub sha512: Option<String>,
}

impl BundleArtifact {
    /// The bundle matching `stamp`, staged in `downloads`.
    ///
    /// Version-stamped builds pin the release matching their version; other
    /// builds follow the latest release. `uri_override` replaces the URI.
    pub fn for_stamp(stamp: &BuildStamp, downloads: &Path, uri_override: Option<&str>) -> Self {
        let (uri, file_name) = match &stamp.bundle_sha512 {
            Some(_) => (
                format!("{RELEASES_URL}/download/{}/{BUNDLE_ASSET}", stamp.version),
                format!("vcpkg-standalone-bundle-{}.tar.gz", stamp.version),
            ),
            None => (
                format!("{RELEASES_URL}/latest/download/{BUNDLE_ASSET}"),
                "vcpkg-standalone-bundle-latest.tar.gz".to_string(),
            ),
        };

        Self {
            uri: uri_override.map_or(uri, str::to_string),
            staging_path: downloads.join(file_name),
            sha512: stamp.bundle_sha512.clone(),
        }
    }

    pub fn file_name(&self) -> String {
        self.staging_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
