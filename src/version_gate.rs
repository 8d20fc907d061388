//! Staleness check for the local artifacts install
//!
//! Version-stamped builds compare `version.txt` against their own version;
//! development builds only look for the development sentinel. This never
//! writes anything.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::BuildStamp;
use crate::config::paths::{DEVELOPMENT_SENTINEL, VERSION_MARKER};
use crate::error::{Result, file_read_failed};

/// State of the local artifacts install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallationState {
    /// The install directory does not exist
    Missing,
    /// Installed and matching this build
    Current,
    /// Installed but out of date, or of unknown version
    Stale,
}

impl InstallationState {
    pub fn needs_provisioning(self) -> bool {
        self != InstallationState::Current
    }
}

/// Decide whether the install at `install_dir` is usable by this build
pub fn check_installation(install_dir: &Path, stamp: &BuildStamp) -> Result<InstallationState> {
    if !install_dir.is_dir() {
        return Ok(InstallationState::Missing);
    }

    if !stamp.is_version_stamped() {
        return Ok(if install_dir.join(DEVELOPMENT_SENTINEL).exists() {
            InstallationState::Current
        } else {
            InstallationState::Stale
        });
    }

    let marker = install_dir.join(VERSION_MARKER);
    match fs::read(&marker) {
        Ok(content) if content == stamp.version.as_bytes() => Ok(InstallationState::Current),
        Ok(_) => Ok(InstallationState::Stale),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(InstallationState::Stale),
        Err(e) => Err(file_read_failed(&marker, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn release() -> BuildStamp {
        BuildStamp::release("2025-06-01", "deadbeef")
    }

    #[test]
    fn test_missing_install_dir() {
        let temp = TempDir::new().unwrap();
        let install = temp.path().join("vcpkg-artifacts");
        assert_eq!(
            check_installation(&install, &release()).unwrap(),
            InstallationState::Missing
        );
        assert_eq!(
            check_installation(&install, &BuildStamp::development("0.1.0")).unwrap(),
            InstallationState::Missing
        );
    }

    #[test]
    fn test_marker_absent_is_stale() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            check_installation(temp.path(), &release()).unwrap(),
            InstallationState::Stale
        );
    }

    #[test]
    fn test_marker_matching_is_current() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(VERSION_MARKER), "2025-06-01").unwrap();
        let state = check_installation(temp.path(), &release()).unwrap();
        assert_eq!(state, InstallationState::Current);
        assert!(!state.needs_provisioning());
    }

    #[test]
    fn test_marker_mismatch_is_stale() {
        let temp = TempDir::new().unwrap();
        for content in ["2024-01-01", "", "2025-06-01\n", "garbage"] {
            fs::write(temp.path().join(VERSION_MARKER), content).unwrap();
            assert_eq!(
                check_installation(temp.path(), &release()).unwrap(),
                InstallationState::Stale,
                "marker content {content:?}"
            );
        }
    }

    #[test]
    fn test_non_utf8_marker_is_stale() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(VERSION_MARKER), [0xff, 0xfe, 0x00]).unwrap();
        assert_eq!(
            check_installation(temp.path(), &release()).unwrap(),
            InstallationState::Stale
        );
    }

    #[test]
    fn test_development_sentinel() {
        let temp = TempDir::new().unwrap();
        let dev = BuildStamp::development("0.1.0");
        assert_eq!(
            check_installation(temp.path(), &dev).unwrap(),
            InstallationState::Stale
        );

        fs::write(temp.path().join(DEVELOPMENT_SENTINEL), "").unwrap();
        assert_eq!(
            check_installation(temp.path(), &dev).unwrap(),
            InstallationState::Current
        );
    }

    #[test]
    fn test_development_build_ignores_version_marker() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(VERSION_MARKER), "0.1.0").unwrap();
        assert_eq!(
            check_installation(temp.path(), &BuildStamp::development("0.1.0")).unwrap(),
            InstallationState::Stale
        );
    }
}
