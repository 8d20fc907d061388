//! `vcpkg-bundle.json` handling
//!
//! The bundle file sits at the root and describes how the toolset was
//! deployed. Only a writable git deployment may provision artifacts itself;
//! Visual Studio and one-liner deployments ship them preinstalled.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{LauncherError, Result, file_read_failed};

/// File name of the bundle settings under the root
pub const BUNDLE_FILE: &str = "vcpkg-bundle.json";

/// How the toolset was deployed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Deployment {
    #[default]
    Git,
    OneLiner,
    VisualStudio,
}

/// Settings read from `vcpkg-bundle.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct BundleSettings {
    pub readonly: bool,
    pub deployment: Deployment,
}

impl BundleSettings {
    /// Load settings from `<root>/vcpkg-bundle.json`; absent file means defaults
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(BUNDLE_FILE);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(file_read_failed(&path, e)),
        };

        serde_json::from_str(&content).map_err(|e| LauncherError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Whether this deployment may download and install artifacts itself
    pub fn can_provision(&self) -> bool {
        !self.readonly && self.deployment == Deployment::Git
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_writable_git() {
        let temp = TempDir::new().unwrap();
        let settings = BundleSettings::load(temp.path()).unwrap();
        assert_eq!(settings, BundleSettings::default());
        assert!(settings.can_provision());
    }

    #[test]
    fn test_readonly_bundle() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(BUNDLE_FILE), r#"{"readonly": true}"#).unwrap();
        let settings = BundleSettings::load(temp.path()).unwrap();
        assert!(settings.readonly);
        assert!(!settings.can_provision());
    }

    #[test]
    fn test_visual_studio_deployment() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(BUNDLE_FILE),
            r#"{"readonly": false, "deployment": "VisualStudio", "embeddedsha": "abc"}"#,
        )
        .unwrap();
        let settings = BundleSettings::load(temp.path()).unwrap();
        assert_eq!(settings.deployment, Deployment::VisualStudio);
        assert!(!settings.can_provision());
    }

    #[test]
    fn test_malformed_bundle_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(BUNDLE_FILE), "{ not json").unwrap();
        let err = BundleSettings::load(temp.path()).unwrap_err();
        assert!(matches!(err, LauncherError::ConfigParseFailed { .. }));
    }
}
