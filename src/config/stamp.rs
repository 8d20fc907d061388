//! Build stamp: the launcher's own version identifier and, for release
//! builds, the digest of the bundle it was built against.

/// Version identifier and optional bundle digest baked in at compile time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildStamp {
    pub version: String,
    pub bundle_sha512: Option<String>,
}

impl BuildStamp {
    /// The stamp of the running binary
    pub fn current() -> Self {
        Self {
            version: option_env!("ARTIFACTS_LAUNCHER_BUNDLE_VERSION")
                .unwrap_or(env!("CARGO_PKG_VERSION"))
                .to_string(),
            bundle_sha512: option_env!("ARTIFACTS_LAUNCHER_BUNDLE_SHA512").map(str::to_string),
        }
    }

    /// A version-stamped (release) build
    pub fn release(version: impl Into<String>, bundle_sha512: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            bundle_sha512: Some(bundle_sha512.into()),
        }
    }

    /// A development build, which tracks the latest bundle
    pub fn development(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            bundle_sha512: None,
        }
    }

    pub fn is_version_stamped(&self) -> bool {
        self.bundle_sha512.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_stamp() {
        let stamp = BuildStamp::release("2025-01-01", "abc");
        assert!(stamp.is_version_stamped());
        assert_eq!(stamp.version, "2025-01-01");
    }

    #[test]
    fn test_development_stamp() {
        assert!(!BuildStamp::development("0.1.0").is_version_stamped());
    }

    #[test]
    fn test_current_has_version() {
        assert!(!BuildStamp::current().version.is_empty());
    }
}
