//! Ephemeral paths for one launcher invocation.
//!
//! Temp dirs are never created under the current working directory (e.g. when
//! TMPDIR=tmp or TMPDIR=./tmp), and every name handed out here comes from a
//! [`UniqueNames`] source so tests can substitute deterministic names.

#[cfg(test)]
use std::cell::Cell;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, file_write_failed};

/// Subdirectory of the system temp dir that holds per-invocation scopes
pub const TEMP_SUBDIR: &str = "artifacts-launcher";

/// Source of names that are unique across processes
pub trait UniqueNames {
    fn unique_name(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNames;

impl UniqueNames for RandomNames {
    fn unique_name(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic names (`<prefix>-0`, `<prefix>-1`, ...)
#[cfg(test)]
#[derive(Debug)]
pub struct SequentialNames {
    prefix: String,
    next: Cell<u32>,
}

#[cfg(test)]
impl SequentialNames {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(0),
        }
    }
}

#[cfg(test)]
impl UniqueNames for SequentialNames {
    fn unique_name(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

/// Returns a directory path suitable for creating temporary directories.
/// Never returns a relative path, so temp dirs are never created under the current working
/// directory (avoids repo/tmp when TMPDIR=tmp and cwd is the repo).
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// A directory scoped to one invocation, removed best-effort on drop.
#[derive(Debug)]
pub struct EphemeralDir {
    path: PathBuf,
}

impl EphemeralDir {
    /// Create `<base>/artifacts-launcher/<unique>`
    pub fn create(base: &Path, names: &dyn UniqueNames) -> Result<Self> {
        let path = base.join(TEMP_SUBDIR).join(names.unique_name());
        fs::create_dir_all(&path).map_err(|e| file_write_failed(&path, e))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<dir>/<unique>_<suffix>`
    pub fn unique_file(&self, names: &dyn UniqueNames, suffix: &str) -> PathBuf {
        self.path.join(format!("{}_{}", names.unique_name(), suffix))
    }
}

impl Drop for EphemeralDir {
    fn drop(&mut self) {
        if !self.path.exists() {
            return;
        }
        if let Err(e) = fs::remove_dir_all(&self.path) {
            tracing::warn!("Failed to remove {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    fn test_sequential_names() {
        let names = SequentialNames::new("t");
        assert_eq!(names.unique_name(), "t-0");
        assert_eq!(names.unique_name(), "t-1");
    }

    #[test]
    fn test_random_names_differ() {
        let names = RandomNames;
        assert_ne!(names.unique_name(), names.unique_name());
    }

    #[test]
    fn test_ephemeral_dir_removed_on_drop() {
        let temp = TempDir::new().unwrap();
        let names = SequentialNames::new("scope");
        let path = {
            let dir = EphemeralDir::create(temp.path(), &names).unwrap();
            fs::write(dir.path().join("file.txt"), "x").unwrap();
            assert!(dir.path().ends_with("artifacts-launcher/scope-0"));
            dir.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_unique_file_names() {
        let temp = TempDir::new().unwrap();
        let names = SequentialNames::new("n");
        let dir = EphemeralDir::create(temp.path(), &names).unwrap();
        let file = dir.unique_file(&names, "artifacts_telemetry.txt");
        assert_eq!(
            file.file_name().unwrap().to_string_lossy(),
            "n-1_artifacts_telemetry.txt"
        );
    }
}
