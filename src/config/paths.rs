//! Path resolution for the launcher and the delegate it runs
//!
//! Every path has a default derived from the executable location, the user's
//! home directory or the platform cache directory, and can be overridden from
//! the command line or environment.

use std::path::{Path, PathBuf};

use crate::error::{LauncherError, Result};
use crate::temp;

/// Directory next to the executable that holds the artifacts install
pub const ARTIFACTS_DIR: &str = "vcpkg-artifacts";

/// Entry point script inside the artifacts install
pub const ENTRY_POINT: &str = "main.js";

/// Version marker written after a version-stamped install
pub const VERSION_MARKER: &str = "version.txt";

/// Presence-only marker of a development install
pub const DEVELOPMENT_SENTINEL: &str = "artifacts-development.txt";

/// Per-user directory name under home
const USER_DIR: &str = ".vcpkg";

/// Optional overrides for resolved paths
#[derive(Debug, Clone, Default)]
pub struct PathOverrides {
    pub root: Option<PathBuf>,
    pub artifacts_install_dir: Option<PathBuf>,
    pub artifacts_root: Option<PathBuf>,
    pub downloads: Option<PathBuf>,
    pub registries_cache: Option<PathBuf>,
    pub global_config: Option<PathBuf>,
}

/// All paths one launch needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherPaths {
    /// Root directory of the toolset
    pub root: PathBuf,
    /// The launcher's own executable
    pub tool_exe: PathBuf,
    /// Where the artifacts subsystem is installed
    pub artifacts_install_dir: PathBuf,
    /// Where acquired artifacts live
    pub artifacts_root: PathBuf,
    pub downloads: PathBuf,
    pub registries_cache: PathBuf,
    pub global_config: PathBuf,
    /// Working directory the delegate runs in
    pub original_cwd: PathBuf,
    /// Base for ephemeral per-invocation directories
    pub temp_base: PathBuf,
}

impl LauncherPaths {
    /// Resolve paths for the running process
    pub fn resolve(overrides: PathOverrides) -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| LauncherError::ConfigInvalid {
            message: format!("Could not determine executable path: {e}"),
        })?;
        let tool_exe = dunce::canonicalize(&exe).unwrap_or(exe);
        let original_cwd = std::env::current_dir().map_err(|e| LauncherError::ConfigInvalid {
            message: format!("Could not determine working directory: {e}"),
        })?;

        Self::resolve_with(overrides, tool_exe, original_cwd)
    }

    /// Resolve paths for an explicit executable and working directory
    pub fn resolve_with(
        overrides: PathOverrides,
        tool_exe: PathBuf,
        original_cwd: PathBuf,
    ) -> Result<Self> {
        let exe_dir = tool_exe
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| LauncherError::ConfigInvalid {
                message: format!("Executable path has no parent: {}", tool_exe.display()),
            })?;

        let root = overrides.root.unwrap_or_else(|| exe_dir.clone());
        let artifacts_install_dir = overrides
            .artifacts_install_dir
            .unwrap_or_else(|| exe_dir.join(ARTIFACTS_DIR));
        let downloads = overrides
            .downloads
            .unwrap_or_else(|| root.join("downloads"));

        let artifacts_root = match overrides.artifacts_root {
            Some(path) => path,
            None => user_dir()?.join("artifacts"),
        };
        let global_config = match overrides.global_config {
            Some(path) => path,
            None => user_dir()?.join("vcpkg-configuration.global.json"),
        };
        let registries_cache = match overrides.registries_cache {
            Some(path) => path,
            None => dirs::cache_dir()
                .ok_or_else(|| LauncherError::ConfigInvalid {
                    message: "Could not determine cache directory".to_string(),
                })?
                .join("vcpkg")
                .join("registries"),
        };

        Ok(Self {
            root,
            tool_exe,
            artifacts_install_dir,
            artifacts_root,
            downloads,
            registries_cache,
            global_config,
            original_cwd,
            temp_base: temp::temp_dir_base(),
        })
    }

    /// Path to the delegate's entry point script
    pub fn entry_point(&self) -> PathBuf {
        self.artifacts_install_dir.join(ENTRY_POINT)
    }
}

fn user_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| LauncherError::ConfigInvalid {
        message: "Could not determine home directory".to_string(),
    })?;
    Ok(home.join(USER_DIR))
}
