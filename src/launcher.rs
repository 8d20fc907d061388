//! Provisioning-then-delegation for one artifacts command
//!
//! [`Launcher::ensure_installed`] brings the install up to date when the
//! deployment permits it, and [`Launcher::run_configure_environment`] runs
//! the delegate with a fresh ephemeral scope and harvests its telemetry.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{BuildStamp, BundleSettings, LauncherPaths};
use crate::error::{LauncherError, Result, file_read_failed, file_write_failed};
use crate::invoke::{DelegateInvocation, InvocationOptions, ProcessRunner, normalize_exit_code};
use crate::provision::{
    BundleArtifact, BundleProvisioner, Downloader, Extractor, verify_entry_point,
};
use crate::telemetry::{MetricsContext, track_telemetry};
use crate::temp::{EphemeralDir, UniqueNames};
use crate::version_gate::{InstallationState, check_installation};

/// Name of the staged localization payload inside the ephemeral scope
pub const LANGUAGE_FILE: &str = "messages.json";

/// Per-launch settings that do not come from path resolution
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// Interpreter that runs the entry point
    pub node: PathBuf,
    pub debug: bool,
    /// Replaces the bundle download location
    pub bundle_url: Option<String>,
    /// Localization payload file to hand to the delegate when non-empty
    pub language_file: Option<PathBuf>,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            node: PathBuf::from("node"),
            debug: false,
            bundle_url: None,
            language_file: None,
        }
    }
}

/// Everything one launch depends on
pub struct Launcher<'a> {
    pub paths: &'a LauncherPaths,
    pub settings: &'a BundleSettings,
    pub stamp: &'a BuildStamp,
    pub options: &'a LaunchOptions,
    pub downloader: &'a dyn Downloader,
    pub extractor: &'a dyn Extractor,
    pub runner: &'a dyn ProcessRunner,
    pub names: &'a dyn UniqueNames,
}

impl Launcher<'_> {
    /// Make sure a usable install exists, provisioning if allowed and needed.
    ///
    /// `force` reinstalls even a current install. Returns the entry point.
    pub fn ensure_installed(&self, force: bool) -> Result<PathBuf> {
        let install_dir = &self.paths.artifacts_install_dir;

        if self.settings.can_provision() {
            let state = check_installation(install_dir, self.stamp)?;
            debug!("vcpkg-artifacts at {} is {:?}", install_dir.display(), state);

            if force || state.needs_provisioning() {
                let artifact = BundleArtifact::for_stamp(
                    self.stamp,
                    &self.paths.downloads,
                    self.options.bundle_url.as_deref(),
                );
                BundleProvisioner::new(self.downloader, self.extractor, self.names).provision(
                    &artifact,
                    install_dir,
                    self.stamp,
                )?;
            }

            return verify_entry_point(install_dir);
        }

        if !install_dir.exists() {
            return Err(LauncherError::ArtifactsNotInstalledReadonlyRoot {
                root: self.paths.root.display().to_string(),
            });
        }

        Ok(self.paths.entry_point())
    }

    /// Provision if needed, run the delegate with `forwarded` and return its
    /// normalized exit code
    pub fn run_configure_environment(
        &self,
        forwarded: &[String],
        metrics: &mut MetricsContext<'_>,
    ) -> Result<i32> {
        eprintln!(
            "{} vcpkg-artifacts is experimental and may change at any time.",
            console::style("warning:").yellow().bold()
        );

        let entry_point = self.ensure_installed(false)?;

        let scope = EphemeralDir::create(&self.paths.temp_base, self.names)?;
        let telemetry_file = metrics
            .enabled
            .then(|| scope.unique_file(self.names, "artifacts_telemetry.txt"));
        let previous_environment = scope.unique_file(self.names, "previous_environment.txt");
        let language_file = self.stage_language_file(scope.path())?;

        let invocation = DelegateInvocation::build(
            self.paths,
            &InvocationOptions {
                program: &self.options.node,
                entry_point: &entry_point,
                forwarded,
                debug: self.options.debug,
                telemetry_file: telemetry_file.as_deref(),
                previous_environment: &previous_environment,
                language_file: language_file.as_deref(),
            },
        );

        let raw = self.runner.run(&invocation)?;
        debug!("Delegate exited with {}", raw);

        if let Some(telemetry_file) = &invocation.telemetry_file {
            track_telemetry(telemetry_file, metrics.sink);
        }

        Ok(normalize_exit_code(raw))
    }

    /// Copy a non-empty localization payload into `scope`
    fn stage_language_file(&self, scope: &Path) -> Result<Option<PathBuf>> {
        let Some(source) = &self.options.language_file else {
            return Ok(None);
        };

        let payload = fs::read_to_string(source).map_err(|e| file_read_failed(source, e))?;
        if payload.is_empty() {
            return Ok(None);
        }

        let staged = scope.join(LANGUAGE_FILE);
        fs::write(&staged, payload).map_err(|e| file_write_failed(&staged, e))?;
        Ok(Some(staged))
    }

    /// Current state of the install, for reporting
    pub fn installation_state(&self) -> Result<InstallationState> {
        check_installation(&self.paths.artifacts_install_dir, self.stamp)
    }
}
