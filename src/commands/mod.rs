//! Command implementations for the launcher CLI

pub mod artifacts;
pub mod completions;
pub mod provision;
pub mod version;

use crate::cli::Cli;
use crate::config::{BuildStamp, BundleSettings, LauncherPaths};
use crate::error::Result;
use crate::invoke::SystemProcessRunner;
use crate::launcher::{LaunchOptions, Launcher};
use crate::provision::{HttpDownloader, TarGzExtractor};
use crate::temp::RandomNames;

/// Resolved configuration shared by commands that touch the install
pub struct Context {
    pub paths: LauncherPaths,
    pub settings: BundleSettings,
    pub stamp: BuildStamp,
    pub options: LaunchOptions,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let paths = LauncherPaths::resolve(cli.path_overrides())?;
        let settings = BundleSettings::load(&paths.root)?;
        tracing::debug!("Resolved paths: {:?}", paths);

        Ok(Self {
            paths,
            settings,
            stamp: BuildStamp::current(),
            options: cli.launch_options(),
        })
    }

    /// Run `f` with a launcher wired to the real network, filesystem and processes
    pub fn with_launcher<T>(&self, f: impl FnOnce(&Launcher<'_>) -> Result<T>) -> Result<T> {
        let downloader = HttpDownloader::new(console::Term::stderr().is_term());
        let launcher = Launcher {
            paths: &self.paths,
            settings: &self.settings,
            stamp: &self.stamp,
            options: &self.options,
            downloader: &downloader,
            extractor: &TarGzExtractor,
            runner: &SystemProcessRunner,
            names: &RandomNames,
        };
        f(&launcher)
    }
}
