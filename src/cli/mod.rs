//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - artifacts: Commands forwarded to vcpkg-artifacts
//! - provision: Provision command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod artifacts;
pub mod completions;
pub mod provision;

pub use artifacts::{
    AcquireArgs, AcquireProjectArgs, ActivateArgs, AddArgs, BareCommand, DelegatedCommand,
    EnvArgs, FindArgs, GenerateMsbuildPropsArgs, RegenerateArgs, UseArgs,
};
pub use completions::CompletionsArgs;
pub use provision::ProvisionArgs;

use crate::config::PathOverrides;
use crate::launcher::LaunchOptions;

/// artifacts-launcher - version-aware launcher for vcpkg-artifacts
///
/// Keeps a local copy of vcpkg-artifacts in sync with this build and forwards commands to it.
#[derive(Parser, Debug)]
#[command(
    name = "artifacts-launcher",
    author,
    version,
    args_override_self = true,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Version-aware launcher for vcpkg-artifacts",
    long_about = "Provisions the vcpkg-artifacts subsystem matching this build and forwards \
                  artifact commands (acquire, activate, use, ...) to it under Node.js.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  artifacts-launcher activate --x64 --windows   \x1b[90m# Activate the project's artifacts\x1b[0m\n   \
                  artifacts-launcher acquire cmake --version 3.27 \x1b[90m# Acquire one artifact\x1b[0m\n   \
                  artifacts-launcher deactivate                 \x1b[90m# Undo the last activation\x1b[0m\n   \
                  artifacts-launcher provision --force          \x1b[90m# Reinstall vcpkg-artifacts\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Root directory of the vcpkg toolset (defaults to the executable's directory)
    #[arg(long, global = true, env = "VCPKG_ROOT", value_name = "DIR")]
    pub vcpkg_root: Option<PathBuf>,

    /// Downloads directory (defaults to <root>/downloads)
    #[arg(long, global = true, env = "VCPKG_DOWNLOADS", value_name = "DIR")]
    pub downloads_root: Option<PathBuf>,

    /// Where acquired artifacts are stored
    #[arg(long, global = true, env = "VCPKG_ARTIFACTS_ROOT", value_name = "DIR")]
    pub artifacts_root: Option<PathBuf>,

    /// Registries cache directory
    #[arg(long, global = true, env = "X_VCPKG_REGISTRIES_CACHE", value_name = "DIR")]
    pub registries_cache: Option<PathBuf>,

    /// Global configuration file
    #[arg(long, global = true, env = "VCPKG_GLOBAL_CONFIG", value_name = "FILE")]
    pub global_config: Option<PathBuf>,

    /// Where vcpkg-artifacts is installed (defaults to next to the executable)
    #[arg(
        long,
        global = true,
        hide = true,
        env = "ARTIFACTS_LAUNCHER_INSTALL_DIR",
        value_name = "DIR"
    )]
    pub artifacts_install_dir: Option<PathBuf>,

    /// Node.js executable used to run vcpkg-artifacts
    #[arg(
        long,
        global = true,
        env = "ARTIFACTS_LAUNCHER_NODE",
        default_value = "node",
        value_name = "PATH"
    )]
    pub node: PathBuf,

    /// Download the bundle from this URL or local path instead
    #[arg(
        long,
        global = true,
        hide = true,
        env = "ARTIFACTS_LAUNCHER_BUNDLE_URL",
        value_name = "URL"
    )]
    pub bundle_url: Option<String>,

    /// Localization payload handed to vcpkg-artifacts
    #[arg(
        long,
        global = true,
        env = "ARTIFACTS_LAUNCHER_LANGUAGE_FILE",
        value_name = "FILE"
    )]
    pub language_file: Option<PathBuf>,

    /// Do not collect usage metrics from vcpkg-artifacts
    #[arg(
        long,
        global = true,
        env = "VCPKG_DISABLE_METRICS",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub disable_metrics: bool,

    /// Enable debug output (also passed to vcpkg-artifacts)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn path_overrides(&self) -> PathOverrides {
        PathOverrides {
            root: self.vcpkg_root.clone(),
            artifacts_install_dir: self.artifacts_install_dir.clone(),
            artifacts_root: self.artifacts_root.clone(),
            downloads: self.downloads_root.clone(),
            registries_cache: self.registries_cache.clone(),
            global_config: self.global_config.clone(),
        }
    }

    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            node: self.node.clone(),
            debug: self.debug,
            bundle_url: self.bundle_url.clone(),
            language_file: self.language_file.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Acquire artifacts
    Acquire(AcquireArgs),

    /// Acquire all artifacts referenced by the project manifest
    AcquireProject(AcquireProjectArgs),

    /// Activate the project's artifacts in the current shell
    Activate(ActivateArgs),

    /// Activate the given artifacts in the current shell
    Use(UseArgs),

    /// Deactivate the current activation
    Deactivate,

    /// Add an artifact to the project manifest
    Add(AddArgs),

    /// Find artifacts in registries
    Find(FindArgs),

    /// Write MSBuild properties for the project's artifacts
    GenerateMsbuildProps(GenerateMsbuildPropsArgs),

    /// Regenerate a registry index
    Regenerate(RegenerateArgs),

    /// Update registries
    Update,

    /// Run vcpkg-artifacts with arguments passed through verbatim
    Env(EnvArgs),

    /// Install or update vcpkg-artifacts without running it
    Provision(ProvisionArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
