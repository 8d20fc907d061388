//! Invocation of the artifacts delegate process
//!
//! The argument list has a fixed layout:
//!
//! ```text
//! <entry point> <forwarded...> [--debug] [--z-telemetry-file <path>]
//!   --vcpkg-root <path> --z-vcpkg-command <path>
//!   --z-vcpkg-artifacts-root <path> --z-vcpkg-downloads <path>
//!   --z-vcpkg-registries-cache <path> --z-next-previous-environment <path>
//!   --z-global-config <path> [--language <path>]
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::LauncherPaths;
use crate::error::{LauncherError, Result};

/// A fully built delegate command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegateInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub working_directory: PathBuf,
    /// Where the delegate may write telemetry; `None` when metrics are disabled
    pub telemetry_file: Option<PathBuf>,
}

/// Inputs to [`DelegateInvocation::build`] that vary per launch
#[derive(Debug, Clone)]
pub struct InvocationOptions<'a> {
    pub program: &'a Path,
    pub entry_point: &'a Path,
    pub forwarded: &'a [String],
    pub debug: bool,
    /// Set only when metrics are collected for this process
    pub telemetry_file: Option<&'a Path>,
    pub previous_environment: &'a Path,
    /// Staged copy of a non-empty localization payload
    pub language_file: Option<&'a Path>,
}

impl DelegateInvocation {
    pub fn build(paths: &LauncherPaths, options: &InvocationOptions<'_>) -> Self {
        let mut args: Vec<OsString> = Vec::with_capacity(options.forwarded.len() + 20);
        args.push(options.entry_point.into());
        args.extend(options.forwarded.iter().map(OsString::from));

        if options.debug {
            args.push("--debug".into());
        }
        if let Some(telemetry_file) = options.telemetry_file {
            push_path(&mut args, "--z-telemetry-file", telemetry_file);
        }

        push_path(&mut args, "--vcpkg-root", &paths.root);
        push_path(&mut args, "--z-vcpkg-command", &paths.tool_exe);
        push_path(&mut args, "--z-vcpkg-artifacts-root", &paths.artifacts_root);
        push_path(&mut args, "--z-vcpkg-downloads", &paths.downloads);
        push_path(&mut args, "--z-vcpkg-registries-cache", &paths.registries_cache);
        push_path(
            &mut args,
            "--z-next-previous-environment",
            options.previous_environment,
        );
        push_path(&mut args, "--z-global-config", &paths.global_config);

        if let Some(language_file) = options.language_file {
            push_path(&mut args, "--language", language_file);
        }

        Self {
            program: options.program.to_path_buf(),
            args,
            working_directory: paths.original_cwd.clone(),
            telemetry_file: options.telemetry_file.map(Path::to_path_buf),
        }
    }
}

fn push_path(args: &mut Vec<OsString>, flag: &str, path: &Path) {
    args.push(flag.into());
    args.push(path.into());
}

/// Runs a delegate invocation to completion and returns its raw exit status
pub trait ProcessRunner {
    fn run(&self, invocation: &DelegateInvocation) -> Result<i64>;
}

/// Spawns the delegate as a child process sharing this process's stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &DelegateInvocation) -> Result<i64> {
        tracing::debug!(
            "Running {} {:?} in {}",
            invocation.program.display(),
            invocation.args,
            invocation.working_directory.display()
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_directory)
            .status()
            .map_err(|e| LauncherError::ProcessLaunchFailed {
                program: invocation.program.display().to_string(),
                reason: e.to_string(),
            })?;

        // Terminated by a signal
        Ok(status.code().map_or(-1, i64::from))
    }
}

/// Collapse a raw exit status into the range every host reports reliably
pub fn normalize_exit_code(raw: i64) -> i32 {
    match i32::try_from(raw) {
        Ok(code @ 0..=127) => code,
        _ => 1,
    }
}
