//! Commands that delegate to vcpkg-artifacts

use crate::cli::{Cli, DelegatedCommand};
use crate::commands::Context;
use crate::error::Result;
use crate::telemetry::MetricsContext;

/// Validate and forward `command`, returning the delegate's exit code.
///
/// Switch groups are checked before anything is resolved or downloaded.
pub fn run(
    cli: &Cli,
    command: &dyn DelegatedCommand,
    metrics: &mut MetricsContext<'_>,
) -> Result<i32> {
    let forwarded = command.forwarded()?;
    run_forwarded(cli, &forwarded, metrics)
}

/// Hand `forwarded` to the delegate as-is
pub fn run_forwarded(
    cli: &Cli,
    forwarded: &[String],
    metrics: &mut MetricsContext<'_>,
) -> Result<i32> {
    let context = Context::from_cli(cli)?;
    context.with_launcher(|launcher| launcher.run_configure_environment(forwarded, metrics))
}
