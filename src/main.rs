//! artifacts-launcher - version-aware launcher for vcpkg-artifacts
//!
//! Keeps a local copy of the vcpkg-artifacts subsystem matching this build,
//! provisioning it from the standalone bundle when missing or stale, and
//! forwards artifact commands to it under Node.js.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod forward;
mod hash;
mod invoke;
mod launcher;
mod logging;
mod progress;
mod provision;
mod telemetry;
mod temp;
#[cfg(test)]
mod test_fixtures;
mod version_gate;

use cli::{BareCommand, Cli, Commands};
use commands::Context;
use error::Result;
use telemetry::{MetricsCollector, MetricsContext};

fn run(cli: &Cli, metrics: &mut MetricsContext<'_>) -> Result<i32> {
    match &cli.command {
        Commands::Acquire(args) => commands::artifacts::run(cli, args, metrics),
        Commands::AcquireProject(args) => commands::artifacts::run(cli, args, metrics),
        Commands::Activate(args) => commands::artifacts::run(cli, args, metrics),
        Commands::Use(args) => commands::artifacts::run(cli, args, metrics),
        Commands::Deactivate => commands::artifacts::run(cli, &BareCommand::Deactivate, metrics),
        Commands::Add(args) => commands::artifacts::run(cli, args, metrics),
        Commands::Find(args) => commands::artifacts::run(cli, args, metrics),
        Commands::GenerateMsbuildProps(args) => commands::artifacts::run(cli, args, metrics),
        Commands::Regenerate(args) => commands::artifacts::run(cli, args, metrics),
        Commands::Update => commands::artifacts::run(cli, &BareCommand::Update, metrics),
        Commands::Env(args) => commands::artifacts::run_forwarded(cli, &args.args, metrics),
        Commands::Provision(args) => {
            commands::provision::run(&Context::from_cli(cli)?, args).map(|()| 0)
        }
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args.clone()).map(|()| 0),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let mut collector = MetricsCollector::new();
    let result = {
        let mut metrics = MetricsContext::new(!cli.disable_metrics, &mut collector);
        run(&cli, &mut metrics)
    };

    tracing::debug!("{} metrics collected", collector.len());
    for (metric, value) in collector.iter() {
        tracing::debug!("Collected metric {} = {}", metric, value);
    }

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
