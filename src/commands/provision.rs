//! Provision command implementation

use crate::cli::ProvisionArgs;
use crate::commands::Context;
use crate::error::Result;
use crate::version_gate::InstallationState;

/// Install or update vcpkg-artifacts without launching it
pub fn run(context: &Context, args: &ProvisionArgs) -> Result<()> {
    let install_dir = &context.paths.artifacts_install_dir;

    context.with_launcher(|launcher| {
        if !context.settings.can_provision() {
            launcher.ensure_installed(false)?;
            println!(
                "vcpkg-artifacts at {} is managed by this deployment",
                install_dir.display()
            );
            return Ok(());
        }

        let before = launcher.installation_state()?;
        launcher.ensure_installed(args.force)?;

        if before == InstallationState::Current && !args.force {
            println!(
                "vcpkg-artifacts {} is up to date at {}",
                context.stamp.version,
                install_dir.display()
            );
        } else {
            println!(
                "Installed vcpkg-artifacts {} to {}",
                context.stamp.version,
                install_dir.display()
            );
        }
        Ok(())
    })
}
