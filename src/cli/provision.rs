use clap::Parser;

/// Arguments for the provision command
#[derive(Parser, Debug, Clone, Default)]
#[command(after_help = "EXAMPLES:\n  \
                  Install vcpkg-artifacts if missing or out of date:\n    artifacts-launcher provision\n\n\
                  Reinstall from a local mirror:\n    artifacts-launcher provision --force --bundle-url ./bundle.tar.gz")]
pub struct ProvisionArgs {
    /// Reinstall even if the installed copy is current
    #[arg(long)]
    pub force: bool,
}
