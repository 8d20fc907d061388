//! Version command implementation

use crate::config::BuildStamp;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    let stamp = BuildStamp::current();

    println!("artifacts-launcher {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Bundle: {}", bundle_description(&stamp));
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn bundle_description(stamp: &BuildStamp) -> String {
    if stamp.is_version_stamped() {
        format!("{} (pinned)", stamp.version)
    } else {
        "latest (development build)".to_string()
    }
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
