//! Launcher configuration
//!
//! This module contains:
//! - [`paths`]: Resolution of every path handed to the delegate
//! - [`bundle`]: `vcpkg-bundle.json` deployment settings
//! - [`stamp`]: The build's own version identifier

pub mod bundle;
pub mod paths;
pub mod stamp;

// Re-export commonly used types
pub use bundle::BundleSettings;
pub use paths::{LauncherPaths, PathOverrides};
pub use stamp::BuildStamp;
