//! Forwarded argument validation errors

use super::LauncherError;

/// Which exclusivity group a rejected switch combination belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    OperatingSystem,
    HostPlatform,
    TargetPlatform,
}

/// Creates the user-facing error for a violated switch group
pub fn group_violation(kind: GroupKind) -> LauncherError {
    match kind {
        GroupKind::OperatingSystem => LauncherError::MultipleOperatingSystems,
        GroupKind::HostPlatform => LauncherError::MultipleHostPlatforms,
        GroupKind::TargetPlatform => LauncherError::MultipleTargetPlatforms,
    }
}
