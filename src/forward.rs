//! Forwarding of parsed switches and settings to the artifacts delegate
//!
//! Switches become `--<name>` tokens and settings become `--<name> <value>`
//! pairs, both in insertion order. Before settings are appended, each
//! [`SwitchGroup`] is checked so that at most one of its members is set.

use crate::error::Result;
use crate::error::args::{GroupKind, group_violation};

/// A set of mutually exclusive switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitchGroup {
    pub kind: GroupKind,
    pub members: &'static [&'static str],
}

pub const OPERATING_SYSTEM_SWITCHES: SwitchGroup = SwitchGroup {
    kind: GroupKind::OperatingSystem,
    members: &["windows", "osx", "linux", "freebsd"],
};

pub const HOST_PLATFORM_SWITCHES: SwitchGroup = SwitchGroup {
    kind: GroupKind::HostPlatform,
    members: &["x86", "x64", "arm", "arm64"],
};

pub const TARGET_PLATFORM_SWITCHES: SwitchGroup = SwitchGroup {
    kind: GroupKind::TargetPlatform,
    members: &["target:x86", "target:x64", "target:arm", "target:arm64"],
};

/// The groups every artifacts command validates, in reporting order
pub const ARTIFACT_SWITCH_GROUPS: [SwitchGroup; 3] = [
    OPERATING_SYSTEM_SWITCHES,
    HOST_PLATFORM_SWITCHES,
    TARGET_PLATFORM_SWITCHES,
];

impl SwitchGroup {
    /// Fail with this group's error if more than one member is present
    pub fn validate(&self, parsed: &ParsedArguments) -> Result<()> {
        let present = self
            .members
            .iter()
            .filter(|member| parsed.has_switch(member))
            .count();
        if present > 1 {
            return Err(group_violation(self.kind));
        }
        Ok(())
    }
}

/// Switches and settings produced by the command line parser.
///
/// Switch names are unique; settings form an ordered map where re-inserting
/// a name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    switches: Vec<String>,
    settings: Vec<(String, String)>,
}

impl ParsedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a switch; returns false if it was already present
    pub fn insert_switch(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.has_switch(&name) {
            return false;
        }
        self.switches.push(name);
        true
    }

    /// Set a setting, keeping its original position if already present
    pub fn insert_setting(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.settings.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.settings.push((name, value)),
        }
    }

    #[must_use]
    pub fn with_switch(mut self, name: impl Into<String>) -> Self {
        self.insert_switch(name);
        self
    }

    #[must_use]
    pub fn with_setting(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert_setting(name, value);
        self
    }

    pub fn has_switch(&self, name: &str) -> bool {
        self.switches.iter().any(|s| s == name)
    }

    pub fn switches(&self) -> &[String] {
        &self.switches
    }

    pub fn settings(&self) -> &[(String, String)] {
        &self.settings
    }
}

/// Append forwarded tokens for `parsed` to `appended_to`.
///
/// On a group violation the error is returned and the caller must not
/// launch anything; `appended_to` may already hold the switch tokens.
pub fn forward_common_artifacts_arguments(
    appended_to: &mut Vec<String>,
    parsed: &ParsedArguments,
) -> Result<()> {
    for switch in parsed.switches() {
        appended_to.push(format!("--{switch}"));
    }

    for group in &ARTIFACT_SWITCH_GROUPS {
        group.validate(parsed)?;
    }

    for (name, value) in parsed.settings() {
        appended_to.push(format!("--{name}"));
        appended_to.push(value.clone());
    }

    Ok(())
}
