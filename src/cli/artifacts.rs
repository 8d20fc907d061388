//! Arguments of the commands that delegate to vcpkg-artifacts
//!
//! Every command knows how to describe itself as [`ParsedArguments`] plus
//! positional arguments; [`DelegatedCommand::forwarded`] turns that into the
//! list the delegate receives.
//!
//! Path-valued options are kept as `String` so the delegate receives exactly
//! what was typed; clap rejects values that are not valid UTF-8.

use clap::{Args, Parser};

use crate::error::Result;
use crate::forward::{ParsedArguments, forward_common_artifacts_arguments};

/// Platform selection switches shared by the artifacts commands.
///
/// Exclusivity within each group is checked when forwarding, not by clap,
/// so the user sees the same message the delegate protocol defines.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSwitches {
    /// Select Windows artifacts
    #[arg(long)]
    pub windows: bool,
    /// Select macOS artifacts
    #[arg(long)]
    pub osx: bool,
    /// Select Linux artifacts
    #[arg(long)]
    pub linux: bool,
    /// Select FreeBSD artifacts
    #[arg(long)]
    pub freebsd: bool,

    /// Select artifacts for an x86 host
    #[arg(long)]
    pub x86: bool,
    /// Select artifacts for an x64 host
    #[arg(long)]
    pub x64: bool,
    /// Select artifacts for an ARM host
    #[arg(long)]
    pub arm: bool,
    /// Select artifacts for an ARM64 host
    #[arg(long)]
    pub arm64: bool,

    /// Select artifacts targeting x86
    #[arg(long = "target:x86")]
    pub target_x86: bool,
    /// Select artifacts targeting x64
    #[arg(long = "target:x64")]
    pub target_x64: bool,
    /// Select artifacts targeting ARM
    #[arg(long = "target:arm")]
    pub target_arm: bool,
    /// Select artifacts targeting ARM64
    #[arg(long = "target:arm64")]
    pub target_arm64: bool,

    /// Acquire even if already acquired
    #[arg(long)]
    pub force: bool,
}

impl ArtifactSwitches {
    /// Set switches, in declaration order
    pub fn to_parsed(&self) -> ParsedArguments {
        let flags = [
            ("windows", self.windows),
            ("osx", self.osx),
            ("linux", self.linux),
            ("freebsd", self.freebsd),
            ("x86", self.x86),
            ("x64", self.x64),
            ("arm", self.arm),
            ("arm64", self.arm64),
            ("target:x86", self.target_x86),
            ("target:x64", self.target_x64),
            ("target:arm", self.target_arm),
            ("target:arm64", self.target_arm64),
            ("force", self.force),
        ];

        let mut parsed = ParsedArguments::new();
        for (name, set) in flags {
            if set {
                parsed.insert_switch(name);
            }
        }
        parsed
    }
}

/// A command forwarded to the delegate
pub trait DelegatedCommand {
    /// Command name the delegate expects first
    fn delegate_command(&self) -> &'static str;

    fn parsed(&self) -> ParsedArguments;

    fn positionals(&self) -> Vec<String> {
        Vec::new()
    }

    /// `<command> <switches> <settings> <positionals>`, validating switch groups
    fn forwarded(&self) -> Result<Vec<String>> {
        let mut out = vec![self.delegate_command().to_string()];
        forward_common_artifacts_arguments(&mut out, &self.parsed())?;
        out.extend(self.positionals());
        Ok(out)
    }
}

fn with_optional_setting(
    mut parsed: ParsedArguments,
    name: &str,
    value: Option<&str>,
) -> ParsedArguments {
    if let Some(value) = value {
        parsed.insert_setting(name, value);
    }
    parsed
}

/// Arguments for the acquire command
#[derive(Parser, Debug, Clone)]
pub struct AcquireArgs {
    /// Artifacts to acquire
    #[arg(required = true, value_name = "ARTIFACT")]
    pub artifacts: Vec<String>,

    #[command(flatten)]
    pub switches: ArtifactSwitches,

    /// Version of the artifact to acquire
    #[arg(long)]
    pub version: Option<String>,
}

impl DelegatedCommand for AcquireArgs {
    fn delegate_command(&self) -> &'static str {
        "acquire"
    }

    fn parsed(&self) -> ParsedArguments {
        with_optional_setting(self.switches.to_parsed(), "version", self.version.as_deref())
    }

    fn positionals(&self) -> Vec<String> {
        self.artifacts.clone()
    }
}

/// Arguments for the acquire-project command
#[derive(Parser, Debug, Clone)]
pub struct AcquireProjectArgs {
    #[command(flatten)]
    pub switches: ArtifactSwitches,
}

impl DelegatedCommand for AcquireProjectArgs {
    fn delegate_command(&self) -> &'static str {
        "acquire_project"
    }

    fn parsed(&self) -> ParsedArguments {
        self.switches.to_parsed()
    }
}

/// Options shared by activate and use
#[derive(Args, Debug, Clone, Default)]
pub struct ActivationOptions {
    #[command(flatten)]
    pub switches: ArtifactSwitches,

    /// Version of the artifact to activate
    #[arg(long)]
    pub version: Option<String>,

    /// Write MSBuild properties for the activation to this file
    #[arg(long = "msbuild-props", value_name = "PATH")]
    pub msbuild_props: Option<String>,

    /// Write the activation as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub json: Option<String>,
}

impl ActivationOptions {
    fn parsed(&self) -> ParsedArguments {
        let parsed =
            with_optional_setting(self.switches.to_parsed(), "version", self.version.as_deref());
        let parsed = with_optional_setting(parsed, "msbuild-props", self.msbuild_props.as_deref());
        with_optional_setting(parsed, "json", self.json.as_deref())
    }
}

/// Arguments for the activate command
#[derive(Parser, Debug, Clone)]
pub struct ActivateArgs {
    #[command(flatten)]
    pub options: ActivationOptions,
}

impl DelegatedCommand for ActivateArgs {
    fn delegate_command(&self) -> &'static str {
        "activate"
    }

    fn parsed(&self) -> ParsedArguments {
        self.options.parsed()
    }
}

/// Arguments for the use command
#[derive(Parser, Debug, Clone)]
pub struct UseArgs {
    /// Artifacts to activate in the current shell
    #[arg(required = true, value_name = "ARTIFACT")]
    pub artifacts: Vec<String>,

    #[command(flatten)]
    pub options: ActivationOptions,
}

impl DelegatedCommand for UseArgs {
    fn delegate_command(&self) -> &'static str {
        "use"
    }

    fn parsed(&self) -> ParsedArguments {
        self.options.parsed()
    }

    fn positionals(&self) -> Vec<String> {
        self.artifacts.clone()
    }
}

/// Arguments for the add command
#[derive(Parser, Debug, Clone)]
pub struct AddArgs {
    /// Artifact to add to the project manifest
    pub artifact: String,

    /// Version constraint to record
    #[arg(long)]
    pub version: Option<String>,
}

impl DelegatedCommand for AddArgs {
    fn delegate_command(&self) -> &'static str {
        "add"
    }

    fn parsed(&self) -> ParsedArguments {
        with_optional_setting(ParsedArguments::new(), "version", self.version.as_deref())
    }

    fn positionals(&self) -> Vec<String> {
        vec![self.artifact.clone()]
    }
}

/// Arguments for the find command
#[derive(Parser, Debug, Clone)]
pub struct FindArgs {
    /// Artifact to search for
    pub artifact: String,

    /// Version to search for
    #[arg(long)]
    pub version: Option<String>,
}

impl DelegatedCommand for FindArgs {
    fn delegate_command(&self) -> &'static str {
        "find"
    }

    fn parsed(&self) -> ParsedArguments {
        with_optional_setting(ParsedArguments::new(), "version", self.version.as_deref())
    }

    fn positionals(&self) -> Vec<String> {
        vec![self.artifact.clone()]
    }
}

/// Arguments for the generate-msbuild-props command
#[derive(Parser, Debug, Clone)]
pub struct GenerateMsbuildPropsArgs {
    #[command(flatten)]
    pub switches: ArtifactSwitches,

    /// File to write the MSBuild properties to
    #[arg(long = "msbuild-props", value_name = "PATH")]
    pub msbuild_props: String,
}

impl DelegatedCommand for GenerateMsbuildPropsArgs {
    fn delegate_command(&self) -> &'static str {
        "generate-msbuild-props"
    }

    fn parsed(&self) -> ParsedArguments {
        self.switches
            .to_parsed()
            .with_setting("msbuild-props", self.msbuild_props.as_str())
    }
}

/// Arguments for the regenerate command
#[derive(Parser, Debug, Clone)]
pub struct RegenerateArgs {
    /// Registry index to regenerate
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Report what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Normalize the index contents
    #[arg(long)]
    pub normalize: bool,
}

impl DelegatedCommand for RegenerateArgs {
    fn delegate_command(&self) -> &'static str {
        "regenerate"
    }

    fn parsed(&self) -> ParsedArguments {
        let mut parsed = ParsedArguments::new();
        if self.dry_run {
            parsed.insert_switch("dry-run");
        }
        if self.normalize {
            parsed.insert_switch("normalize");
        }
        parsed
    }

    fn positionals(&self) -> Vec<String> {
        vec![self.path.clone()]
    }
}

/// Commands without arguments of their own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BareCommand {
    Deactivate,
    Update,
}

impl DelegatedCommand for BareCommand {
    fn delegate_command(&self) -> &'static str {
        match self {
            BareCommand::Deactivate => "deactivate",
            BareCommand::Update => "update",
        }
    }

    fn parsed(&self) -> ParsedArguments {
        ParsedArguments::new()
    }
}

/// Arguments for the env command
#[derive(Parser, Debug, Clone)]
pub struct EnvArgs {
    /// Arguments handed to vcpkg-artifacts verbatim
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}
