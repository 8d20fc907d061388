//! Common test utilities for artifacts-launcher integration tests

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use flate2::Compression;
use flate2::write::GzEncoder;
use tempfile::TempDir;

/// Environment variables that would otherwise leak a developer's setup into tests
const ISOLATED_VARS: &[&str] = &[
    "VCPKG_ROOT",
    "VCPKG_DOWNLOADS",
    "VCPKG_ARTIFACTS_ROOT",
    "X_VCPKG_REGISTRIES_CACHE",
    "VCPKG_GLOBAL_CONFIG",
    "VCPKG_DISABLE_METRICS",
    "ARTIFACTS_LAUNCHER_INSTALL_DIR",
    "ARTIFACTS_LAUNCHER_NODE",
    "ARTIFACTS_LAUNCHER_BUNDLE_URL",
    "ARTIFACTS_LAUNCHER_LANGUAGE_FILE",
    "RUST_LOG",
];

/// Shell script standing in for the Node.js entry point.
///
/// Records its arguments (starting with `$0`, the entry point) one per line in `args.txt` in the working
/// directory, writes telemetry when asked to, and exits with
/// `$DELEGATE_EXIT` (default 0).
#[allow(dead_code)]
pub const RECORDING_DELEGATE: &str = r#"out="$PWD/args.txt"
printf '%s\n' "$0" > "$out"
for a in "$@"; do printf '%s\n' "$a" >> "$out"; done
prev=""
for a in "$@"; do
  if [ "$prev" = "--z-telemetry-file" ]; then
    printf '{"acquired_artifacts": "cmake", "activated_artifacts": 3}' > "$a"
  fi
  prev="$a"
done
exit "${DELEGATE_EXIT:-0}"
"#;

/// An isolated vcpkg root, install dir and working directory
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory
    pub temp: TempDir,
    /// Root of the toolset
    pub root: PathBuf,
    /// Where vcpkg-artifacts is installed
    pub install_dir: PathBuf,
    /// Working directory of the launcher and the delegate
    pub work: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let root = temp.path().join("vcpkg");
        let work = temp.path().join("work");
        fs::create_dir_all(&root).expect("Failed to create root");
        fs::create_dir_all(&work).expect("Failed to create work directory");
        Self {
            install_dir: root.join("vcpkg-artifacts"),
            root,
            work,
            temp,
        }
    }

    /// The launcher binary, isolated to this environment, with `/bin/sh` as Node.js
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("artifacts-launcher").unwrap();
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        let home = self.temp.path().join("home");
        cmd.current_dir(&self.work)
            .arg("--vcpkg-root")
            .arg(&self.root)
            .arg("--artifacts-install-dir")
            .arg(&self.install_dir)
            .arg("--artifacts-root")
            .arg(home.join(".vcpkg").join("artifacts"))
            .arg("--registries-cache")
            .arg(self.temp.path().join("cache").join("registries"))
            .arg("--global-config")
            .arg(home.join(".vcpkg").join("vcpkg-configuration.global.json"))
            .arg("--node")
            .arg("/bin/sh");
        cmd
    }

    pub fn downloads(&self) -> PathBuf {
        self.root.join("downloads")
    }

    /// Install `script` as the entry point of a current development install
    pub fn install_delegate(&self, script: &str) {
        self.write_file(&self.install_dir.join("main.js"), script);
        self.write_file(&self.install_dir.join("artifacts-development.txt"), "");
    }

    /// Write a `.tar.gz` bundle holding `entries` and return its path
    pub fn write_bundle(&self, name: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = self.temp.path().join(name);
        let file = File::create(&path).expect("Failed to create bundle");
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
        for (entry, content) in entries {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, entry, content.as_bytes())
                .expect("Failed to append bundle entry");
        }
        builder
            .into_inner()
            .and_then(GzEncoder::finish)
            .expect("Failed to finish bundle");
        path
    }

    pub fn write_file(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("Failed to read file")
    }

    /// Arguments recorded by [`RECORDING_DELEGATE`]
    pub fn recorded_args(&self) -> Vec<String> {
        self.read_file(&self.work.join("args.txt"))
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn delegate_ran(&self) -> bool {
        self.work.join("args.txt").exists()
    }

    /// Names of the entries next to the install directory
    pub fn install_siblings(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.root)
            .expect("Failed to read root")
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }
}
