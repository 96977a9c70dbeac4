//! Narrow synchronous interface to the host Go toolchain and git
//!
//! The pipeline only sees success or failure; stdout is discarded and stderr
//! is kept for the error message.

use crate::error::{ProcessError, ProcessFailure};
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

/// Operations the generation pipeline needs from the outside world
pub trait Toolchain {
    /// `go mod init <name>`
    fn init_module(&self, name: &str, dir: &Path) -> Result<(), ProcessError>;

    /// `go get -u <package>`
    fn fetch_dependency(&self, package: &str, dir: &Path) -> Result<(), ProcessError>;

    /// `gofmt -s -w .`
    fn format_source(&self, dir: &Path) -> Result<(), ProcessError>;

    /// `go mod tidy`
    fn tidy_dependencies(&self, dir: &Path) -> Result<(), ProcessError>;

    /// `git init`
    fn init_version_control(&self, dir: &Path) -> Result<(), ProcessError>;
}

/// Binaries the toolchain shells out to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainConfig {
    pub go: String,
    pub gofmt: String,
    pub git: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            go: "go".to_string(),
            gofmt: "gofmt".to_string(),
            git: "git".to_string(),
        }
    }
}

impl ToolchainConfig {
    /// Read `GOFORGE_GO`, `GOFORGE_GOFMT` and `GOFORGE_GIT`, falling back to the PATH names
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, default: String| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
        };
        Self {
            go: pick("GOFORGE_GO", defaults.go),
            gofmt: pick("GOFORGE_GOFMT", defaults.gofmt),
            git: pick("GOFORGE_GIT", defaults.git),
        }
    }
}

/// Runs the real `go`, `gofmt` and `git` binaries
#[derive(Debug, Clone, Default)]
pub struct GoToolchain {
    config: ToolchainConfig,
}

impl GoToolchain {
    pub fn new(config: ToolchainConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolchainConfig {
        &self.config
    }

    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<(), ProcessError> {
        let command = std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ");
        tracing::info!(command = %command, dir = %dir.display(), "running");

        let output = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ProcessError {
                command: command.clone(),
                dir: dir.to_path_buf(),
                reason: ProcessFailure::Spawn(e),
            })?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ProcessError {
                command,
                dir: dir.to_path_buf(),
                reason: ProcessFailure::Status {
                    code: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                },
            })
        }
    }
}

impl Toolchain for GoToolchain {
    fn init_module(&self, name: &str, dir: &Path) -> Result<(), ProcessError> {
        self.run(&self.config.go, &["mod", "init", name], dir)
    }

    fn fetch_dependency(&self, package: &str, dir: &Path) -> Result<(), ProcessError> {
        self.run(&self.config.go, &["get", "-u", package], dir)
    }

    fn format_source(&self, dir: &Path) -> Result<(), ProcessError> {
        self.run(&self.config.gofmt, &["-s", "-w", "."], dir)
    }

    fn tidy_dependencies(&self, dir: &Path) -> Result<(), ProcessError> {
        self.run(&self.config.go, &["mod", "tidy"], dir)
    }

    fn init_version_control(&self, dir: &Path) -> Result<(), ProcessError> {
        self.run(&self.config.git, &["init"], dir)
    }
}
