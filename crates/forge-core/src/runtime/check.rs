//! Detection of the go, gofmt and git binaries before generation

use super::toolchain::ToolchainConfig;
use anyhow::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// Tool detection result
#[derive(Debug, Clone)]
pub struct ToolInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe_version(name: &'static str, program: &str, args: &[&str]) -> ToolInfo {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => ToolInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Go is available
pub fn check_go(config: &ToolchainConfig) -> ToolInfo {
    probe_version("Go", &config.go, &["version"])
}

/// Check if gofmt is available
///
/// gofmt has no version flag, so only its presence is checked.
pub fn check_gofmt(config: &ToolchainConfig) -> ToolInfo {
    let available = if config.gofmt.contains(std::path::MAIN_SEPARATOR) {
        Path::new(&config.gofmt).is_file()
    } else {
        Command::new("which")
            .arg(&config.gofmt)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    };
    ToolInfo {
        name: "gofmt",
        version: None,
        available,
    }
}

/// Check if git is available
pub fn check_git(config: &ToolchainConfig) -> ToolInfo {
    probe_version("Git", &config.git, &["--version"])
}

/// Check every tool the pipeline shells out to, failing with the list of missing ones
pub fn check_toolchain(config: &ToolchainConfig) -> Result<Vec<ToolInfo>> {
    let tools = vec![check_go(config), check_gofmt(config), check_git(config)];

    let missing: Vec<_> = tools
        .iter()
        .filter(|t| !t.available)
        .map(|t| match t.name {
            "Git" => "Git (install from https://git-scm.com)",
            "gofmt" => "gofmt (ships with Go, check that $GOROOT/bin is on PATH)",
            _ => "Go (install from https://go.dev/dl)",
        })
        .collect();

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(tools)
}
