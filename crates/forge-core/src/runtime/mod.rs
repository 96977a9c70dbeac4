//! Host toolchain access
//!
//! This module provides:
//! - The `Toolchain` adapter the pipeline calls (`go`, `gofmt`, `git`)
//! - Tool detection for the preflight check
//! - Go version parsing against the supported minimum

pub mod check;
pub mod toolchain;
pub mod version;

pub use check::{check_git, check_go, check_gofmt, check_toolchain, ToolInfo};
pub use toolchain::{GoToolchain, Toolchain, ToolchainConfig};
pub use version::{check_go_version, parse_go_version, MIN_GO_VERSION};
