//! Forge Core - scaffolds Go web services from embedded templates
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Catalog and templates** - the supported frameworks, database
//!   drivers and advanced features, and the templates each of them renders
//! - **Layer 2: Registry and pipeline** - `GeneratorRegistry` resolves a
//!   configuration to its generators; `generate` writes the project and drives
//!   `go`, `gofmt` and `git` through the `Toolchain` adapter
//! - **Layer 3: Wizard** - headless selection prompts that fill a
//!   `ProjectConfig` from input events
//! - **Layer 4: CLI/TUI Interface** - terminal input, frame drawing and the
//!   cliclack chrome (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use forge_core::{generate, Database, Framework, GoToolchain, ProjectConfig, ToolchainConfig};
//!
//! let mut config = ProjectConfig::new("/work")
//!     .with_project_name("demo")
//!     .with_framework(Framework::Chi)
//!     .with_database(Database::Postgres)
//!     .with_features(&[]);
//! let toolchain = GoToolchain::new(ToolchainConfig::from_env());
//! let report = generate(&mut config, &toolchain)?;
//! ```

pub mod catalog;
pub mod error;
pub mod generate;
pub mod project;
pub mod registry;
pub mod runtime;
pub mod templates;
pub mod wizard;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{AdvancedFeature, Database, Framework};
pub use error::{ForgeError, ProcessError, ValidationError};
pub use generate::{generate, GenerationReport, Notice, Pipeline};
pub use project::{ProjectConfig, ResolvedProject};
pub use registry::GeneratorRegistry;
pub use runtime::{check_toolchain, GoToolchain, Toolchain, ToolchainConfig};
pub use wizard::{Wizard, WizardOutcome};

#[cfg(feature = "tui")]
pub use tui::run;
