//! Embedded Go project templates
//!
//! This module provides:
//! - Per-option generators (framework, database, docker) exposing their templates
//!   through named capabilities
//! - Fixed project files shared by every framework (Makefile, README, ...)
//! - Starter files for the advanced features
//! - The Tera renderer every template goes through

macro_rules! embedded {
    ($path:literal) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $path))
    };
}

pub mod advanced;
pub mod db;
pub mod docker;
pub mod web;

use crate::error::ForgeError;
use serde::Serialize;
use std::fmt;
use tera::{Context, Tera};

pub use advanced::{hello_handler, StarterFile, HTMX_STARTER_FILES, WORKFLOW_FILES};
pub use db::DatabaseGenerator;
pub use docker::DockerGenerator;
pub use web::FrameworkGenerator;

/// Named content-producing operations a generator can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Main,
    Server,
    Routes,
    ServerWithDb,
    RoutesWithDb,
    HtmxRoutes,
    HtmxImports,
    Service,
    Env,
    EnvExample,
    Compose,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Capability::Main => "Main",
            Capability::Server => "Server",
            Capability::Routes => "Routes",
            Capability::ServerWithDb => "ServerWithDB",
            Capability::RoutesWithDb => "RoutesWithDB",
            Capability::HtmxRoutes => "HtmxRoutes",
            Capability::HtmxImports => "HtmxImports",
            Capability::Service => "Service",
            Capability::Env => "Env",
            Capability::EnvExample => "EnvExample",
            Capability::Compose => "Compose",
        }
    }

    /// Server and routes capabilities matching the database choice
    pub fn server_pair(with_database: bool) -> (Capability, Capability) {
        if with_database {
            (Capability::ServerWithDb, Capability::RoutesWithDb)
        } else {
            (Capability::Server, Capability::Routes)
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Framework-independent project files
pub mod fixed {
    pub const MAKEFILE: &str = embedded!("Makefile.tmpl");
    pub const README: &str = embedded!("README.md.tmpl");
    pub const GITIGNORE: &str = embedded!("gitignore.tmpl");
    pub const AIR_TOML: &str = embedded!("air.toml.tmpl");
    /// Baseline `.env` every project gets
    pub const ENV: &str = embedded!("env.tmpl");
}

/// Render a template with the given data as the substitution context
///
/// Autoescaping is off: the output is Go source, YAML and shell, not HTML.
pub fn render<T: Serialize>(name: &str, template: &str, data: &T) -> Result<String, ForgeError> {
    let wrap = |source| ForgeError::Template {
        name: name.to_string(),
        source,
    };
    let context = Context::from_serialize(data).map_err(wrap)?;
    Tera::one_off(template, &context, false).map_err(wrap)
}
