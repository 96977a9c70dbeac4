//! Error taxonomy shared by the wizard, the registry and the generation pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the core
pub type Result<T, E = ForgeError> = std::result::Result<T, E>;

/// Every failure the core can report
#[derive(Debug, Error)]
pub enum ForgeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The user aborted one of the wizard steps
    #[error("setup cancelled")]
    Cancelled,

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("failed to render template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: tera::Error,
    },

    /// A key or template tag that should have been registered was not.
    /// Upstream validation makes this unreachable for user input.
    #[error("no generator registered for '{0}'")]
    Unregistered(String),
}

impl ForgeError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

/// Problems detected before anything touches the filesystem
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("project name cannot be empty")]
    EmptyName,

    #[error("input '{0}' contains non-alphanumeric characters")]
    InvalidName(String),

    #[error("invalid web framework: {key}. Supported frameworks are: {supported}")]
    UnsupportedFramework { key: String, supported: String },

    #[error("invalid database driver: {key}. Supported drivers are: {supported}")]
    UnsupportedDatabase { key: String, supported: String },

    #[error("project name '{0}' must be relative to the target directory")]
    AbsoluteName(String),

    #[error("directory '{}' already exists and is not empty. Please choose a different name", .0.display())]
    DirectoryNotEmpty(PathBuf),

    #[error("prompt header '{0}' must be non-empty and contain only letters and digits")]
    InvalidHeader(String),

    #[error("project configuration is missing the {0}")]
    MissingField(&'static str),
}

/// A toolchain command that could not be started or exited unsuccessfully
#[derive(Debug, Error)]
#[error("`{command}` failed in {}: {reason}", .dir.display())]
pub struct ProcessError {
    pub command: String,
    pub dir: PathBuf,
    pub reason: ProcessFailure,
}

#[derive(Debug, Error)]
pub enum ProcessFailure {
    #[error("could not start process: {0}")]
    Spawn(#[source] io::Error),

    #[error("exited with status {}{}", status_text(.code), stderr_suffix(.stderr))]
    Status { code: Option<i32>, stderr: String },
}

fn status_text(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" ({})", trimmed)
    }
}
