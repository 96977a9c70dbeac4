//! What a finished generation run produced

use crate::catalog::Database;
use crate::error::ForgeError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A non-fatal condition the user should hear about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The driver runs in-process, so no docker-compose.yml was written
    ComposeSkipped { database: Database },
    /// `go mod tidy` failed; the project is still usable
    TidyFailed { message: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::ComposeSkipped { database } => write!(
                f,
                "{} does not support docker-compose generation, skipping docker-compose.yml",
                database.title()
            ),
            Notice::TidyFailed { message } => {
                write!(f, "go mod tidy failed, run it manually: {}", message)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub project_root: PathBuf,
    /// Files under the project root, relative and sorted, `.git` excluded
    pub files: Vec<PathBuf>,
    pub notices: Vec<Notice>,
}

impl GenerationReport {
    pub(crate) fn collect(project_root: &Path, notices: Vec<Notice>) -> Result<Self, ForgeError> {
        let mut files = Vec::new();
        let walker = WalkDir::new(project_root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| entry.file_name() != ".git");

        for entry in walker {
            let entry = entry.map_err(|e| {
                ForgeError::io(
                    format!("Failed to list files in {}", project_root.display()),
                    e.into(),
                )
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(project_root) {
                files.push(relative.to_path_buf());
            }
        }
        files.sort();

        Ok(Self {
            project_root: project_root.to_path_buf(),
            files,
            notices,
        })
    }

    pub fn contains(&self, relative: impl AsRef<Path>) -> bool {
        self.files.iter().any(|f| f == relative.as_ref())
    }
}
