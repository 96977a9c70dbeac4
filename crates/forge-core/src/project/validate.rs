//! Checks that run before any filesystem mutation

use crate::error::{ForgeError, ValidationError};
use std::fs;
use std::path::{Path, PathBuf};

/// Check if a project name only contains letters, digits, `/` and `-`
pub fn is_valid_project_name(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '/' || c == '-')
}

/// Check if a directory exists and isn't empty
pub fn is_directory_non_empty(path: &Path) -> Result<bool, ForgeError> {
    if !path.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path).map_err(|e| {
        ForgeError::io(format!("Could not read directory {}", path.display()), e)
    })?;
    Ok(entries.next().is_some())
}

/// Folder a project name maps to under the target root
///
/// `/` is allowed inside a name for nested module paths, but a leading one
/// would replace the target root entirely.
pub fn project_root_for(name: &str, target_root: &Path) -> Result<PathBuf, ValidationError> {
    if name.starts_with('/') {
        return Err(ValidationError::AbsoluteName(name.to_string()));
    }
    Ok(target_root.join(name))
}

/// Validate a project name and make sure it would not land in a populated directory
pub fn validate_project_name(name: &str, target_root: &Path) -> Result<(), ForgeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if !is_valid_project_name(name) {
        return Err(ValidationError::InvalidName(name.to_string()).into());
    }
    let project_root = project_root_for(name, target_root)?;
    if is_directory_non_empty(&project_root)? {
        return Err(ValidationError::DirectoryNotEmpty(project_root).into());
    }
    Ok(())
}
