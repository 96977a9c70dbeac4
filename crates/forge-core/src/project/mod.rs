//! The aggregate answer set produced by the wizard and consumed by the pipeline

pub mod config;
pub mod validate;

pub use config::{AdvancedTemplates, CancelFlag, ProjectConfig, ResolvedProject};
pub use validate::{
    is_directory_non_empty, is_valid_project_name, project_root_for, validate_project_name,
};
