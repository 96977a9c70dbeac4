//! Project configuration: every answer the wizard collects plus derived state

use crate::catalog::{AdvancedFeature, Database, Framework};
use crate::error::{ForgeError, ValidationError};
use crate::project::validate::{is_valid_project_name, project_root_for};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag
///
/// The configuration owns one flag; every selection prompt gets a clone and
/// sets it when the user aborts. The wizard polls it between steps.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// HTML/Go fragments synthesised by the pipeline when HTMX is enabled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AdvancedTemplates {
    /// Route registrations for the web handlers
    pub routes: String,
    /// Import lines those registrations need
    pub imports: String,
}

/// Configuration for a new Go project
#[derive(Debug, Clone)]
pub struct ProjectConfig {
    pub project_name: Option<String>,
    pub framework: Option<Framework>,
    pub database: Option<Database>,
    /// Advanced feature flags keyed by option key (`htmx`, `githubaction`)
    pub advanced_options: Option<BTreeMap<String, bool>>,
    /// Directory the project folder is created in
    pub target_root: PathBuf,
    pub advanced_templates: AdvancedTemplates,
    cancel: CancelFlag,
}

impl ProjectConfig {
    pub fn new(target_root: impl Into<PathBuf>) -> Self {
        Self {
            project_name: None,
            framework: None,
            database: None,
            advanced_options: None,
            target_root: target_root.into(),
            advanced_templates: AdvancedTemplates::default(),
            cancel: CancelFlag::default(),
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn with_framework(mut self, framework: Framework) -> Self {
        self.framework = Some(framework);
        self
    }

    pub fn with_database(mut self, database: Database) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_features(mut self, features: &[AdvancedFeature]) -> Self {
        self.advanced_options = Some(
            features
                .iter()
                .map(|f| (f.key().to_string(), true))
                .collect(),
        );
        self
    }

    /// Handle to the shared cancellation flag
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    pub fn has_feature(&self, feature: AdvancedFeature) -> bool {
        self.advanced_options
            .as_ref()
            .and_then(|options| options.get(feature.key()))
            .copied()
            .unwrap_or(false)
    }

    /// Docker compose is generated for every chosen driver that supports it
    pub fn docker_enabled(&self) -> bool {
        self.database.is_some_and(|db| db.supports_compose())
    }

    /// Check that every field the pipeline needs is present and valid
    pub fn resolve(&self) -> Result<ResolvedProject, ForgeError> {
        let name = self
            .project_name
            .as_deref()
            .map(str::trim)
            .ok_or(ValidationError::MissingField("project name"))?;
        if name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if !is_valid_project_name(name) {
            return Err(ValidationError::InvalidName(name.to_string()).into());
        }
        let project_root = project_root_for(name, &self.target_root)?;
        let framework = self
            .framework
            .ok_or(ValidationError::MissingField("web framework"))?;
        let database = self
            .database
            .ok_or(ValidationError::MissingField("database driver"))?;

        Ok(ResolvedProject {
            name: name.to_string(),
            framework,
            database,
            project_root,
        })
    }

    /// Data exposed to every template
    pub(crate) fn template_data<'a>(&'a self, project: &'a ResolvedProject) -> TemplateData<'a> {
        let empty = BTreeMap::new();
        let options = self.advanced_options.as_ref().unwrap_or(&empty);
        TemplateData {
            project_name: &project.name,
            framework: project.framework.key(),
            database: project.database.key(),
            docker: self.docker_enabled(),
            htmx: self.has_feature(AdvancedFeature::Htmx),
            github_action: self.has_feature(AdvancedFeature::GithubAction),
            advanced_options: options.clone(),
            advanced_templates: &self.advanced_templates,
        }
    }
}

/// The validated subset of a configuration the pipeline works from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    pub name: String,
    pub framework: Framework,
    pub database: Database,
    pub project_root: PathBuf,
}

impl ResolvedProject {
    pub fn root(&self) -> &Path {
        &self.project_root
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TemplateData<'a> {
    pub project_name: &'a str,
    pub framework: &'static str,
    pub database: &'static str,
    pub docker: bool,
    pub htmx: bool,
    pub github_action: bool,
    pub advanced_options: BTreeMap<String, bool>,
    pub advanced_templates: &'a AdvancedTemplates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_flag_is_shared() {
        let config = ProjectConfig::new("/tmp");
        let flag = config.cancel_flag();
        assert!(!config.is_cancelled());
        flag.cancel();
        assert!(config.is_cancelled());
    }

    #[test]
    fn test_docker_enabled_is_derived_from_database() {
        let base = ProjectConfig::new("/tmp");
        assert!(!base.docker_enabled());
        assert!(!base.clone().with_database(Database::None).docker_enabled());
        assert!(!base.clone().with_database(Database::Sqlite).docker_enabled());
        assert!(base.clone().with_database(Database::Mongo).docker_enabled());
    }

    #[test]
    fn test_has_feature_reads_option_map() {
        let config = ProjectConfig::new("/tmp").with_features(&[AdvancedFeature::Htmx]);
        assert!(config.has_feature(AdvancedFeature::Htmx));
        assert!(!config.has_feature(AdvancedFeature::GithubAction));

        let mut config = ProjectConfig::new("/tmp");
        let mut options = BTreeMap::new();
        options.insert("githubaction".to_string(), false);
        config.advanced_options = Some(options);
        assert!(!config.has_feature(AdvancedFeature::GithubAction));
    }

    #[test]
    fn test_resolve_requires_every_field() {
        let config = ProjectConfig::new("/work").with_project_name("demo");
        assert!(matches!(
            config.resolve(),
            Err(ForgeError::Validation(ValidationError::MissingField(
                "web framework"
            )))
        ));

        let config = config
            .with_framework(Framework::Chi)
            .with_database(Database::None);
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.name, "demo");
        assert_eq!(resolved.project_root, PathBuf::from("/work/demo"));
    }

    #[test]
    fn test_resolve_trims_and_rejects_bad_names() {
        let config = ProjectConfig::new("/work")
            .with_project_name("  demo ")
            .with_framework(Framework::Gin)
            .with_database(Database::Postgres);
        assert_eq!(config.resolve().unwrap().name, "demo");

        let absolute = config.clone().with_project_name("/srv/demo");
        assert!(matches!(
            absolute.resolve(),
            Err(ForgeError::Validation(ValidationError::AbsoluteName(_)))
        ));

        let config = config.with_project_name("my project");
        assert!(matches!(
            config.resolve(),
            Err(ForgeError::Validation(ValidationError::InvalidName(_)))
        ));
    }
}
