//! The wizard's steps and the configuration field each one fills

use super::choice::StepOption;
use super::multi::MultiChoicePrompt;
use super::prompt::{Answer, Prompt};
use super::single::SingleChoicePrompt;
use super::text::TextPrompt;
use crate::catalog::{AdvancedFeature, Database, Framework};
use crate::error::{ForgeError, ValidationError};
use crate::project::{validate_project_name, CancelFlag, ProjectConfig};

pub const PROJECT_NAME_HEADER: &str = "What is the name of your project?";
pub const FRAMEWORK_HEADER: &str = "What web framework do you want to use in your Go project?";
pub const DATABASE_HEADER: &str = "What database driver do you want to use in your Go project?";
pub const FEATURES_HEADER: &str = "Which advanced features do you want?";

/// Configuration field a step writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    ProjectName,
    Framework,
    Database,
    AdvancedOptions,
}

impl Binding {
    /// True when an earlier, non-interactive source already supplied the field
    pub fn is_filled(&self, config: &ProjectConfig) -> bool {
        match self {
            Binding::ProjectName => config.project_name.is_some(),
            Binding::Framework => config.framework.is_some(),
            Binding::Database => config.database.is_some(),
            Binding::AdvancedOptions => config.advanced_options.is_some(),
        }
    }

    /// Validate a confirmed answer and store it; an invalid value aborts the run
    pub fn apply(&self, config: &mut ProjectConfig, answer: Answer) -> Result<(), ForgeError> {
        match (self, answer) {
            (Binding::ProjectName, Answer::Text(name)) => {
                let name = name.trim().to_string();
                validate_project_name(&name, &config.target_root)?;
                config.project_name = Some(name);
            }
            (Binding::Framework, Answer::Choice(key)) => {
                config.framework = Some(key.parse::<Framework>()?);
            }
            (Binding::Database, Answer::Choice(key)) => {
                config.database = Some(key.parse::<Database>()?);
            }
            (Binding::AdvancedOptions, Answer::Choices(flags)) => {
                config.advanced_options = Some(flags);
            }
            (binding, answer) => {
                return Err(ForgeError::Unregistered(format!(
                    "{:?} answer for the {:?} step",
                    answer, binding
                )))
            }
        }
        Ok(())
    }
}

/// A question in the wizard
#[derive(Debug, Clone)]
pub struct Step {
    pub name: &'static str,
    pub header: &'static str,
    pub options: Vec<StepOption>,
    pub binding: Binding,
}

impl Step {
    pub fn project_name() -> Self {
        Self {
            name: "Project Name",
            header: PROJECT_NAME_HEADER,
            options: Vec::new(),
            binding: Binding::ProjectName,
        }
    }

    pub fn framework() -> Self {
        Self {
            name: "Web Framework",
            header: FRAMEWORK_HEADER,
            options: framework_options(),
            binding: Binding::Framework,
        }
    }

    pub fn database() -> Self {
        Self {
            name: "Database Driver",
            header: DATABASE_HEADER,
            options: database_options(),
            binding: Binding::Database,
        }
    }

    pub fn advanced_features() -> Self {
        Self {
            name: "Advanced Features",
            header: FEATURES_HEADER,
            options: feature_options(),
            binding: Binding::AdvancedOptions,
        }
    }

    /// Build the selection primitive for this step
    pub fn prompt(&self, cancel: CancelFlag) -> Result<Box<dyn Prompt>, ValidationError> {
        let prompt: Box<dyn Prompt> = match self.binding {
            Binding::ProjectName => Box::new(TextPrompt::new(self.header, cancel)?),
            Binding::Framework | Binding::Database => Box::new(SingleChoicePrompt::new(
                self.header,
                self.options.clone(),
                cancel,
            )),
            Binding::AdvancedOptions => Box::new(MultiChoicePrompt::new(
                self.header,
                self.options.clone(),
                cancel,
            )),
        };
        Ok(prompt)
    }

    /// One-line record left on screen once the step is answered
    pub fn summary(&self, config: &ProjectConfig) -> String {
        let value = match self.binding {
            Binding::ProjectName => config.project_name.clone().unwrap_or_default(),
            Binding::Framework => config
                .framework
                .map(|f| f.key().to_string())
                .unwrap_or_default(),
            Binding::Database => config
                .database
                .map(|d| d.key().to_string())
                .unwrap_or_default(),
            Binding::AdvancedOptions => {
                let enabled: Vec<&str> = config
                    .advanced_options
                    .iter()
                    .flatten()
                    .filter(|(_, on)| **on)
                    .map(|(key, _)| key.as_str())
                    .collect();
                if enabled.is_empty() {
                    "none".to_string()
                } else {
                    enabled.join(", ")
                }
            }
        };
        format!("{}: {}", self.name, value)
    }
}

/// Steps in the order they run
pub fn default_steps() -> Vec<Step> {
    vec![
        Step::project_name(),
        Step::framework(),
        Step::database(),
        Step::advanced_features(),
    ]
}

pub fn framework_options() -> Vec<StepOption> {
    Framework::ALL
        .iter()
        .map(|f| StepOption {
            key: f.key(),
            title: f.title(),
            description: f.description(),
        })
        .collect()
}

pub fn database_options() -> Vec<StepOption> {
    Database::ALL
        .iter()
        .map(|d| StepOption {
            key: d.key(),
            title: d.title(),
            description: d.description(),
        })
        .collect()
}

pub fn feature_options() -> Vec<StepOption> {
    AdvancedFeature::ALL
        .iter()
        .map(|f| StepOption {
            key: f.key(),
            title: f.title(),
            description: f.description(),
        })
        .collect()
}
