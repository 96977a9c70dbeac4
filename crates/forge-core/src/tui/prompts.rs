//! The interactive `create` flow, rendered with cliclack

use super::terminal::{TermEvents, TermScreen};
use crate::catalog::{AdvancedFeature, Database, Framework};
use crate::generate::generate;
use crate::project::{validate_project_name, ProjectConfig};
use crate::runtime::{check_go_version, check_toolchain, GoToolchain, ToolchainConfig};
use crate::wizard::{Binding, Wizard, WizardOutcome};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when absent
    pub title: Option<String>,

    /// Web framework key
    pub framework: Option<String>,

    /// Database driver key (`none` for no database)
    pub driver: Option<String>,

    /// Directory the project folder is created in
    pub directory: Option<PathBuf>,

    /// Offer the advanced features step
    pub advanced: bool,

    /// Advanced features enabled without prompting
    pub features: Vec<String>,

    /// Skip the go/gofmt/git detection
    pub skip_tool_check: bool,
}

/// Run the create flow, prompting for whatever the flags left out
pub fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("goforge")?;

    let mut config = config_from_args(&args)?;
    let interactive = needs_prompting(&config);

    if interactive {
        let mut events = TermEvents::stderr();
        let mut screen = TermScreen::stderr();
        let outcome = Wizard::new(&mut events, &mut screen).run(&mut config)?;
        drop(screen);

        if outcome == WizardOutcome::Cancelled {
            cliclack::outro_cancel("Setup cancelled.")?;
            std::process::exit(1);
        }
    }

    if args.skip_tool_check {
        cliclack::log::info("Skipping tool check")?;
    } else {
        check_tools()?;
    }

    let toolchain = GoToolchain::new(ToolchainConfig::from_env());
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    let report = match generate(&mut config, &toolchain) {
        Ok(report) => report,
        Err(e) => {
            spinner.stop("Project generation failed");
            return Err(e).context("Failed to generate project");
        }
    };

    spinner.stop(format!(
        "Created {} files in {}",
        report.files.len(),
        report.project_root.display()
    ));

    for notice in &report.notices {
        cliclack::log::warning(notice.to_string())?;
    }

    if interactive {
        if let Some(command) = non_interactive_command(&config) {
            cliclack::log::info(format!("Tip: repeat this setup non-interactively with\n{}", command))?;
        }
    }

    print_next_steps(&report.project_root)?;

    Ok(())
}

/// Resolve the target root and validate every flag before anything is prompted or written
fn config_from_args(args: &CreateArgs) -> Result<ProjectConfig> {
    let current_dir = std::env::current_dir().context("Failed to read the current directory")?;
    let target_root = match &args.directory {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    let mut config = ProjectConfig::new(target_root);

    if let Some(title) = &args.title {
        validate_project_name(title, &config.target_root)?;
        config.project_name = Some(title.trim().to_string());
    }
    if let Some(key) = &args.framework {
        config.framework = Some(key.parse::<Framework>()?);
    }
    if let Some(key) = &args.driver {
        config.database = Some(key.parse::<Database>()?);
    }

    let mut features = Vec::new();
    for key in &args.features {
        let feature = AdvancedFeature::from_key(key).with_context(|| {
            format!(
                "invalid advanced feature: {}. Supported features are: {}",
                key,
                AdvancedFeature::ALL.map(|f| f.key()).join(", ")
            )
        })?;
        features.push(feature);
    }
    if !args.advanced || !features.is_empty() {
        config = config.with_features(&features);
    }

    Ok(config)
}

fn needs_prompting(config: &ProjectConfig) -> bool {
    [
        Binding::ProjectName,
        Binding::Framework,
        Binding::Database,
        Binding::AdvancedOptions,
    ]
    .iter()
    .any(|binding| !binding.is_filled(config))
}

/// The flags that reproduce this run without any prompt
fn non_interactive_command(config: &ProjectConfig) -> Option<String> {
    let mut command = format!(
        "goforge create --title {} --framework {} --driver {}",
        config.project_name.as_deref()?,
        config.framework?.key(),
        config.database?.key()
    );
    for feature in AdvancedFeature::ALL {
        if config.has_feature(feature) {
            command.push_str(&format!(" --feature {}", feature.key()));
        }
    }
    Some(command)
}

fn check_tools() -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    match check_toolchain(&ToolchainConfig::from_env()) {
        Ok(tools) => {
            let tool_info: Vec<String> = tools
                .iter()
                .map(|t| match &t.version {
                    Some(version) => format!("{} ({})", t.name, version),
                    None => t.name.to_string(),
                })
                .collect();
            spinner.stop(format!("Detected tools: {}", tool_info.join(", ")));

            let go_version = tools.iter().find_map(|t| match t.name {
                "Go" => t.version.as_deref(),
                _ => None,
            });
            if let Some(warning) = go_version.and_then(check_go_version) {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing tools");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing tools and try again.");
        }
    }
}

/// `cd` into the project (relative to where the user is) and start it
fn next_steps(project_root: &Path, current_dir: Option<&Path>) -> Vec<String> {
    let mut steps = Vec::new();

    if current_dir != Some(project_root) {
        let target = current_dir
            .and_then(|dir| project_root.strip_prefix(dir).ok())
            .unwrap_or(project_root);
        steps.push(format!("cd {}", target.display()));
    }
    steps.push("make run".to_string());

    steps
}

fn print_next_steps(project_root: &Path) -> Result<()> {
    let current = std::env::current_dir().ok();
    let steps = next_steps(project_root, current.as_deref());

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
