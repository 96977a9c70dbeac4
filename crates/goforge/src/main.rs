//! goforge CLI - scaffolding for Go web services

use anyhow::Result;
use clap::{Parser, Subcommand};
use forge_core::catalog::{Database, Framework};
use forge_core::tui::CreateArgs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the log filter
const LOG_ENV: &str = "GOFORGE_LOG";

#[derive(Parser, Debug)]
#[command(name = "goforge")]
#[command(about = "CLI for scaffolding Go web projects")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Go project
    Create(CliCreateArgs),
    /// Print build information
    Version,
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the project; also the module path and folder name
    #[arg(short, long)]
    pub title: Option<String>,

    #[arg(short, long, help = framework_help())]
    pub framework: Option<String>,

    #[arg(short, long, help = driver_help())]
    pub driver: Option<String>,

    /// Directory the project folder is created in (defaults to the current directory)
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// Ask which advanced features to add
    #[arg(long)]
    pub advanced: bool,

    /// Advanced features to add without asking (comma-separated: htmx,githubaction)
    #[arg(long = "feature", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Skip the go, gofmt and git installation check
    #[arg(long = "skip-tool-check")]
    pub skip_tool_check: bool,
}

fn framework_help() -> String {
    format!("Web framework to use ({})", Framework::supported_keys())
}

fn driver_help() -> String {
    format!("Database driver to use ({})", Database::supported_keys())
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            title: args.title,
            framework: args.framework,
            driver: args.driver,
            directory: args.directory,
            advanced: args.advanced,
            features: args.features,
            skip_tool_check: args.skip_tool_check,
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("error"));

    // Logs share stderr with the prompts, so they stay quiet unless asked for
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_version() {
    println!("goforge CLI version: {}", CLI_VERSION);
    if let Some(commit) = option_env!("GOFORGE_COMMIT") {
        println!("Commit: {}", commit);
    }
    if let Some(date) = option_env!("GOFORGE_BUILD_DATE") {
        println!("Build date: {}", date);
    }
}

fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    init_logging();

    let args = Args::parse();

    match args.command {
        Some(Command::Version) => {
            print_version();
            Ok(())
        }
        Some(Command::Create(create_args)) => {
            let result = forge_core::run(create_args.into());

            // Ensure cursor is visible on normal exit
            let _ = console::Term::stderr().show_cursor();

            result
        }
        None => {
            // No subcommand provided, default to create behavior (interactive mode)
            let result = forge_core::run(CreateArgs::default());

            let _ = console::Term::stderr().show_cursor();

            result
        }
    }
}
