//! Aurora CLI - Add Aurora UI components to your project

use anyhow::Result;
use aurora_core::tui::{AddArgs, InitArgs};
use aurora_core::{CatalogConfig, Registry};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Aurora UI product configuration
#[derive(Clone)]
pub struct AuroraConfig;

impl CatalogConfig for AuroraConfig {
    fn name(&self) -> &'static str {
        "aurora"
    }

    fn display_name(&self) -> &'static str {
        "Aurora UI"
    }

    fn default_registry_url(&self) -> &'static str {
        "https://raw.githubusercontent.com/aurora-ui/aurora/main/registry"
    }

    fn registry_url_env(&self) -> &'static str {
        "AURORA_REGISTRY_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://aurora-ui.dev/docs"
    }

    fn cli_description(&self) -> &'static str {
        "Add Aurora UI components to your project"
    }

    fn user_agent(&self) -> &'static str {
        concat!("aurora-cli/", env!("CARGO_PKG_VERSION"))
    }
}

#[derive(Parser, Debug)]
#[command(name = "aurora")]
#[command(about = "Add Aurora UI components to your project")]
#[command(version)]
pub struct Args {
    /// Show debug logs on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add the Aurora theme stylesheet and base packages to this project
    Init(CliInitArgs),
    /// Add a component to this project
    Add(CliAddArgs),
    /// List available components
    List,
    /// Open the documentation, optionally for one component
    Docs(DocsArgs),
}

#[derive(Parser, Debug)]
pub struct CliInitArgs {
    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliInitArgs> for InitArgs {
    fn from(args: CliInitArgs) -> Self {
        InitArgs { yes: args.yes }
    }
}

#[derive(Parser, Debug)]
pub struct CliAddArgs {
    /// Component name (see `aurora list`)
    pub component: String,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite existing component files without asking
    #[arg(short, long)]
    pub overwrite: bool,

    /// Local directory to read components from instead of the remote registry (for development use)
    #[arg(long = "registry-dir")]
    pub registry_dir: Option<PathBuf>,
}

impl From<CliAddArgs> for AddArgs {
    fn from(args: CliAddArgs) -> Self {
        AddArgs {
            component: args.component,
            yes: args.yes,
            overwrite: args.overwrite,
            registry_dir: args.registry_dir,
        }
    }
}

#[derive(Parser, Debug)]
pub struct DocsArgs {
    /// Component whose page should be opened
    pub component: Option<String>,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "aurora_core=debug,aurora=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command, config: &AuroraConfig) -> Result<()> {
    match command {
        Command::Init(init_args) => aurora_core::run_init(config, init_args.into()).await,
        Command::Add(add_args) => aurora_core::run_add(config, add_args.into()).await,
        Command::List => {
            aurora_core::docs::print_catalog(config, &Registry::builtin());
            Ok(())
        }
        Command::Docs(docs_args) => aurora_core::docs::open_docs(
            config,
            &Registry::builtin(),
            docs_args.component.as_deref(),
        ),
    }
}

#[tokio::main]
async fn main() {
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

    let args = Args::parse();
    init_tracing(args.verbose);

    let config = AuroraConfig;
    let result = run(args.command, &config).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        let _ = cliclack::outro_cancel(format!("{:#}", e));
        std::process::exit(1);
    }
}
