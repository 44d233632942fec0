//! Charm-style CLI prompts using cliclack

use crate::fetcher::ComponentFetcher;
use crate::init::{init_project, InitOptions, InitOutcome};
use crate::install::ProcessInstaller;
use crate::product::CatalogConfig;
use crate::project::ProjectEnvironment;
use crate::prompt::Prompter;
use crate::registry::Registry;
use crate::stager::{add_component, AddOptions, AddOutcome};
use anyhow::Result;
use std::path::PathBuf;

/// CLI arguments for the add command
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    /// Component to add
    pub component: String,

    /// Auto-confirm prompts (non-interactive mode)
    pub yes: bool,

    /// Replace existing component files without asking
    pub overwrite: bool,

    /// Local registry checkout to read components from instead of the remote
    pub registry_dir: Option<PathBuf>,
}

/// CLI arguments for the init command
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Auto-confirm prompts (non-interactive mode)
    pub yes: bool,
}

/// [`Prompter`] backed by cliclack
#[derive(Debug, Default)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn confirm(&mut self, prompt: &str, initial: bool) -> Result<bool> {
        Ok(cliclack::confirm(prompt).initial_value(initial).interact()?)
    }

    fn info(&mut self, message: &str) -> Result<()> {
        cliclack::log::info(message)?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        cliclack::log::success(message)?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        cliclack::log::error(message)?;
        Ok(())
    }
}

/// Add a component with interactive prompts
pub async fn run_add<C: CatalogConfig>(config: &C, args: AddArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Inspect the project
    let env = inspect_project()?;

    // Step 2: Setup component fetcher
    let fetcher = setup_fetcher(config, &args.registry_dir)?;

    // Step 3: Fetch, transform, write and install
    let registry = Registry::builtin();
    let options = AddOptions {
        yes: args.yes,
        overwrite: args.overwrite,
    };
    let outcome = add_component(
        config,
        &env,
        &registry,
        &fetcher,
        &args.component,
        options,
        &mut ClackPrompter,
        &mut ProcessInstaller,
    )
    .await?;

    match outcome {
        AddOutcome::Added(report) => {
            let message = if report.dependencies_installed {
                format!("{} is ready to use", report.component)
            } else {
                format!(
                    "{} was added, but its dependencies still need installing",
                    report.component
                )
            };
            cliclack::outro(message)?;
        }
        AddOutcome::Cancelled => {
            cliclack::outro_cancel("Cancelled")?;
        }
    }

    Ok(())
}

/// Initialize the project with interactive prompts
pub async fn run_init<C: CatalogConfig>(config: &C, args: InitArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    let env = inspect_project()?;

    let outcome = init_project(
        config,
        &env,
        InitOptions { yes: args.yes },
        &mut ClackPrompter,
        &mut ProcessInstaller,
    )
    .await?;

    match outcome {
        InitOutcome::Initialized(_) => {
            cliclack::outro(format!(
                "{} is ready. Add a component with `{} add button`",
                config.display_name(),
                config.name()
            ))?;
        }
        InitOutcome::Cancelled => {
            cliclack::outro_cancel("Cancelled")?;
        }
    }

    Ok(())
}

fn inspect_project() -> Result<ProjectEnvironment> {
    let spinner = cliclack::spinner();
    spinner.start("Inspecting project...");

    let env = match ProjectEnvironment::from_current_dir() {
        Ok(env) => env,
        Err(e) => {
            spinner.stop("Failed to inspect project");
            return Err(e);
        }
    };

    let language = if env.uses_typescript {
        "TypeScript"
    } else {
        "JavaScript"
    };
    spinner.stop(format!(
        "Project: {} · {} · {}",
        env.framework, language, env.package_manager
    ));

    Ok(env)
}

fn setup_fetcher<C: CatalogConfig>(
    config: &C,
    registry_dir: &Option<PathBuf>,
) -> Result<ComponentFetcher> {
    let fetcher = match registry_dir {
        Some(path) => {
            cliclack::log::info(format!("Using local registry at {}", path.display()))?;
            ComponentFetcher::from_local(path.clone(), config.user_agent())
        }
        None => ComponentFetcher::from_config(config)?,
    };

    Ok(fetcher)
}
