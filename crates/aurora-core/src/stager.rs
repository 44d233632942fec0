//! Adding a component: fetch, transform and write its files, then install
//! its packages

use crate::error::CatalogError;
use crate::fetcher::ComponentFetcher;
use crate::init::{init_project, stylesheet_path, InitOptions, InitOutcome};
use crate::install::Installer;
use crate::product::CatalogConfig;
use crate::project::ProjectEnvironment;
use crate::prompt::Prompter;
use crate::registry::{ComponentDefinition, Registry};
use crate::transform::{output_path, transform_file};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

#[derive(Debug, Clone, Copy, Default)]
pub struct AddOptions {
    /// Skip prompts, taking the non-destructive default
    pub yes: bool,
    /// Replace existing files without asking
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReport {
    pub component: String,
    /// Files written, in registry order
    pub written: Vec<PathBuf>,
    pub dependencies_installed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(AddReport),
    Cancelled,
}

/// A registry file and where it lands in the project
#[derive(Debug, Clone)]
struct StagedFile {
    source: String,
    target: String,
    absolute: PathBuf,
}

fn plan_files(env: &ProjectEnvironment, component: &ComponentDefinition) -> Vec<StagedFile> {
    let strip_types = env.transform_options().strip_types;
    component
        .files
        .iter()
        .map(|source| {
            let target = output_path(source, strip_types);
            StagedFile {
                absolute: env.resolve(&target),
                source: source.clone(),
                target,
            }
        })
        .collect()
}

/// Add `name` from the registry to the project described by `env`
#[allow(clippy::too_many_arguments)]
pub async fn add_component<C: CatalogConfig, P: Prompter, I: Installer>(
    config: &C,
    env: &ProjectEnvironment,
    registry: &Registry,
    fetcher: &ComponentFetcher,
    name: &str,
    options: AddOptions,
    prompter: &mut P,
    installer: &mut I,
) -> Result<AddOutcome> {
    if !env.styles_initialized
        && !ensure_initialized(config, env, options, prompter, installer).await?
    {
        return Ok(AddOutcome::Cancelled);
    }

    let component = registry.resolve(name)?;
    let files = plan_files(env, component);

    let existing: Vec<&StagedFile> = files.iter().filter(|f| f.absolute.exists()).collect();
    if !existing.is_empty() && !options.overwrite {
        let names: Vec<&str> = existing.iter().map(|f| f.target.as_str()).collect();
        prompter.warning(&format!("Already exists: {}", names.join(", ")))?;

        let confirmed = prompter.confirm(
            &format!("Overwrite {} existing file(s)?", existing.len()),
            false,
        )?;
        if !confirmed {
            prompter.info("Cancelled. No files were written.")?;
            return Ok(AddOutcome::Cancelled);
        }
    }

    let transform = env.transform_options();
    tracing::info!(
        component = %component.name,
        files = files.len(),
        strip_directive = transform.strip_directive,
        strip_types = transform.strip_types,
        "adding component"
    );

    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let raw = fetcher
            .fetch_file(&file.source)
            .await
            .map_err(|e| CatalogError::Fetch {
                path: file.source.clone(),
                reason: format!("{:#}", e),
            })?;

        let result = transform_file(&file.source, &raw, transform);
        let target = env.resolve(&result.path);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target, &result.content)
            .await
            .with_context(|| format!("Failed to write file: {}", target.display()))?;

        prompter.success(&format!("Added {}", result.path))?;
        written.push(target);
    }

    let mut dependencies_installed = true;
    for (deps, dev) in [
        (component.runtime_dependencies(), false),
        (component.build_dependencies(), true),
    ] {
        if deps.is_empty() {
            continue;
        }
        if !install_dependencies(env, &deps, dev, prompter, installer).await? {
            dependencies_installed = false;
        }
    }

    if !component.registry_dependencies.is_empty() {
        let hints: Vec<String> = component
            .registry_dependencies
            .iter()
            .map(|dep| format!("{} add {}", config.name(), dep))
            .collect();
        prompter.info(&format!(
            "{} also uses other components. Add them with: {}",
            component.display_name,
            hints.join(" && ")
        ))?;
    }

    Ok(AddOutcome::Added(AddReport {
        component: component.name.clone(),
        written,
        dependencies_installed,
    }))
}

/// Offer to run init when no Aurora stylesheet was found.
/// Returns `false` when the user declined.
async fn ensure_initialized<C: CatalogConfig, P: Prompter, I: Installer>(
    config: &C,
    env: &ProjectEnvironment,
    options: AddOptions,
    prompter: &mut P,
    installer: &mut I,
) -> Result<bool> {
    if options.yes {
        prompter.warning(&format!(
            "{} styles were not found. Continuing without init; run `{} init` to add the theme.",
            config.display_name(),
            config.name()
        ))?;
        return Ok(true);
    }

    let stylesheet = stylesheet_path(env);
    let prompt = if env.resolve(stylesheet).exists() {
        prompter.warning(&format!(
            "{} will be replaced with the {} theme",
            stylesheet,
            config.display_name()
        ))?;
        format!(
            "{} styles were not found. Run init first and replace {}?",
            config.display_name(),
            stylesheet
        )
    } else {
        format!(
            "{} styles were not found. Run init first?",
            config.display_name()
        )
    };

    if !prompter.confirm(&prompt, true)? {
        prompter.info(&format!(
            "Cancelled. Run `{} init` to set up the theme.",
            config.name()
        ))?;
        return Ok(false);
    }

    match init_project(config, env, InitOptions { yes: true }, prompter, installer).await? {
        InitOutcome::Initialized(_) => Ok(true),
        InitOutcome::Cancelled => Ok(false),
    }
}

/// Install packages, reporting failures instead of returning them.
/// Returns whether the install succeeded.
async fn install_dependencies<P: Prompter, I: Installer>(
    env: &ProjectEnvironment,
    deps: &[String],
    dev: bool,
    prompter: &mut P,
    installer: &mut I,
) -> Result<bool> {
    match installer
        .install(&env.root, env.package_manager, deps, dev)
        .await
    {
        Ok(()) => {
            prompter.success(&format!("Installed {}", deps.join(", ")))?;
            Ok(true)
        }
        Err(e) => {
            tracing::warn!(error = %e, "dependency install failed");
            prompter.error(&format!("Failed to install dependencies: {:#}", e))?;
            prompter.info(&format!(
                "Install them manually: {}",
                env.package_manager.install_command(deps, dev)
            ))?;
            Ok(false)
        }
    }
}
