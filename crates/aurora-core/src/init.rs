//! Project initialization: theme stylesheet, component directory, base packages

use crate::error::CatalogError;
use crate::install::Installer;
use crate::product::CatalogConfig;
use crate::project::{has_manifest, ProjectEnvironment};
use crate::prompt::Prompter;
use crate::transform::transform_file;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// Runtime packages every Aurora component builds on
pub const BASE_DEPENDENCIES: &[&str] = &["clsx", "tailwind-merge"];

/// Directory components are added to
pub const COMPONENTS_DIR: &str = "components/ui";

/// Registry-relative path of the class name helper
pub const UTILS_PATH: &str = "lib/utils.ts";

const NEXT_STYLESHEET: &str = "app/globals.css";
const DEFAULT_STYLESHEET: &str = "styles/globals.css";

/// Theme variables for light and dark mode, exposed to Tailwind
pub const THEME_CSS: &str = r#"@import "tailwindcss";

@custom-variant dark (&:is(.dark *));

:root {
  --radius: 0.75rem;
  --background: oklch(1 0 0);
  --foreground: oklch(0.145 0 0);
  --card: oklch(1 0 0);
  --card-foreground: oklch(0.145 0 0);
  --primary: oklch(0.55 0.22 264);
  --primary-foreground: oklch(0.985 0 0);
  --secondary: oklch(0.97 0 0);
  --secondary-foreground: oklch(0.205 0 0);
  --muted: oklch(0.97 0 0);
  --muted-foreground: oklch(0.556 0 0);
  --accent: oklch(0.93 0.04 264);
  --accent-foreground: oklch(0.205 0 0);
  --destructive: oklch(0.577 0.245 27.325);
  --border: oklch(0.922 0 0);
  --input: oklch(0.922 0 0);
  --ring: oklch(0.55 0.22 264);
}

.dark {
  --background: oklch(0.145 0 0);
  --foreground: oklch(0.985 0 0);
  --card: oklch(0.205 0 0);
  --card-foreground: oklch(0.985 0 0);
  --primary: oklch(0.68 0.19 264);
  --primary-foreground: oklch(0.145 0 0);
  --secondary: oklch(0.269 0 0);
  --secondary-foreground: oklch(0.985 0 0);
  --muted: oklch(0.269 0 0);
  --muted-foreground: oklch(0.708 0 0);
  --accent: oklch(0.32 0.06 264);
  --accent-foreground: oklch(0.985 0 0);
  --destructive: oklch(0.704 0.191 22.216);
  --border: oklch(1 0 0 / 10%);
  --input: oklch(1 0 0 / 15%);
  --ring: oklch(0.68 0.19 264);
}

@theme inline {
  --radius-sm: calc(var(--radius) - 4px);
  --radius-md: calc(var(--radius) - 2px);
  --radius-lg: var(--radius);
  --color-background: var(--background);
  --color-foreground: var(--foreground);
  --color-card: var(--card);
  --color-card-foreground: var(--card-foreground);
  --color-primary: var(--primary);
  --color-primary-foreground: var(--primary-foreground);
  --color-secondary: var(--secondary);
  --color-secondary-foreground: var(--secondary-foreground);
  --color-muted: var(--muted);
  --color-muted-foreground: var(--muted-foreground);
  --color-accent: var(--accent);
  --color-accent-foreground: var(--accent-foreground);
  --color-destructive: var(--destructive);
  --color-border: var(--border);
  --color-input: var(--input);
  --color-ring: var(--ring);
}

@layer base {
  * {
    @apply border-border outline-ring/50;
  }
  body {
    @apply bg-background text-foreground;
  }
}
"#;

/// `cn` helper merging conditional class names, authored like a component
pub const UTILS_SOURCE: &str = r#"import { type ClassValue, clsx } from "clsx";
import { twMerge } from "tailwind-merge";

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs));
}
"#;

#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    /// Skip the confirmation prompt
    pub yes: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub stylesheet: PathBuf,
    /// `None` when a helper already existed
    pub utils: Option<PathBuf>,
    pub dependencies_installed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized(InitReport),
    Cancelled,
}

/// Where the theme stylesheet goes: the Next.js app stylesheet when the
/// project already has one, otherwise `styles/globals.css`
pub fn stylesheet_path(env: &ProjectEnvironment) -> &'static str {
    if env.resolve(NEXT_STYLESHEET).exists() {
        NEXT_STYLESHEET
    } else {
        DEFAULT_STYLESHEET
    }
}

/// Set up the project for Aurora components
pub async fn init_project<C: CatalogConfig, P: Prompter, I: Installer>(
    config: &C,
    env: &ProjectEnvironment,
    options: InitOptions,
    prompter: &mut P,
    installer: &mut I,
) -> Result<InitOutcome> {
    if !has_manifest(&env.root) {
        return Err(CatalogError::ManifestNotFound {
            root: env.root.clone(),
        }
        .into());
    }

    let stylesheet = stylesheet_path(env);
    let stylesheet_abs = env.resolve(stylesheet);

    if !options.yes {
        if stylesheet_abs.exists() {
            prompter.warning(&format!(
                "{} will be replaced with the {} theme",
                stylesheet,
                config.display_name()
            ))?;
        }
        let confirmed = prompter.confirm(
            &format!(
                "Write the theme to {} and create {}?",
                stylesheet, COMPONENTS_DIR
            ),
            true,
        )?;
        if !confirmed {
            prompter.info("Initialization cancelled.")?;
            return Ok(InitOutcome::Cancelled);
        }
    }

    tracing::info!(root = %env.root.display(), stylesheet, "initializing project");

    if let Some(parent) = stylesheet_abs.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&stylesheet_abs, THEME_CSS)
        .await
        .with_context(|| format!("Failed to write file: {}", stylesheet_abs.display()))?;
    prompter.success(&format!("Wrote theme to {}", stylesheet))?;

    let components_dir = env.resolve(COMPONENTS_DIR);
    fs::create_dir_all(&components_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", components_dir.display()))?;
    prompter.success(&format!("Created {}", COMPONENTS_DIR))?;

    let utils = write_utils(env, prompter).await?;

    let deps: Vec<String> = BASE_DEPENDENCIES.iter().map(|d| d.to_string()).collect();
    let dependencies_installed = match installer
        .install(&env.root, env.package_manager, &deps, false)
        .await
    {
        Ok(()) => {
            prompter.success(&format!("Installed {}", deps.join(", ")))?;
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "base package install failed");
            prompter.error(&format!("Failed to install dependencies: {:#}", e))?;
            prompter.info(&format!(
                "Install them manually: {}",
                env.package_manager.install_command(&deps, false)
            ))?;
            false
        }
    };

    Ok(InitOutcome::Initialized(InitReport {
        stylesheet: stylesheet_abs,
        utils,
        dependencies_installed,
    }))
}

async fn write_utils<P: Prompter>(
    env: &ProjectEnvironment,
    prompter: &mut P,
) -> Result<Option<PathBuf>> {
    let result = transform_file(UTILS_PATH, UTILS_SOURCE, env.transform_options());
    let target = env.resolve(&result.path);

    if target.exists() {
        prompter.info(&format!("Keeping existing {}", result.path))?;
        return Ok(None);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(&target, &result.content)
        .await
        .with_context(|| format!("Failed to write file: {}", target.display()))?;
    prompter.success(&format!("Added {}", result.path))?;

    Ok(Some(target))
}
