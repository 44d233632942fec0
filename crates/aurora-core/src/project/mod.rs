//! Project inspection
//!
//! This module provides:
//! - Package manager detection from lockfiles
//! - TypeScript and framework detection
//! - Detection of an existing Aurora stylesheet
//!
//! Everything is gathered once per command into a [`ProjectEnvironment`]
//! that is passed explicitly to the add/init workflows.

pub mod detect;

use crate::transform::TransformOptions;
use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

pub use detect::{
    detect_framework, detect_package_manager, detect_styles_initialized, detect_typescript,
    has_manifest, STYLESHEET_CANDIDATES,
};

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// Executable name
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// Arguments for installing `deps`, optionally as dev dependencies
    pub fn install_args(&self, deps: &[String], dev: bool) -> Vec<String> {
        let (verb, dev_flag) = match self {
            PackageManager::Npm => ("install", "--save-dev"),
            PackageManager::Yarn | PackageManager::Pnpm | PackageManager::Bun => ("add", "-D"),
        };

        let mut args = vec![verb.to_string()];
        if dev {
            args.push(dev_flag.to_string());
        }
        args.extend(deps.iter().cloned());
        args
    }

    /// Full install command line, as a user would type it
    pub fn install_command(&self, deps: &[String], dev: bool) -> String {
        let mut parts = vec![self.binary().to_string()];
        parts.extend(self.install_args(deps, dev));
        parts.join(" ")
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// Frontend framework declared in package.json
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    Next,
    Vite,
    Cra,
    Unknown,
}

impl Framework {
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Next => "Next.js",
            Framework::Vite => "Vite",
            Framework::Cra => "Create React App",
            Framework::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Facts about the consumer project, computed fresh for each command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectEnvironment {
    pub root: PathBuf,
    pub package_manager: PackageManager,
    pub uses_typescript: bool,
    pub framework: Framework,
    pub styles_initialized: bool,
}

impl ProjectEnvironment {
    /// Probe the project rooted at `root`
    pub fn detect(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let env = Self {
            package_manager: detect_package_manager(&root),
            uses_typescript: detect_typescript(&root),
            framework: detect_framework(&root),
            styles_initialized: detect_styles_initialized(&root),
            root,
        };
        tracing::debug!(
            root = %env.root.display(),
            package_manager = %env.package_manager,
            typescript = env.uses_typescript,
            framework = %env.framework,
            styles = env.styles_initialized,
            "detected project environment"
        );
        env
    }

    /// Probe the current working directory
    pub fn from_current_dir() -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        Ok(Self::detect(cwd))
    }

    /// How component sources must be rewritten for this project
    pub fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            strip_directive: self.framework != Framework::Next,
            strip_types: !self.uses_typescript,
        }
    }

    /// Absolute path for a registry-relative file
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(Path::new(relative))
    }
}
