//! Aurora Core - Shared library for the Aurora UI component CLI
//!
//! This library adds "copy-paste" UI components to a consumer project: it
//! fetches component sources from a registry, downgrades them to match the
//! project (no `"use client"` outside Next.js, no types outside TypeScript),
//! writes them, and installs their packages.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Registry lookup, project inspection, source
//!   transformation, file fetching, install commands
//! - **Layer 2: Workflow Orchestration** - `add_component` and `init_project`,
//!   driven through the `Prompter` and `Installer` traits
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use aurora_core::{transform, ProjectEnvironment};
//!
//! let env = ProjectEnvironment::from_current_dir()?;
//! let js = transform::transform_file("components/ui/button.tsx", &source, env.transform_options());
//! ```

pub mod docs;
pub mod error;
pub mod fetcher;
pub mod init;
pub mod install;
pub mod product;
pub mod project;
pub mod prompt;
pub mod registry;
pub mod stager;
pub mod transform;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::CatalogError;
pub use fetcher::{ComponentFetcher, ComponentSource};
pub use init::{init_project, InitOptions, InitOutcome, InitReport};
pub use install::{Installer, ProcessInstaller};
pub use product::CatalogConfig;
pub use project::{Framework, PackageManager, ProjectEnvironment};
pub use prompt::Prompter;
pub use registry::{ComponentDefinition, Registry};
pub use stager::{add_component, AddOptions, AddOutcome, AddReport};
pub use transform::{transform_file, TransformOptions, TransformResult};

#[cfg(feature = "tui")]
pub use tui::{run_add, run_init};
