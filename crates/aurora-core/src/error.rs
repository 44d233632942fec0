//! Domain errors surfaced to the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Failures that end a command with a non-zero exit status
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Component '{name}' not found. Available components: {}", available.join(", "))]
    ComponentNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("No package.json found in {}. Run this command from your project root.", root.display())]
    ManifestNotFound { root: PathBuf },

    #[error("Failed to fetch {path}: {reason}")]
    Fetch { path: String, reason: String },
}
