//! Filesystem probes for the consumer project

use super::{Framework, PackageManager};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Lockfiles in priority order; the first one present wins
const LOCKFILES: &[(&str, PackageManager)] = &[
    ("bun.lockb", PackageManager::Bun),
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
];

/// Declared dependencies that identify a framework, in priority order
const FRAMEWORK_MARKERS: &[(&str, Framework)] = &[
    ("next", Framework::Next),
    ("vite", Framework::Vite),
    ("react-scripts", Framework::Cra),
];

/// Stylesheets checked for an existing Aurora theme, in order
pub const STYLESHEET_CANDIDATES: &[&str] = &[
    "src/index.css",
    "src/App.css",
    "app/globals.css",
    "styles/globals.css",
];

const THEME_VARIABLE_MARKER: &str = "--primary:";
const THEME_DIRECTIVE_MARKER: &str = "@theme inline";

/// The parts of package.json we care about
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageManifest {
    fn declares(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}

fn read_manifest(root: &Path) -> Option<PackageManifest> {
    let content = std::fs::read_to_string(root.join("package.json")).ok()?;
    match serde_json::from_str(&content) {
        Ok(manifest) => Some(manifest),
        Err(e) => {
            tracing::debug!(error = %e, "package.json is not valid JSON");
            None
        }
    }
}

/// Check if a package.json exists at the project root
pub fn has_manifest(root: &Path) -> bool {
    root.join("package.json").is_file()
}

/// Pick the package manager from the lockfiles present, defaulting to npm
pub fn detect_package_manager(root: &Path) -> PackageManager {
    LOCKFILES
        .iter()
        .find(|(lockfile, _)| root.join(lockfile).exists())
        .map(|(_, pm)| *pm)
        .unwrap_or(PackageManager::Npm)
}

/// Check if the project is configured for TypeScript
pub fn detect_typescript(root: &Path) -> bool {
    root.join("tsconfig.json").exists()
}

/// Determine the framework from declared dependency names only
pub fn detect_framework(root: &Path) -> Framework {
    let Some(manifest) = read_manifest(root) else {
        return Framework::Unknown;
    };

    FRAMEWORK_MARKERS
        .iter()
        .find(|(dep, _)| manifest.declares(dep))
        .map(|(_, framework)| *framework)
        .unwrap_or(Framework::Unknown)
}

/// Check whether any candidate stylesheet already carries the Aurora theme
pub fn detect_styles_initialized(root: &Path) -> bool {
    for candidate in STYLESHEET_CANDIDATES {
        let path = root.join(candidate);
        if !path.is_file() {
            continue;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                if content.contains(THEME_VARIABLE_MARKER) && content.contains(THEME_DIRECTIVE_MARKER)
                {
                    tracing::debug!(path = %path.display(), "found initialized stylesheet");
                    return true;
                }
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping unreadable stylesheet");
            }
        }
    }

    false
}
