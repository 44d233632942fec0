//! Component registry
//!
//! A flat, ordered mapping from component name to the files and packages
//! that make up the component. Lookup is case-insensitive; listing follows
//! catalog order.

mod catalog;

use crate::error::CatalogError;

pub use catalog::builtin_components;

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefinition {
    /// Registry key and CLI argument (lowercase)
    pub name: String,

    /// Human-readable name
    pub display_name: String,

    /// Short summary shown in listings
    pub description: String,

    /// Relative file paths, in write order
    pub files: Vec<String>,

    /// Runtime packages required by the component
    pub dependencies: Vec<String>,

    /// Build-time only packages
    pub dev_dependencies: Vec<String>,

    /// Other catalog components this one uses (not installed automatically)
    pub registry_dependencies: Vec<String>,
}

impl ComponentDefinition {
    /// Runtime dependencies with duplicates removed, first occurrence wins
    pub fn runtime_dependencies(&self) -> Vec<String> {
        dedupe(&self.dependencies)
    }

    /// Dev dependencies with duplicates and runtime overlaps removed
    pub fn build_dependencies(&self) -> Vec<String> {
        dedupe(&self.dev_dependencies)
            .into_iter()
            .filter(|dep| !self.dependencies.contains(dep))
            .collect()
    }
}

fn dedupe(items: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(item) {
            seen.push(item.clone());
        }
    }
    seen
}

/// The component catalog
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<ComponentDefinition>,
}

impl Registry {
    /// Build a registry from definitions; later duplicates of a name are dropped
    pub fn new(components: Vec<ComponentDefinition>) -> Self {
        let mut unique: Vec<ComponentDefinition> = Vec::with_capacity(components.len());
        for mut component in components {
            component.name = component.name.to_lowercase();
            if unique.iter().any(|c| c.name == component.name) {
                tracing::warn!(name = %component.name, "duplicate registry entry ignored");
                continue;
            }
            if component.files.is_empty() {
                tracing::warn!(name = %component.name, "registry entry without files ignored");
                continue;
            }
            unique.push(component);
        }
        Self { components: unique }
    }

    /// The catalog shipped with the CLI
    pub fn builtin() -> Self {
        Self::new(builtin_components())
    }

    /// Find a component by name, ignoring case
    pub fn lookup(&self, name: &str) -> Option<&ComponentDefinition> {
        let key = name.to_lowercase();
        self.components.iter().find(|c| c.name == key)
    }

    /// Like `lookup`, but reports the available names when nothing matches
    pub fn resolve(&self, name: &str) -> Result<&ComponentDefinition, CatalogError> {
        self.lookup(name)
            .ok_or_else(|| CatalogError::ComponentNotFound {
                name: name.to_string(),
                available: self.names().iter().map(|n| n.to_string()).collect(),
            })
    }

    /// All entries in catalog order
    pub fn components(&self) -> &[ComponentDefinition] {
        &self.components
    }

    /// All component names in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
