//! Catalog listing and documentation links

use crate::product::CatalogConfig;
use crate::registry::Registry;
use anyhow::Result;
use colored::Colorize;

/// Print every component in catalog order
pub fn print_catalog<C: CatalogConfig>(config: &C, registry: &Registry) {
    println!(
        "{}",
        format!("{} components", config.display_name()).cyan().bold()
    );
    println!();

    let width = registry
        .components()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(0);

    for component in registry.components() {
        println!(
            "  {}  {}",
            format!("{:width$}", component.name, width = width).green(),
            component.description.dimmed()
        );
    }

    println!();
    println!(
        "Add one with {}",
        format!("{} add <component>", config.name()).yellow()
    );
}

/// Documentation URL for the site or for a single component
pub fn docs_url<C: CatalogConfig>(
    config: &C,
    registry: &Registry,
    component: Option<&str>,
) -> Result<String> {
    match component {
        Some(name) => {
            let component = registry.resolve(name)?;
            Ok(config.component_docs_url(&component.name))
        }
        None => Ok(config.docs_url().to_string()),
    }
}

/// Open the documentation in the default browser
pub fn open_docs<C: CatalogConfig>(
    config: &C,
    registry: &Registry,
    component: Option<&str>,
) -> Result<()> {
    let url = docs_url(config, registry, component)?;
    println!("{}", format!("Opening {} in your browser...", url).cyan());
    open::that(&url)?;
    Ok(())
}
