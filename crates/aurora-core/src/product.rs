//! Catalog configuration trait for CLI binaries
//!
//! This trait defines the interface a binary implements to point the shared
//! add/init workflow at a concrete component registry.

use crate::fetcher::ComponentSource;
use anyhow::{Context, Result};
use url::Url;

/// Configuration trait for a component catalog product
///
/// Each binary implements this trait to define:
/// - Product identity (name, display name)
/// - Registry source URL and its override variable
/// - Documentation links
pub trait CatalogConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, env vars)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Base URL component files are fetched from
    fn default_registry_url(&self) -> &'static str;

    /// Environment variable name for overriding the registry URL
    fn registry_url_env(&self) -> &'static str;

    /// URL for the documentation site
    fn docs_url(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }

    /// Documentation page for a single component
    fn component_docs_url(&self, component: &str) -> String {
        format!(
            "{}/components/{}",
            self.docs_url().trim_end_matches('/'),
            component
        )
    }

    /// Resolve the remote registry source, honoring the env override
    fn registry_source(&self) -> Result<ComponentSource> {
        let url_str = std::env::var(self.registry_url_env())
            .unwrap_or_else(|_| self.default_registry_url().to_string());
        let url =
            Url::parse(&url_str).with_context(|| format!("Invalid registry URL: {}", url_str))?;
        Ok(ComponentSource::Remote(url))
    }
}
