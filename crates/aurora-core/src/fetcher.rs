//! Component file fetching from the remote registry or a local directory
//!
//! Remote files live at `<base url>/<relative path>`. A local directory with
//! the same layout can stand in for the registry during development.

use crate::product::CatalogConfig;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;
use url::Url;

/// Component source - either remote URL or local directory
#[derive(Debug, Clone)]
pub enum ComponentSource {
    Remote(Url),
    Local(PathBuf),
}

impl ComponentSource {
    /// Create a local component source from a path
    pub fn local(path: PathBuf) -> Self {
        Self::Local(path)
    }
}

/// Component fetcher - retrieves raw component files, one request per file
pub struct ComponentFetcher {
    source: ComponentSource,
    client: reqwest::Client,
}

impl ComponentFetcher {
    /// Create a new fetcher with a custom user agent
    pub fn new(source: ComponentSource, user_agent: &str) -> Self {
        Self {
            source,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a fetcher for the product's remote registry
    pub fn from_config<C: CatalogConfig>(config: &C) -> Result<Self> {
        let source = config.registry_source()?;
        Ok(Self::new(source, config.user_agent()))
    }

    /// Create a fetcher for a local registry checkout
    pub fn from_local(path: PathBuf, user_agent: &str) -> Self {
        Self::new(ComponentSource::local(path), user_agent)
    }

    /// Build a URL by appending a relative file path, preserving query parameters
    fn build_url(base: &Url, relative_path: &str) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("URL cannot have path segments: {}", base))?
            .pop_if_empty()
            .extend(relative_path.split('/').filter(|s| !s.is_empty()));
        Ok(url)
    }

    /// Fetch a component file as text
    pub async fn fetch_file(&self, relative_path: &str) -> Result<String> {
        match &self.source {
            ComponentSource::Remote(base_url) => {
                let url = Self::build_url(base_url, relative_path)?;
                tracing::debug!(%url, "fetching component file");

                let response = self
                    .client
                    .get(url.clone())
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch {}", url))?;

                if !response.status().is_success() {
                    anyhow::bail!("Failed to fetch {}: HTTP {}", url, response.status());
                }

                response
                    .text()
                    .await
                    .with_context(|| format!("Failed to read response body from {}", url))
            }
            ComponentSource::Local(path) => {
                let file_path = path.join(relative_path);
                tracing::debug!(path = %file_path.display(), "reading component file");
                fs::read_to_string(&file_path)
                    .await
                    .with_context(|| format!("Failed to read {}", file_path.display()))
            }
        }
    }
}
