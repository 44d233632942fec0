//! Shared helpers for workflow integration tests

#![allow(dead_code)]

use anyhow::Result;
use aurora_core::{
    CatalogConfig, ComponentDefinition, ComponentFetcher, Installer, PackageManager, Prompter,
};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Product identity used by workflow messages
#[derive(Debug, Clone)]
pub struct TestCatalog;

impl CatalogConfig for TestCatalog {
    fn name(&self) -> &'static str {
        "sparkle"
    }

    fn display_name(&self) -> &'static str {
        "Sparkle UI"
    }

    fn default_registry_url(&self) -> &'static str {
        "https://example.com/registry"
    }

    fn registry_url_env(&self) -> &'static str {
        "SPARKLE_TEST_REGISTRY_URL"
    }

    fn docs_url(&self) -> &'static str {
        "https://example.com/docs"
    }

    fn cli_description(&self) -> &'static str {
        "test catalog"
    }
}

/// Registry checkout used as the component source
pub fn fixture_registry() -> ComponentFetcher {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/registry");
    ComponentFetcher::from_local(dir, "aurora-tests")
}

pub fn fixture(relative: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("missing fixture {}: {}", path.display(), e))
}

/// Temporary consumer project
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Plain JavaScript Vite project without a lockfile
    pub fn vite_js() -> Self {
        let project = Self::new();
        project.write(
            "package.json",
            r#"{"name": "app", "devDependencies": {"vite": "^5.0.0"}}"#,
        );
        project
    }

    /// Next.js TypeScript project with the theme already installed
    pub fn next_ts() -> Self {
        let project = Self::new();
        project
            .write(
                "package.json",
                r#"{"name": "app", "dependencies": {"next": "14.2.0", "react": "18.3.0"}}"#,
            )
            .write("tsconfig.json", "{}")
            .write("app/globals.css", aurora_core::init::THEME_CSS);
        project
    }

    /// Files under `dir`, relative to the project root, sorted
    pub fn files_in(&self, dir: &str) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.path(dir)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| format!("{}/{}", dir, e.file_name().to_string_lossy()))
            .collect();
        names.sort();
        names
    }
}

pub fn component(name: &str, files: &[&str], deps: &[&str]) -> ComponentDefinition {
    ComponentDefinition {
        name: name.to_string(),
        display_name: name.to_string(),
        description: format!("{} for tests", name),
        files: files.iter().map(|f| f.to_string()).collect(),
        dependencies: deps.iter().map(|d| d.to_string()).collect(),
        dev_dependencies: vec![],
        registry_dependencies: vec![],
    }
}

/// Prompter answering confirmations from a script and recording output
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn said(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, prompt: &str, _initial: bool) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("unexpected prompt: {}", prompt))
    }

    fn info(&mut self, message: &str) -> Result<()> {
        self.messages.push(format!("info: {}", message));
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.messages.push(format!("warning: {}", message));
        Ok(())
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.messages.push(format!("success: {}", message));
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.messages.push(format!("error: {}", message));
        Ok(())
    }
}

/// Installer that records commands instead of running them
#[derive(Debug, Default)]
pub struct RecordingInstaller {
    pub commands: Vec<String>,
    pub fail: bool,
}

impl RecordingInstaller {
    pub fn failing() -> Self {
        Self {
            commands: Vec::new(),
            fail: true,
        }
    }
}

impl Installer for RecordingInstaller {
    async fn install(
        &mut self,
        _root: &Path,
        package_manager: PackageManager,
        deps: &[String],
        dev: bool,
    ) -> Result<()> {
        self.commands
            .push(package_manager.install_command(deps, dev));
        if self.fail {
            anyhow::bail!("{} is not available", package_manager);
        }
        Ok(())
    }
}
