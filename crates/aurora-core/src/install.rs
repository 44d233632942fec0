//! Dependency installation through the project's package manager
//!
//! The install command line is a pure function of the package manager and the
//! package list (see [`PackageManager::install_command`]). Running it goes
//! through the [`Installer`] trait so workflows can be exercised without
//! spawning processes.

use crate::project::PackageManager;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single install run (10 minutes)
const INSTALL_TIMEOUT: Duration = Duration::from_secs(600);

/// Something that can install packages into a project
#[allow(async_fn_in_trait)]
pub trait Installer {
    /// Install `deps` in `root`; errors describe the failure, they never panic
    async fn install(
        &mut self,
        root: &Path,
        package_manager: PackageManager,
        deps: &[String],
        dev: bool,
    ) -> Result<()>;
}

/// Installer that runs the real package manager and streams its output
#[derive(Debug, Default)]
pub struct ProcessInstaller;

impl Installer for ProcessInstaller {
    async fn install(
        &mut self,
        root: &Path,
        package_manager: PackageManager,
        deps: &[String],
        dev: bool,
    ) -> Result<()> {
        let cmd = package_manager.install_command(deps, dev);
        println!();
        println!("{} {}", "Running:".dimmed(), cmd.yellow());
        println!();

        let mut child = TokioCommand::new(package_manager.binary())
            .args(package_manager.install_args(deps, dev))
            .current_dir(root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| anyhow::anyhow!("Failed to start {}: {}", package_manager, e))?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| anyhow::anyhow!("Failed to capture stdout"))?;
        let stderr = child
            .stderr
            .take()
            .ok_or_else(|| anyhow::anyhow!("Failed to capture stderr"))?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let output_task = async {
            let mut stdout_open = true;
            let mut stderr_open = true;
            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        };

        if timeout(INSTALL_TIMEOUT, output_task).await.is_err() {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "Installation timed out after {} seconds",
                INSTALL_TIMEOUT.as_secs()
            );
        }

        match timeout(Duration::from_secs(5), child.wait()).await {
            Ok(Ok(status)) => {
                println!();
                if status.success() {
                    Ok(())
                } else {
                    anyhow::bail!(
                        "{} exited with code {}",
                        package_manager,
                        status.code().unwrap_or(-1)
                    );
                }
            }
            Ok(Err(e)) => {
                anyhow::bail!("Failed to wait for {}: {}", package_manager, e);
            }
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!("{} did not exit after closing its output", package_manager);
            }
        }
    }
}
