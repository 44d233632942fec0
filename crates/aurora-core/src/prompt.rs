//! User interaction used by the add/init workflows
//!
//! Workflows only talk to the user through this trait. The `tui` module
//! implements it with cliclack; tests implement it with scripted answers.

use anyhow::Result;

pub trait Prompter {
    /// Ask a yes/no question
    fn confirm(&mut self, prompt: &str, initial: bool) -> Result<bool>;

    fn info(&mut self, message: &str) -> Result<()>;

    fn warning(&mut self, message: &str) -> Result<()>;

    fn success(&mut self, message: &str) -> Result<()>;

    fn error(&mut self, message: &str) -> Result<()>;
}
