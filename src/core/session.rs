//! Session context shared by every menu action.
//!
//! A [`Session`] owns the mutable state of one run: the working directory, the
//! action history, the quick-commit templates and the input stream. It is
//! passed explicitly to each executor instead of living in a global.

use crate::core::{
    config::AssistantConfig,
    error::{AssistantError, Result},
    git::GitCli,
    history::ActionHistory,
    output::{print_prompt, print_success},
    runner::CommandRunner,
};
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub struct Session {
    workdir: PathBuf,
    quick_commits: Vec<String>,
    history: ActionHistory,
    git_binary: String,
    log_limit: usize,
    clear_screen: bool,
    runner: Box<dyn CommandRunner>,
    input: Box<dyn BufRead>,
}

impl Session {
    pub fn new(
        workdir: PathBuf,
        config: AssistantConfig,
        runner: Box<dyn CommandRunner>,
        input: Box<dyn BufRead>,
    ) -> Self {
        Self {
            workdir,
            quick_commits: config.quick_commits,
            history: ActionHistory::new(),
            git_binary: config.git_binary,
            log_limit: config.log_limit,
            clear_screen: config.clear_screen,
            runner,
            input,
        }
    }

    pub fn git(&self) -> GitCli<'_> {
        GitCli::new(self.runner.as_ref(), &self.git_binary, &self.workdir)
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn quick_commits(&self) -> &[String] {
        &self.quick_commits
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn record(&mut self, action: impl Into<String>) {
        let action = action.into();
        log::info!("{action}");
        self.history.record(action);
    }

    pub fn log_limit(&self) -> usize {
        self.log_limit
    }

    pub fn clear_screen(&self) -> bool {
        self.clear_screen
    }

    /// Read one trimmed line; end of input is [`AssistantError::InputClosed`].
    pub fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AssistantError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn prompt(&mut self, prompt: &str) -> Result<String> {
        print_prompt(prompt);
        self.read_line()
    }

    /// Prompt for a value that must not be empty.
    pub fn prompt_required(&mut self, prompt: &str, what: &str) -> Result<String> {
        let value = self.prompt(prompt)?;
        if value.is_empty() {
            return Err(AssistantError::missing_input(what));
        }
        Ok(value)
    }

    /// Ask a yes/no question; only `y` or `Y` confirms.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.prompt(&format!("{question} (y/N): "))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    /// Switch to another directory and start a fresh history.
    pub fn set_working_directory(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return Err(AssistantError::missing_input("Directory path"));
        }

        let absolute = std::path::absolute(path)?;
        if !absolute.is_dir() {
            return Err(AssistantError::directory_not_found(absolute));
        }

        log::debug!("Working directory set to {}", absolute.display());
        self.workdir = absolute;
        self.history.clear();
        print_success(&format!("Working directory: {}", self.workdir.display()));
        Ok(())
    }
}
