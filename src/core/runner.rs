//! Subprocess execution for external commands.
//!
//! Every git invocation goes through [`CommandRunner`]. The production
//! [`SystemRunner`] spawns the process and buffers its combined output; tests
//! substitute a scripted runner so executors can be exercised without git.

use crate::core::error::{AssistantError, Result};
use std::path::Path;
use std::process::Command;

/// Buffered result of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output followed by standard error.
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn failed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

pub trait CommandRunner {
    /// Run `program` with `args` inside `workdir` and wait for it to exit.
    ///
    /// Only a launch failure is an `Err`; a non-zero exit is reported through
    /// [`CommandOutput::success`].
    fn run(&self, workdir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, workdir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
        log::debug!(
            "Running '{} {}' in {}",
            program,
            args.join(" "),
            workdir.display()
        );

        let output = Command::new(program)
            .args(args)
            .current_dir(workdir)
            .output()
            .map_err(|e| AssistantError::command_launch(program, e))?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        if !output.status.success() {
            log::debug!("'{program}' exited with {}", output.status);
        }

        Ok(CommandOutput {
            text,
            success: output.status.success(),
        })
    }
}
