//! Read-only repository queries over the git command line.
//!
//! [`GitCli`] borrows the session's runner and working directory and exposes
//! typed wrappers around the handful of git subcommands the menu needs. All
//! parsing is line-oriented and depends on git's porcelain and listing formats.
//!
//! # Public API
//! - [`GitCli`]: Command wrapper bound to one working directory
//! - [`RepoStats`]: Commit, tracked file and branch counts
//! - [`count_lines`]: Non-blank line count used by every counting query

use crate::core::{
    error::{AssistantError, Result},
    runner::{CommandOutput, CommandRunner},
};
use std::path::Path;

/// Branch reported when `git branch --show-current` fails.
pub const FALLBACK_BRANCH: &str = "main";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepoStats {
    pub commits: usize,
    pub files: usize,
    pub branches: usize,
}

/// Count non-blank lines; empty output counts as zero.
pub fn count_lines(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}

pub struct GitCli<'a> {
    runner: &'a dyn CommandRunner,
    program: &'a str,
    workdir: &'a Path,
}

impl<'a> GitCli<'a> {
    pub fn new(runner: &'a dyn CommandRunner, program: &'a str, workdir: &'a Path) -> Self {
        Self {
            runner,
            program,
            workdir,
        }
    }

    pub fn workdir(&self) -> &Path {
        self.workdir
    }

    /// Run a git command and return its output whatever the exit status.
    pub fn output(&self, args: &[&str]) -> Result<CommandOutput> {
        self.runner.run(self.workdir, self.program, args)
    }

    /// Run a git command, turning a non-zero exit into an error.
    pub fn run(&self, args: &[&str]) -> Result<String> {
        let output = self.output(args)?;
        if output.success {
            Ok(output.text)
        } else {
            Err(AssistantError::command_failed(
                format!("{} {}", self.program, args.join(" ")),
                &output.text,
            ))
        }
    }

    /// Output of a query whose failure only means "nothing to show".
    fn query_or_empty(&self, args: &[&str]) -> String {
        match self.run(args) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Query '{}' yielded nothing: {e}", args.join(" "));
                String::new()
            }
        }
    }

    /// True iff a `.git` entry sits directly in the working directory.
    pub fn is_repository(&self) -> bool {
        self.workdir.join(".git").exists()
    }

    pub fn current_branch(&self) -> String {
        match self.run(&["branch", "--show-current"]) {
            Ok(name) => name.trim().to_string(),
            Err(e) => {
                log::debug!("Falling back to '{FALLBACK_BRANCH}': {e}");
                FALLBACK_BRANCH.to_string()
            }
        }
    }

    pub fn status(&self) -> Result<String> {
        self.run(&["status", "--porcelain"])
    }

    pub fn has_changes(&self) -> Result<bool> {
        Ok(!self.status()?.trim().is_empty())
    }

    pub fn repo_stats(&self) -> RepoStats {
        let commits = self
            .query_or_empty(&["rev-list", "--count", "HEAD"])
            .trim()
            .parse()
            .unwrap_or(0);
        let files = count_lines(&self.query_or_empty(&["ls-files"]));
        let branches = count_lines(&self.query_or_empty(&["branch"]));

        RepoStats {
            commits,
            files,
            branches,
        }
    }

    pub fn tracked_files(&self) -> Result<Vec<String>> {
        Ok(self
            .run(&["ls-files"])?
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect())
    }

    /// `branch -v` lines as (is_current, line without the marker).
    pub fn branches_verbose(&self) -> Result<Vec<(bool, String)>> {
        Ok(self
            .run(&["branch", "-v"])?
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| match line.strip_prefix('*') {
                Some(rest) => (true, rest.trim_start().to_string()),
                None => (false, line.to_string()),
            })
            .collect())
    }

    pub fn recent_log(&self, limit: usize) -> Result<String> {
        self.run(&["log", "--oneline", &format!("-{limit}")])
    }

    pub fn last_commit_summary(&self) -> Option<String> {
        let summary = self.query_or_empty(&["log", "-1", "--pretty=format:%h - %s (%cr)"]);
        let summary = summary.trim();
        (!summary.is_empty()).then(|| summary.to_string())
    }

    pub fn commits_since(&self, since: &str) -> Result<usize> {
        Ok(count_lines(
            &self.run(&["log", &format!("--since={since}"), "--oneline"])?,
        ))
    }

    /// Value of the `size-pack` line from `count-objects -vH`.
    pub fn pack_size(&self) -> Option<String> {
        parse_pack_size(&self.query_or_empty(&["count-objects", "-vH"]))
    }
}

fn parse_pack_size(count_objects: &str) -> Option<String> {
    count_objects
        .lines()
        .find_map(|line| line.trim().strip_prefix("size-pack:"))
        .map(|size| size.trim().to_string())
}
