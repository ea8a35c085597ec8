//! Core building blocks shared by the menu and its actions.
//!
//! # Module Organization
//! - [`runner`]: Subprocess execution behind the [`CommandRunner`] trait
//! - [`git`]: Read-only repository queries over the git CLI
//! - [`git_status`]: Porcelain status parsing
//! - [`file_types`]: Extension histogram of tracked files
//! - [`history`]: Bounded action history
//! - [`session`]: Explicit per-run context
//! - [`config`] / [`dirs`]: Optional JSON configuration
//! - [`colors`] / [`output`]: Terminal styling
//! - [`error`]: Error types and the crate `Result`

pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod file_types;
pub mod git;
pub mod git_status;
pub mod history;
pub mod output;
pub mod runner;
pub mod session;

// === Errors ===
pub use error::{AssistantError, Result};

// === Process execution and repository queries ===
pub use git::{count_lines, GitCli, RepoStats};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};

// === Parsing ===
pub use file_types::{analyze_file_types, FileTypeHistogram};
pub use git_status::{analyze_changes, ChangeKind, StatusSummary, Suggestion};

// === Session state ===
pub use config::AssistantConfig;
pub use history::{ActionHistory, HistoryEntry};
pub use session::Session;

// === Output formatting ===
pub use colors::{colorize_diff, DiffLineKind};
pub use output::{print_error, print_info, print_success};
