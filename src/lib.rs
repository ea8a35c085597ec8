//! Git Assistant - an interactive terminal menu for everyday git chores.
//!
//! The program never touches repository internals itself: every operation is
//! a `git` subprocess whose text output is parsed and re-formatted for display.
//!
//! # Public API
//! - [`core`]: process runner, repository inspector, parsers, session and output
//! - [`commands`]: the menu actions (commit, branches, log, insights, ...)
//! - [`menu`]: the read-eval loop tying them together

pub mod commands;
pub mod core;
pub mod menu;

pub use core::{
    analyze_changes, analyze_file_types, AssistantConfig, AssistantError, CommandRunner,
    GitCli, Result, Session, StatusSummary, SystemRunner,
};
pub use menu::{run, MenuState};
