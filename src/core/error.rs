//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`AssistantError`] which covers every failure the menu can
//! report. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the common failure scenarios.
//!
//! # Public API
//! - [`AssistantError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, AssistantError>`
//!
//! # Error Categories
//! - **Subprocess**: launch failures and non-zero exits, always recoverable
//! - **Validation**: empty required input, missing directories
//! - **Startup**: unresolvable working directory, unreadable configuration

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for git-assistant
#[derive(Error, Debug)]
pub enum AssistantError {
    // Subprocess errors
    #[error("Failed to launch '{program}': {source}")]
    CommandLaunch {
        program: String,
        source: std::io::Error,
    },

    #[error("'{command}' failed: {output}")]
    CommandFailed { command: String, output: String },

    #[error("Merge of '{branch}' stopped with conflicts: {output}")]
    MergeConflict { branch: String, output: String },

    #[error("Could not obtain the diff for commit {commit}")]
    DiffUnavailable { commit: String },

    // Validation errors
    #[error("{what} is required")]
    MissingInput { what: String },

    #[error("Directory does not exist: {path}")]
    DirectoryNotFound { path: PathBuf },

    // Startup errors
    #[error("Cannot resolve the current working directory: {0}")]
    WorkingDirectory(std::io::Error),

    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results using AssistantError
pub type Result<T> = std::result::Result<T, AssistantError>;

impl AssistantError {
    /// Create a launch failure for the given program
    pub fn command_launch(program: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandLaunch {
            program: program.into(),
            source,
        }
    }

    /// Create a non-zero exit failure; the output is trimmed for display
    pub fn command_failed(command: impl Into<String>, output: &str) -> Self {
        Self::CommandFailed {
            command: command.into(),
            output: output.trim().to_string(),
        }
    }

    /// Create a merge conflict error
    pub fn merge_conflict(branch: impl Into<String>, output: &str) -> Self {
        Self::MergeConflict {
            branch: branch.into(),
            output: output.trim().to_string(),
        }
    }

    /// Create a missing input error naming the expected value
    pub fn missing_input(what: impl Into<String>) -> Self {
        Self::MissingInput { what: what.into() }
    }

    /// Create a directory not found error
    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }

    /// True for errors caused by the user rather than by git or the system
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingInput { .. } | Self::DirectoryNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_display() {
        let err = AssistantError::missing_input("Branch name");
        assert_eq!(err.to_string(), "Branch name is required");
        assert!(err.is_validation());
    }

    #[test]
    fn test_command_failed_trims_output() {
        let err = AssistantError::command_failed("git merge topic", "  conflict\n");
        assert_eq!(err.to_string(), "'git merge topic' failed: conflict");
        assert!(!err.is_validation());
    }

    #[test]
    fn test_command_launch_mentions_program() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = AssistantError::command_launch("git", io_err);
        assert!(err.to_string().contains("'git'"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_directory_not_found() {
        let err = AssistantError::directory_not_found("/nope/here");
        assert!(err.to_string().contains("/nope/here"));
        assert!(err.is_validation());
    }

    #[test]
    fn test_config_parse_failed() {
        let path = PathBuf::from("/test/config.json");
        let json_err = serde_json::from_str::<serde_json::Value>("{ broken").unwrap_err();
        let err = AssistantError::ConfigParseFailed {
            path,
            source: json_err,
        };
        assert!(err.to_string().contains("/test/config.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }
}
