//! Porcelain status parsing.
//!
//! This module turns the output of `git status --porcelain` into a
//! [`StatusSummary`]. Classification looks only at the first character of the
//! two-character status code, so `M ` (staged) and `MM` land in the same
//! bucket while ` M` (worktree-only) is not classified at all.
//!
//! # Public API
//! - [`ChangeKind`]: The four buckets a status line can fall into
//! - [`StatusSummary`]: Bucketed file lists from one status query
//! - [`Suggestion`]: Follow-up hints derived from a summary
//! - [`analyze_changes`]: Parse porcelain text into a summary

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Untracked,
}

impl ChangeKind {
    /// Map the first character of a porcelain status code to a bucket
    pub fn from_code(code: u8) -> Option<ChangeKind> {
        match code {
            b'A' => Some(ChangeKind::Added),
            b'M' => Some(ChangeKind::Modified),
            b'D' => Some(ChangeKind::Deleted),
            b'?' => Some(ChangeKind::Untracked),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Added => "Added",
            ChangeKind::Modified => "Modified",
            ChangeKind::Deleted => "Deleted",
            ChangeKind::Untracked => "Untracked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    StageAndCommit,
    VerifyDeletion,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::StageAndCommit => {
                write!(f, "Use 'Quick commit' or 'Sync' to stage and commit these changes")
            }
            Suggestion::VerifyDeletion => {
                write!(f, "Files were deleted, verify the deletion is intentional")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub untracked: Vec<String>,
}

impl StatusSummary {
    pub fn files(&self, kind: ChangeKind) -> &[String] {
        match kind {
            ChangeKind::Added => &self.added,
            ChangeKind::Modified => &self.modified,
            ChangeKind::Deleted => &self.deleted,
            ChangeKind::Untracked => &self.untracked,
        }
    }

    fn push(&mut self, kind: ChangeKind, path: String) {
        match kind {
            ChangeKind::Added => self.added.push(path),
            ChangeKind::Modified => self.modified.push(path),
            ChangeKind::Deleted => self.deleted.push(path),
            ChangeKind::Untracked => self.untracked.push(path),
        }
    }

    pub fn suggestions(&self) -> Vec<Suggestion> {
        let mut suggestions = Vec::new();
        if !self.untracked.is_empty() || !self.modified.is_empty() || !self.added.is_empty() {
            suggestions.push(Suggestion::StageAndCommit);
        }
        if !self.deleted.is_empty() {
            suggestions.push(Suggestion::VerifyDeletion);
        }
        suggestions
    }
}

/// Parse `git status --porcelain` output into buckets.
///
/// Lines shorter than three characters are skipped.
pub fn analyze_changes(status: &str) -> StatusSummary {
    let mut summary = StatusSummary::default();

    for line in status.lines() {
        if line.len() < 3 {
            continue;
        }
        let Some(path) = line.get(3..) else {
            continue;
        };
        if let Some(kind) = ChangeKind::from_code(line.as_bytes()[0]) {
            summary.push(kind, path.to_string());
        }
    }

    summary
}
