//! Diff line classification and styling.
//!
//! This module is the single place that decides how a line of unified diff
//! output is rendered, mirroring the way status colors are centralized.
//!
//! # Color Scheme
//! - **File header** (`diff --git`): bold
//! - **Index / file markers / hunk headers**: cyan
//! - **Added lines**: green
//! - **Removed lines**: red
//! - **Context and blank lines**: unstyled

use colored::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffLineKind {
    FileHeader,
    Index,
    FileMarker,
    Hunk,
    Added,
    Removed,
    Blank,
    Context,
}

impl DiffLineKind {
    pub fn classify(line: &str) -> DiffLineKind {
        if line.starts_with("diff --git") {
            DiffLineKind::FileHeader
        } else if line.starts_with("index ") {
            DiffLineKind::Index
        } else if line.starts_with("+++") || line.starts_with("---") {
            DiffLineKind::FileMarker
        } else if line.starts_with("@@") {
            DiffLineKind::Hunk
        } else if line.starts_with('+') {
            DiffLineKind::Added
        } else if line.starts_with('-') {
            DiffLineKind::Removed
        } else if line.is_empty() {
            DiffLineKind::Blank
        } else {
            DiffLineKind::Context
        }
    }
}

/// Single function to apply styling based on the diff line kind
pub fn style_diff_line(kind: DiffLineKind, line: &str) -> ColoredString {
    match kind {
        DiffLineKind::FileHeader => line.bold(),
        DiffLineKind::Index | DiffLineKind::FileMarker | DiffLineKind::Hunk => line.cyan(),
        DiffLineKind::Added => line.green(),
        DiffLineKind::Removed => line.red(),
        DiffLineKind::Blank | DiffLineKind::Context => line.normal(),
    }
}

/// Classify and style every line of a diff
pub fn colorize_diff(diff: &str) -> Vec<ColoredString> {
    diff.lines()
        .map(|line| style_diff_line(DiffLineKind::classify(line), line))
        .collect()
}
