//! Common assertion helpers for menu output validation

#![allow(dead_code)]

use predicates::prelude::*;

/// The menu shown outside a repository
pub fn non_repository_menu() -> impl Predicate<str> {
    predicates::str::contains("Not a git repository")
        .and(predicates::str::contains("Initialize a git repository here"))
}

/// The menu shown inside a repository
pub fn repository_menu() -> impl Predicate<str> {
    predicates::str::contains("Quick commit").and(predicates::str::contains("Branch management"))
}

pub fn farewell() -> impl Predicate<str> {
    predicates::str::contains("Goodbye!")
}

pub fn error_message(message: &str) -> impl Predicate<str> {
    predicates::str::contains("✕ Error:").and(predicates::str::contains(message.to_string()))
}
