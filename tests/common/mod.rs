//! Shared test utilities for git-assistant integration tests
//!
//! Tests run the real binary against temporary git repositories and feed
//! menu choices through stdin.

pub mod assertions;
pub mod repository;
