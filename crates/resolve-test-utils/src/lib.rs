//! Shared test utilities for the resolve config plugin workspace.
//!
//! This crate provides on-disk project fixtures so crate test suites do not
//! each hand-roll temporary directory trees. It is a dev-dependency only,
//! never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for workspaces of packages

pub mod project;

pub use project::TestProject;
