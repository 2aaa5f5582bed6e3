//! Error types for resolve-meta

use crate::validation::Violation;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Invalid options for {plugin}:\n{}", render_violations(.violations))]
    InvalidOptions {
        plugin: String,
        violations: Vec<Violation>,
    },
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!(" - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}
