//! Include rules
//!
//! An include rule pairs a directory pattern with the name of the
//! configuration module to load from the matching project:
//!
//! ```json
//! { "match": "/packages/ui/src/", "file": "webpack.resolve.config.js" }
//! ```
//!
//! A bare pattern is shorthand for a rule using [`DEFAULT_CONFIG_FILE`].

use super::Pattern;

/// Configuration module loaded when a rule does not name one.
pub const DEFAULT_CONFIG_FILE: &str = "webpack.resolve.config.js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRule {
    pattern: Pattern,
    file: String,
}

impl IncludeRule {
    /// A rule that loads [`DEFAULT_CONFIG_FILE`].
    pub fn new(pattern: Pattern) -> Self {
        Self::with_file(pattern, DEFAULT_CONFIG_FILE)
    }

    pub fn with_file(pattern: Pattern, file: impl Into<String>) -> Self {
        Self {
            pattern,
            file: file.into(),
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Name of the configuration module this rule selects.
    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn matches(&self, directory: &str) -> bool {
        self.pattern.is_match(directory)
    }
}

impl From<Pattern> for IncludeRule {
    fn from(pattern: Pattern) -> Self {
        Self::new(pattern)
    }
}
