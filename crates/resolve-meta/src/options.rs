//! Normalized plugin options

use serde::Deserialize;
use serde_json::Value;

use crate::schema::{IncludeRule, Pattern};
use crate::validation::{self, Violation};
use crate::{Error, Result};

/// Name the plugin reports in validation errors and registers its hook taps under.
pub const PLUGIN_NAME: &str = "ResolveConfigPlugin";

/// Validated plugin options.
///
/// `include` is never empty. Both sequences keep declaration order, which
/// decides which include rule wins when several match.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct PluginOptions {
    include: Vec<IncludeRule>,
    exclude: Vec<Pattern>,
}

impl PluginOptions {
    /// Validate raw options, failing with every violation found.
    pub fn from_value(value: &Value) -> Result<Self> {
        match validation::validate(value) {
            Ok(normalized) => {
                tracing::debug!(
                    include = normalized.include.len(),
                    exclude = normalized.exclude.len(),
                    "validated {} options",
                    PLUGIN_NAME
                );
                Ok(Self {
                    include: normalized.include,
                    exclude: normalized.exclude,
                })
            }
            Err(violations) => Err(invalid(violations)),
        }
    }

    pub fn builder() -> PluginOptionsBuilder {
        PluginOptionsBuilder::default()
    }

    pub fn include(&self) -> &[IncludeRule] {
        &self.include
    }

    pub fn exclude(&self) -> &[Pattern] {
        &self.exclude
    }
}

impl TryFrom<Value> for PluginOptions {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(&value)
    }
}

/// Typed construction path for callers that already hold compiled patterns.
#[derive(Debug, Default)]
pub struct PluginOptionsBuilder {
    include: Vec<IncludeRule>,
    exclude: Vec<Pattern>,
}

impl PluginOptionsBuilder {
    pub fn include(mut self, rule: impl Into<IncludeRule>) -> Self {
        self.include.push(rule.into());
        self
    }

    pub fn exclude(mut self, pattern: Pattern) -> Self {
        self.exclude.push(pattern);
        self
    }

    pub fn build(self) -> Result<PluginOptions> {
        if self.include.is_empty() {
            return Err(invalid(vec![Violation {
                path: "/include".to_string(),
                message: "must contain at least one rule".to_string(),
            }]));
        }

        Ok(PluginOptions {
            include: self.include,
            exclude: self.exclude,
        })
    }
}

fn invalid(violations: Vec<Violation>) -> Error {
    Error::InvalidOptions {
        plugin: PLUGIN_NAME.to_string(),
        violations,
    }
}
