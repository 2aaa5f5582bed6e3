//! Validation of raw plugin options
//!
//! The option contract:
//!
//! ```text
//! include  required  pattern | { match: pattern, file?: string } | non-empty array of those
//! exclude  optional  pattern | array of patterns
//! ```
//!
//! Patterns are regex source strings. Every violation is collected before
//! failing so callers see the whole picture at once.

use std::fmt;

use serde_json::{Map, Value};

use crate::schema::{IncludeRule, Pattern};

/// A single breach of the option contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON-pointer style location, e.g. `/include/1/match`
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{}: {}", path, self.message)
    }
}

/// Validated and normalized option parts.
pub(crate) struct Normalized {
    pub include: Vec<IncludeRule>,
    pub exclude: Vec<Pattern>,
}

/// Validate `value` and normalize single values into sequences.
pub(crate) fn validate(value: &Value) -> Result<Normalized, Vec<Violation>> {
    let mut violations = Vec::new();

    let Some(object) = value.as_object() else {
        return Err(vec![Violation::new("", "options must be an object")]);
    };

    for key in object.keys() {
        if key != "include" && key != "exclude" {
            violations.push(Violation::new(format!("/{}", key), "unknown option"));
        }
    }

    let include = match object.get("include") {
        None => {
            violations.push(Violation::new("/include", "is required"));
            Vec::new()
        }
        Some(Value::Array(items)) => {
            if items.is_empty() {
                violations.push(Violation::new(
                    "/include",
                    "must contain at least one rule",
                ));
            }
            items
                .iter()
                .enumerate()
                .filter_map(|(i, item)| {
                    include_rule(item, &format!("/include/{}", i), &mut violations)
                })
                .collect()
        }
        Some(single) => include_rule(single, "/include", &mut violations)
            .into_iter()
            .collect(),
    };

    let exclude = match object.get("exclude") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| pattern(item, &format!("/exclude/{}", i), &mut violations))
            .collect(),
        Some(single) => pattern(single, "/exclude", &mut violations)
            .into_iter()
            .collect(),
    };

    if violations.is_empty() {
        Ok(Normalized { include, exclude })
    } else {
        Err(violations)
    }
}

fn include_rule(value: &Value, path: &str, violations: &mut Vec<Violation>) -> Option<IncludeRule> {
    match value {
        Value::String(_) => pattern(value, path, violations).map(IncludeRule::new),
        Value::Object(object) => structured_rule(object, path, violations),
        _ => {
            violations.push(Violation::new(
                path,
                "must be a pattern or an object with `match` and optional `file`",
            ));
            None
        }
    }
}

fn structured_rule(
    object: &Map<String, Value>,
    path: &str,
    violations: &mut Vec<Violation>,
) -> Option<IncludeRule> {
    for key in object.keys() {
        if key != "match" && key != "file" {
            violations.push(Violation::new(format!("{}/{}", path, key), "unknown property"));
        }
    }

    let matcher = match object.get("match") {
        Some(value) => pattern(value, &format!("{}/match", path), violations),
        None => {
            violations.push(Violation::new(format!("{}/match", path), "is required"));
            None
        }
    };

    let file = match object.get("file") {
        None => None,
        Some(Value::String(file)) if !file.trim().is_empty() => Some(file.clone()),
        Some(Value::String(_)) => {
            violations.push(Violation::new(format!("{}/file", path), "must not be empty"));
            return None;
        }
        Some(_) => {
            violations.push(Violation::new(format!("{}/file", path), "must be a string"));
            return None;
        }
    };

    let matcher = matcher?;
    Some(match file {
        Some(file) => IncludeRule::with_file(matcher, file),
        None => IncludeRule::new(matcher),
    })
}

fn pattern(value: &Value, path: &str, violations: &mut Vec<Violation>) -> Option<Pattern> {
    let Some(source) = value.as_str() else {
        violations.push(Violation::new(path, "must be a pattern string"));
        return None;
    };

    match Pattern::new(source) {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            violations.push(Violation::new(path, e.to_string()));
            None
        }
    }
}
