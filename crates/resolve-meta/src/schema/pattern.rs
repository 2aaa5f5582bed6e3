//! Directory-matching patterns

use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::{Error, Result};

/// A compiled regular expression tested against a context directory.
///
/// Matching is unanchored: the pattern matches if it is found anywhere in
/// the forward-slash directory string.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern from regex source.
    pub fn new(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(|regex| Self { regex })
            .map_err(|e| Error::InvalidPattern {
                pattern: source.to_string(),
                message: e.to_string(),
            })
    }

    /// Test the pattern against a directory string.
    pub fn is_match(&self, directory: &str) -> bool {
        self.regex.is_match(directory)
    }

    /// The regex source this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self { regex }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex.as_str())
    }
}
