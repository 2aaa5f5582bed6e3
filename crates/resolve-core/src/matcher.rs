//! Include/exclude rule matching
//!
//! Include rules are scanned in declaration order and the first match
//! selects the configuration module. Exclusion is global: any matching
//! exclude pattern vetoes whichever include rule fired.

use resolve_fs::NormalizedPath;
use resolve_meta::{IncludeRule, Pattern, PluginOptions};

/// Decide which configuration module, if any, applies to `directory`.
pub fn match_directory<'a>(
    directory: &str,
    include: &'a [IncludeRule],
    exclude: &[Pattern],
) -> Option<&'a str> {
    let rule = include.iter().find(|rule| rule.matches(directory))?;

    if let Some(pattern) = exclude.iter().find(|pattern| pattern.is_match(directory)) {
        tracing::trace!(%directory, exclude = %pattern, "include vetoed by exclude");
        return None;
    }

    tracing::trace!(%directory, include = %rule.pattern(), file = rule.file(), "include matched");
    Some(rule.file())
}

/// [`match_directory`] bound to a set of plugin options.
#[derive(Debug, Clone, Copy)]
pub struct RuleMatcher<'a> {
    options: &'a PluginOptions,
}

impl<'a> RuleMatcher<'a> {
    pub fn new(options: &'a PluginOptions) -> Self {
        Self { options }
    }

    pub fn matches(&self, directory: &NormalizedPath) -> Option<&'a str> {
        match_directory(
            directory.as_str(),
            self.options.include(),
            self.options.exclude(),
        )
    }
}
