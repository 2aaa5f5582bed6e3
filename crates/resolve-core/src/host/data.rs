use resolve_fs::NormalizedPath;

use crate::options::ResolveOptions;

/// A module request as it passes through the before-resolve event.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveData {
    /// Directory the request originates from
    pub context: NormalizedPath,
    /// The module specifier being requested
    pub request: String,
    /// Options replacing the host resolver defaults for this request
    pub resolve_options: Option<ResolveOptions>,
}

impl ResolveData {
    pub fn new(context: impl Into<NormalizedPath>, request: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            request: request.into(),
            resolve_options: None,
        }
    }
}
