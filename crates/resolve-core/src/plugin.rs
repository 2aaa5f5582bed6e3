//! The plugin tying rule matching and config resolution to the host

use std::sync::Arc;

use resolve_meta::{PLUGIN_NAME, PluginOptions};
use serde_json::Value;

use crate::Result;
use crate::host::{Compiler, Plugin, ResolveData};
use crate::matcher::RuleMatcher;
use crate::resolver::ConfigResolver;

/// Applies per-project resolve options to module requests.
///
/// For each request whose context directory matches an include rule (and
/// no exclude rule), the configuration module of the nearest project is
/// loaded through the [`ConfigResolver`] and its non-empty `resolve`
/// section replaces the host defaults for that request.
#[derive(Debug)]
pub struct ResolveConfigPlugin {
    options: PluginOptions,
    resolver: Arc<ConfigResolver>,
}

impl ResolveConfigPlugin {
    /// Validate raw options and build the plugin with its own resolver.
    pub fn new(options: &Value) -> Result<Self> {
        Ok(Self::with_options(PluginOptions::from_value(options)?))
    }

    pub fn with_options(options: PluginOptions) -> Self {
        Self {
            options,
            resolver: Arc::new(ConfigResolver::new()),
        }
    }

    /// Share a resolver (and its cache) with other plugin instances.
    pub fn with_resolver(mut self, resolver: Arc<ConfigResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }

    pub fn resolver(&self) -> &Arc<ConfigResolver> {
        &self.resolver
    }

    /// Handle one before-resolve event.
    pub fn before_resolve(&self, data: &mut ResolveData) {
        let Some(config_file) = RuleMatcher::new(&self.options).matches(&data.context) else {
            return;
        };

        let options = self.resolver.resolve(&data.context, config_file);
        if !options.is_empty() {
            tracing::debug!(
                context = %data.context,
                request = %data.request,
                keys = options.len(),
                "overriding resolve options"
            );
            data.resolve_options = Some(options);
        }
    }
}

impl Plugin for ResolveConfigPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn apply(self: Arc<Self>, compiler: &mut Compiler) {
        compiler
            .hooks
            .normal_module_factory
            .tap(PLUGIN_NAME, move |factory| {
                let plugin = Arc::clone(&self);
                factory
                    .hooks
                    .before_resolve
                    .tap_async(PLUGIN_NAME, move |data, done| {
                        plugin.before_resolve(data);
                        done.done();
                    });
            });
    }
}
