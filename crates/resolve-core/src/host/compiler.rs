use std::sync::Arc;

use super::data::ResolveData;
use super::hooks::{BeforeResolveHook, NormalModuleFactoryHook};
use crate::Result;

/// A host extension applied to a [`Compiler`].
pub trait Plugin: Send + Sync {
    fn name(&self) -> &str;

    /// Register the plugin's taps on the compiler hooks.
    fn apply(self: Arc<Self>, compiler: &mut Compiler);
}

#[derive(Default)]
pub struct CompilerHooks {
    pub normal_module_factory: NormalModuleFactoryHook,
}

#[derive(Default)]
pub struct Compiler {
    pub hooks: CompilerHooks,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply<P: Plugin + 'static>(&mut self, plugin: Arc<P>) {
        tracing::debug!(plugin = plugin.name(), "applying plugin");
        plugin.apply(self);
    }

    /// Create a module factory and let plugins tap into it.
    pub fn new_normal_module_factory(&self) -> NormalModuleFactory {
        let mut factory = NormalModuleFactory::default();
        self.hooks.normal_module_factory.call(&mut factory);
        factory
    }
}

#[derive(Default)]
pub struct FactoryHooks {
    pub before_resolve: BeforeResolveHook,
}

#[derive(Default)]
pub struct NormalModuleFactory {
    pub hooks: FactoryHooks,
}

impl NormalModuleFactory {
    /// Raise the before-resolve event for one module request.
    pub fn before_resolve(&self, data: &mut ResolveData) -> Result<()> {
        self.hooks.before_resolve.call(data)
    }
}
