//! Loading configuration modules from a project directory
//!
//! A module name is resolved the way a module resolver would: the exact
//! path first, then the name with each script and declarative extension
//! appended (`webpack.resolve.config` -> `webpack.resolve.config.js`, ...).
//!
//! For every candidate the in-process [`ModuleRegistry`] is consulted before
//! the filesystem. Script modules (such as the default
//! `webpack.resolve.config.js`) are evaluated by [`crate::script`];
//! declarative files are parsed by extension.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use resolve_fs::{ConfigStore, NormalizedPath, SUPPORTED_EXTENSIONS};
use serde_json::Value;

use crate::provider::ConfigProvider;
use crate::script::{self, SCRIPT_EXTENSIONS};
use crate::{Error, Result};

/// Source of configuration providers.
pub trait ModuleLoader: Send + Sync {
    /// Load the module `name` relative to `dir`.
    fn load(&self, dir: &NormalizedPath, name: &str) -> Result<ConfigProvider>;
}

/// In-process table of configuration providers keyed by module path.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: RwLock<HashMap<NormalizedPath, ConfigProvider>>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` for the module at `path`, replacing any previous one.
    pub fn register(&self, path: impl Into<NormalizedPath>, provider: ConfigProvider) {
        let path = path.into();
        tracing::debug!(path = %path, factory = provider.is_factory(), "registered config module");
        self.modules
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, provider);
    }

    pub fn register_static(&self, path: impl Into<NormalizedPath>, value: Value) {
        self.register(path, ConfigProvider::Static(value));
    }

    pub fn register_factory<F>(&self, path: impl Into<NormalizedPath>, f: F)
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.register(path, ConfigProvider::factory(f));
    }

    pub fn get(&self, path: &NormalizedPath) -> Option<ConfigProvider> {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.modules
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Default loader: registered modules first, then scripts and declarative
/// files on disk.
#[derive(Debug, Default)]
pub struct FileModuleLoader {
    store: ConfigStore,
    registry: ModuleRegistry,
}

impl FileModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(registry: ModuleRegistry) -> Self {
        Self {
            store: ConfigStore::new(),
            registry,
        }
    }

    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Paths tried for `name`, in order.
    pub fn candidates(dir: &NormalizedPath, name: &str) -> Vec<NormalizedPath> {
        let base = dir.join(name);
        let extensions = SCRIPT_EXTENSIONS.iter().chain(SUPPORTED_EXTENSIONS);
        let mut candidates = vec![base.clone()];
        candidates.extend(extensions.map(|ext| NormalizedPath::new(format!("{}.{}", base, ext))));
        candidates
    }
}

impl ModuleLoader for FileModuleLoader {
    fn load(&self, dir: &NormalizedPath, name: &str) -> Result<ConfigProvider> {
        for candidate in Self::candidates(dir, name) {
            if let Some(provider) = self.registry.get(&candidate) {
                tracing::trace!(module = %candidate, "loaded registered config module");
                return Ok(provider);
            }

            if candidate.is_file() && script::is_script(&candidate) {
                tracing::trace!(module = %candidate, "evaluating config script");
                return script::load(&candidate);
            }

            if candidate.is_file() {
                let value: Value = self.store.load(&candidate)?;
                tracing::trace!(module = %candidate, "loaded config file");
                return Ok(ConfigProvider::Static(value));
            }
        }

        Err(Error::ModuleNotFound {
            dir: dir.to_native(),
            name: name.to_string(),
        })
    }
}
