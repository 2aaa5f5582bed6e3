//! Cached per-project resolve configuration
//!
//! The `ConfigResolver` maps a request's context directory to the resolve
//! options of the nearest project (the closest ancestor holding a
//! `package.json`). Each project's configuration module is loaded at most
//! once per resolver; the result, including "no resolve section", is cached
//! under the project directory for the resolver's lifetime.
//!
//! Resolution never fails. Any error along the way yields empty options so
//! a broken or missing configuration leaves the host defaults in place.
//! That includes a configuration module that, while loading, asks the same
//! resolver for its own project: the nested request gets empty options
//! instead of waiting on itself.

use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use resolve_fs::{NormalizedPath, PACKAGE_MANIFEST, find_parent_dir};
use serde_json::Value;

use crate::loader::{FileModuleLoader, ModuleLoader};
use crate::options::ResolveOptions;
use crate::{Error, Result};

#[derive(Debug, Default)]
enum SlotState {
    #[default]
    Empty,
    /// A load is running on this thread.
    Loading(ThreadId),
    /// `None` when the configuration has no resolve section.
    Ready(Option<ResolveOptions>),
}

/// Cache slot for one project directory.
#[derive(Debug, Default)]
struct Slot {
    state: Mutex<SlotState>,
    loaded: Condvar,
}

/// Publishes a load's outcome when dropped, so waiters wake up even if the
/// loader panics.
struct LoadGuard<'a> {
    slot: &'a Slot,
    outcome: SlotState,
}

impl Drop for LoadGuard<'_> {
    fn drop(&mut self) {
        *lock(&self.slot.state) = std::mem::take(&mut self.outcome);
        self.slot.loaded.notify_all();
    }
}

pub struct ConfigResolver {
    loader: Arc<dyn ModuleLoader>,
    manifest: String,
    cache: Mutex<HashMap<NormalizedPath, Arc<Slot>>>,
}

impl ConfigResolver {
    /// Create a resolver backed by a fresh [`FileModuleLoader`].
    pub fn new() -> Self {
        Self::with_loader(Arc::new(FileModuleLoader::new()))
    }

    pub fn with_loader(loader: Arc<dyn ModuleLoader>) -> Self {
        Self {
            loader,
            manifest: PACKAGE_MANIFEST.to_string(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn loader(&self) -> &Arc<dyn ModuleLoader> {
        &self.loader
    }

    /// Resolve options for a request originating in `directory`.
    pub fn resolve(&self, directory: &NormalizedPath, config_file: &str) -> ResolveOptions {
        match self.try_resolve(directory, config_file) {
            Ok(options) => options.unwrap_or_default(),
            Err(e) => {
                tracing::debug!(
                    directory = %directory,
                    config_file,
                    error = %e,
                    "no resolve config applied"
                );
                ResolveOptions::default()
            }
        }
    }

    /// Number of project directories with a cached result.
    pub fn cached_len(&self) -> usize {
        lock(&self.cache)
            .values()
            .filter(|slot| matches!(*lock(&slot.state), SlotState::Ready(_)))
            .count()
    }

    /// Cached result for a project directory, if it has been loaded.
    pub fn cached(&self, manifest_dir: &NormalizedPath) -> Option<Option<ResolveOptions>> {
        let slot = lock(&self.cache).get(manifest_dir).cloned()?;
        let state = lock(&slot.state);
        match &*state {
            SlotState::Ready(options) => Some(options.clone()),
            _ => None,
        }
    }

    fn try_resolve(
        &self,
        directory: &NormalizedPath,
        config_file: &str,
    ) -> Result<Option<ResolveOptions>> {
        let manifest_dir = find_parent_dir(directory, &self.manifest)?;
        let slot = self.slot(&manifest_dir);
        let current = thread::current().id();

        {
            let mut state = lock(&slot.state);
            loop {
                let owner = match &*state {
                    SlotState::Ready(cached) => {
                        tracing::trace!(project = %manifest_dir, "resolve config cache hit");
                        return Ok(cached.clone());
                    }
                    SlotState::Empty => break,
                    SlotState::Loading(owner) => *owner,
                };
                if owner == current {
                    return Err(Error::ReentrantLoad {
                        path: manifest_dir.to_native(),
                    });
                }
                // Only one thread loads a given project; the rest wait for it.
                state = slot
                    .loaded
                    .wait(state)
                    .unwrap_or_else(PoisonError::into_inner);
            }
            *state = SlotState::Loading(current);
        }

        // The slot is unlocked while loading; failures leave it empty.
        let mut guard = LoadGuard {
            slot: &*slot,
            outcome: SlotState::Empty,
        };
        let options = self.load(&manifest_dir, config_file)?;
        tracing::debug!(
            project = %manifest_dir,
            config_file,
            has_resolve = options.is_some(),
            "loaded resolve config"
        );
        guard.outcome = SlotState::Ready(options.clone());
        Ok(options)
    }

    fn slot(&self, manifest_dir: &NormalizedPath) -> Arc<Slot> {
        let mut cache = lock(&self.cache);
        Arc::clone(cache.entry(manifest_dir.clone()).or_default())
    }

    fn load(
        &self,
        manifest_dir: &NormalizedPath,
        config_file: &str,
    ) -> Result<Option<ResolveOptions>> {
        let module_path = manifest_dir.join(config_file);
        let provider = self.loader.load(manifest_dir, config_file)?;

        let config = provider.evaluate().map_err(|e| Error::FactoryFailed {
            path: module_path.to_native(),
            message: e.to_string(),
        })?;

        let mut config = match config {
            Value::Object(config) => config,
            other => {
                return Err(Error::NotAnObject {
                    path: module_path.to_native(),
                    found: kind(&other),
                });
            }
        };

        let section = match config.remove("resolve") {
            None | Some(Value::Null) => return Ok(None),
            Some(section) => section,
        };
        let found = kind(&section);
        let options = ResolveOptions::from_value(section);
        if options.is_none() {
            tracing::debug!(
                module = %module_path,
                found,
                "ignoring resolve section that is not an object"
            );
        }
        Ok(options)
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("manifest", &self.manifest)
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
