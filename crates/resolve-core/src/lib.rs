//! Core of the resolve config plugin
//!
//! Lets a module bundler apply per-directory resolve options depending on
//! which source directory a dependency request comes from:
//!
//! - **Rule matching**: first matching include rule wins, any exclude vetoes
//! - **Config resolution**: nearest `package.json` directory, configuration
//!   module (a CommonJS script or a declarative file) loaded once per
//!   directory and cached
//! - **Hook integration**: the plugin taps the module factory's
//!   before-resolve event and attaches non-empty resolve options
//!
//! # Architecture
//!
//! ```text
//!          host (Compiler / NormalModuleFactory)
//!                        |
//!                ResolveConfigPlugin
//!                  /             \
//!           RuleMatcher      ConfigResolver -- ModuleLoader
//!                |                 |
//!           resolve-meta       resolve-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use resolve_core::host::{Compiler, ResolveData};
//! use resolve_core::ResolveConfigPlugin;
//! use serde_json::json;
//!
//! # fn main() -> resolve_core::Result<()> {
//! let plugin = ResolveConfigPlugin::new(&json!({ "include": "/src/" }))?;
//!
//! let mut compiler = Compiler::new();
//! compiler.apply(Arc::new(plugin));
//!
//! let factory = compiler.new_normal_module_factory();
//! let mut data = ResolveData::new("/proj/src/components", "./button");
//! factory.before_resolve(&mut data)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod host;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod options;
pub mod plugin;
pub mod provider;
pub mod resolver;
pub mod script;

pub use error::{Error, Result};
pub use loader::{FileModuleLoader, ModuleLoader, ModuleRegistry};
pub use matcher::{RuleMatcher, match_directory};
pub use options::ResolveOptions;
pub use plugin::ResolveConfigPlugin;
pub use provider::{ConfigProvider, FactoryError};
pub use resolver::ConfigResolver;
