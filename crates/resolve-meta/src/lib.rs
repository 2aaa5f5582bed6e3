//! Option schema for the resolve config plugin.
//!
//! This crate defines the include/exclude rule types, validates raw plugin
//! options against the option contract and normalizes them into
//! [`PluginOptions`].

pub mod error;
pub mod options;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use options::{PLUGIN_NAME, PluginOptions, PluginOptionsBuilder};
pub use schema::{DEFAULT_CONFIG_FILE, IncludeRule, Pattern};
pub use validation::Violation;
