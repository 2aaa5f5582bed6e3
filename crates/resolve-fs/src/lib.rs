//! Filesystem layer for the resolve config plugin
//!
//! Provides normalized paths, upward manifest discovery and format-aware
//! loading of declarative configuration files.

pub mod config;
pub mod error;
pub mod io;
pub mod manifest;
pub mod path;

pub use config::{ConfigStore, SUPPORTED_EXTENSIONS};
pub use error::{Error, Result};
pub use manifest::{PACKAGE_MANIFEST, find_parent_dir};
pub use path::NormalizedPath;
