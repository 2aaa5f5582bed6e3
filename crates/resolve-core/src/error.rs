//! Error types for resolve-core

use std::path::PathBuf;

/// Result type for resolve-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in resolve-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No candidate for the configuration module exists
    #[error("Configuration module {name} not found in {dir}")]
    ModuleNotFound { dir: PathBuf, name: String },

    /// A factory provider failed while producing the configuration
    #[error("Configuration factory {path} failed: {message}")]
    FactoryFailed { path: PathBuf, message: String },

    /// A configuration script failed to run or export a usable value
    #[error("Configuration script {path} failed: {message}")]
    ScriptFailed { path: PathBuf, message: String },

    /// A configuration module asked for its own project while loading
    #[error("Configuration for {path} requested while it was being loaded")]
    ReentrantLoad { path: PathBuf },

    /// The evaluated configuration is not a mapping
    #[error("Configuration {path} evaluated to {found}, expected an object")]
    NotAnObject { path: PathBuf, found: &'static str },

    /// A hook tap returned without signalling completion
    #[error("Hook tap {tap} returned without signalling completion")]
    TapNotCompleted { tap: String },

    /// A hook tap signalled failure
    #[error("Hook tap {tap} failed: {message}")]
    TapFailed { tap: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from resolve-fs
    #[error(transparent)]
    Fs(#[from] resolve_fs::Error),

    /// Option error from resolve-meta
    #[error(transparent)]
    Meta(#[from] resolve_meta::Error),
}
