//! The slice of the bundler host this plugin integrates with
//!
//! The host raises a "before resolve" event on its module factory for every
//! module request. Plugins tap the compiler's module-factory hook, and from
//! there the factory's before-resolve hook, which follows an async-series
//! convention: each tap is handed the request and a [`Completion`] it must
//! consume exactly once.

mod compiler;
mod data;
mod hooks;

pub use compiler::{Compiler, CompilerHooks, FactoryHooks, NormalModuleFactory, Plugin};
pub use data::ResolveData;
pub use hooks::{BeforeResolveHook, Completion, NormalModuleFactoryHook, TapError};
