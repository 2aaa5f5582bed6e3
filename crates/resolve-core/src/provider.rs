//! Configuration providers
//!
//! A configuration module evaluates either to a plain value or to a
//! zero-argument factory producing one.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Error a factory may fail with.
pub type FactoryError = Box<dyn std::error::Error + Send + Sync>;

type Factory = Arc<dyn Fn() -> Result<Value, FactoryError> + Send + Sync>;

#[derive(Clone)]
pub enum ConfigProvider {
    /// A configuration value exported as-is.
    Static(Value),
    /// A function invoked with no arguments to build the configuration.
    Factory(Factory),
}

impl ConfigProvider {
    pub fn factory<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(move || Ok(f())))
    }

    pub fn try_factory<F>(f: F) -> Self
    where
        F: Fn() -> Result<Value, FactoryError> + Send + Sync + 'static,
    {
        Self::Factory(Arc::new(f))
    }

    /// Produce the configuration value, invoking the factory if there is one.
    pub fn evaluate(&self) -> Result<Value, FactoryError> {
        match self {
            Self::Static(value) => Ok(value.clone()),
            Self::Factory(f) => f(),
        }
    }

    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory(_))
    }
}

impl fmt::Debug for ConfigProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl From<Value> for ConfigProvider {
    fn from(value: Value) -> Self {
        Self::Static(value)
    }
}
