//! CommonJS configuration scripts
//!
//! Script modules such as `webpack.resolve.config.js` run in an embedded
//! JavaScript engine with a minimal CommonJS environment (`module`,
//! `exports`, `__filename`, `__dirname`). Whatever the script leaves in
//! `module.exports` becomes the provider: a function becomes a factory, and
//! any other value is converted to JSON right away.
//!
//! Engine contexts are not thread-safe, so a factory keeps the script
//! source and evaluates it again in a fresh context when invoked.

use boa_engine::{Context, JsValue, Source};
use resolve_fs::NormalizedPath;
use serde_json::Value;

use crate::provider::{ConfigProvider, FactoryError};
use crate::{Error, Result};

/// Extensions evaluated as scripts, in probing order.
pub const SCRIPT_EXTENSIONS: &[&str] = &["js", "cjs"];

/// Whether `path` names a script module.
pub fn is_script(path: &NormalizedPath) -> bool {
    path.extension()
        .is_some_and(|ext| SCRIPT_EXTENSIONS.contains(&ext))
}

/// Evaluate the script at `path` and turn its exports into a provider.
pub fn load(path: &NormalizedPath) -> Result<ConfigProvider> {
    let script = Script {
        path: path.clone(),
        source: resolve_fs::io::read_text(path)?,
    };

    let mut context = Context::default();
    let exports = script.exports(&mut context)?;
    if exports.is_callable() {
        tracing::trace!(module = %path, "script exports a factory");
        return Ok(ConfigProvider::try_factory(move || {
            script.call_factory().map_err(FactoryError::from)
        }));
    }

    script.to_json(&exports, &mut context).map(ConfigProvider::Static)
}

struct Script {
    path: NormalizedPath,
    source: String,
}

impl Script {
    /// Run the script and return `module.exports`.
    fn exports(&self, context: &mut Context) -> Result<JsValue> {
        let dirname = self
            .path
            .parent()
            .map(|dir| dir.as_str().to_string())
            .unwrap_or_default();
        // JSON string literals are valid JS string literals
        let prelude = format!(
            "var module = {{ exports: {{}} }};\n\
             var exports = module.exports;\n\
             var __filename = {};\n\
             var __dirname = {};\n",
            Value::from(self.path.as_str()),
            Value::from(dirname),
        );

        self.eval(context, prelude.as_bytes())?;
        self.eval(context, self.source.as_bytes())?;
        self.eval(context, b"module.exports")
    }

    fn call_factory(&self) -> Result<Value> {
        let mut context = Context::default();
        let exports = self.exports(&mut context)?;
        let factory = exports
            .as_callable()
            .ok_or_else(|| self.error("module.exports is no longer a function"))?;
        let config = factory
            .call(&JsValue::undefined(), &[], &mut context)
            .map_err(|e| self.error(e))?;
        self.to_json(&config, &mut context)
    }

    fn eval(&self, context: &mut Context, code: &[u8]) -> Result<JsValue> {
        context
            .eval(Source::from_bytes(code))
            .map_err(|e| self.error(e))
    }

    fn to_json(&self, value: &JsValue, context: &mut Context) -> Result<Value> {
        value.to_json(context).map_err(|e| self.error(e))
    }

    fn error(&self, message: impl std::fmt::Display) -> Error {
        Error::ScriptFailed {
            path: self.path.to_native(),
            message: message.to_string(),
        }
    }
}
