//! Log output for host binaries
//!
//! The library only emits `tracing` events; a host that embeds the plugin
//! calls [`init`] once at startup to print them.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber with default configuration.
///
/// Uses the `RUST_LOG` environment variable to pick the level, defaulting
/// to "info". Set `RUST_LOG=resolve_core=debug` to see why a request did
/// not receive custom resolve options.
///
/// ```no_run
/// use std::sync::Arc;
/// use resolve_core::host::Compiler;
/// use resolve_core::{ResolveConfigPlugin, logging};
/// use serde_json::json;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// logging::init()?;
///
/// let mut compiler = Compiler::new();
/// compiler.apply(Arc::new(ResolveConfigPlugin::new(&json!({ "include": "/src/" }))?));
/// # Ok(())
/// # }
/// ```
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info};

    #[test]
    fn test_logging_init() {
        // Only one subscriber per process; a second init just errors
        let _ = init();

        info!("This is an info message");
        debug!(project = "/proj", "This is a debug message");
    }
}
