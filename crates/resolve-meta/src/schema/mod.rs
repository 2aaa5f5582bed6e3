//! Rule types accepted in plugin options

mod pattern;
mod rule;

pub use pattern::Pattern;
pub use rule::{DEFAULT_CONFIG_FILE, IncludeRule};
