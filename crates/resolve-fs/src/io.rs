//! Bounded reads of configuration files

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Largest configuration file we are willing to read (1 MiB).
pub const MAX_CONFIG_SIZE: u64 = 1024 * 1024;

/// Read text content from a file, refusing anything over [`MAX_CONFIG_SIZE`].
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let metadata = fs::metadata(&native_path).map_err(|e| Error::io(&native_path, e))?;

    if metadata.len() > MAX_CONFIG_SIZE {
        return Err(Error::ConfigTooLarge {
            path: native_path,
            size: metadata.len(),
            max: MAX_CONFIG_SIZE,
        });
    }

    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}
