//! Upward search for the nearest package manifest

use crate::{Error, NormalizedPath, Result};

/// The project-root marker file.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Find the nearest directory, starting at `start` itself, that contains
/// a file or directory named `marker`.
pub fn find_parent_dir(start: &NormalizedPath, marker: &str) -> Result<NormalizedPath> {
    for dir in start.ancestors() {
        if dir.join(marker).exists() {
            tracing::trace!(start = %start, found = %dir, "located {}", marker);
            return Ok(dir);
        }
    }

    Err(Error::ManifestNotFound {
        start: start.to_native(),
        marker: marker.to_string(),
    })
}
