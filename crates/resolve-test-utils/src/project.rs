//! [`TestProject`] builder for resolve config scenarios.

use std::fs;
use std::path::Path;

use resolve_fs::NormalizedPath;
use serde_json::Value;
use tempfile::TempDir;

/// A temporary directory tree with helpers for laying out packages.
///
/// # Example
///
/// ```rust,no_run
/// use resolve_test_utils::TestProject;
/// use serde_json::json;
///
/// let project = TestProject::new();
/// project.package("app");
/// project.write_json("app/resolve.config.json", &json!({ "resolve": {} }));
/// project.dir("app/src/components");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The root as a [`NormalizedPath`].
    pub fn normalized_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.root())
    }

    /// Normalized path of `relative` under the root (`""` is the root).
    pub fn path(&self, relative: &str) -> NormalizedPath {
        if relative.is_empty() {
            self.normalized_root()
        } else {
            self.normalized_root().join(relative)
        }
    }

    /// Create the directory `relative` (and its parents).
    pub fn dir(&self, relative: &str) -> NormalizedPath {
        let path = self.path(relative);
        fs::create_dir_all(path.to_native()).unwrap();
        path
    }

    /// Make `relative` a package by writing a `package.json` into it.
    pub fn package(&self, relative: &str) -> NormalizedPath {
        let dir = self.dir(relative);
        let name = dir.file_name().unwrap_or("fixture").to_string();
        fs::write(
            dir.join("package.json").to_native(),
            format!("{{\"name\": \"{}\", \"version\": \"0.0.0\"}}\n", name),
        )
        .unwrap();
        dir
    }

    /// Write a file, creating parent directories as needed.
    pub fn write(&self, relative: &str, content: &str) -> NormalizedPath {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent.to_native()).unwrap();
        }
        fs::write(path.to_native(), content).unwrap();
        path
    }

    /// Write `value` as pretty JSON.
    pub fn write_json(&self, relative: &str, value: &Value) -> NormalizedPath {
        self.write(relative, &serde_json::to_string_pretty(value).unwrap())
    }

    /// Assert that a file exists relative to the root.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.path(relative).is_file(),
            "Expected file to exist: {}",
            relative
        );
    }
}
