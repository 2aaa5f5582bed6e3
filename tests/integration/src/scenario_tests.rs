//! Monorepo scenarios
//!
//! A workspace of packages where each package ships its own resolve
//! configuration in a different shape.

use pretty_assertions::assert_eq;
use resolve_core::host::{Compiler, NormalModuleFactory, ResolveData};
use resolve_core::{ConfigResolver, FileModuleLoader, ModuleRegistry, ResolveConfigPlugin};
use resolve_fs::NormalizedPath;
use resolve_test_utils::TestProject;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Monorepo {
    project: TestProject,
    factory_calls: Arc<AtomicUsize>,
    factory: NormalModuleFactory,
}

impl Monorepo {
    /// ```text
    /// <root>/package.json
    /// <root>/packages/web/package.json          webpack.resolve.config.js (registered factory)
    /// <root>/packages/admin/package.json        resolve.yaml
    /// <root>/packages/legacy/package.json       webpack.resolve.config.js (script exporting false)
    /// <root>/packages/web/src/generated/        excluded
    /// ```
    fn new() -> Self {
        let project = TestProject::new();
        project.package("");
        for name in ["web", "admin", "legacy"] {
            project.package(&format!("packages/{}", name));
            project.dir(&format!("packages/{}/src/generated", name));
        }
        project.write(
            "packages/legacy/webpack.resolve.config.js",
            "module.exports = false;\n",
        );
        project.write(
            "packages/admin/resolve.yaml",
            "resolve:\n  alias:\n    '@admin': ./src\n",
        );

        let factory_calls = Arc::new(AtomicUsize::new(0));
        let counter = factory_calls.clone();
        let registry = ModuleRegistry::new();
        registry.register_factory(
            project.path("packages/web/webpack.resolve.config.js"),
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
                json!({ "resolve": { "extensions": [".tsx", ".ts", ".js"] } })
            },
        );

        let packages = regex::escape(&format!("{}/packages/", project.normalized_root()));
        let plugin = ResolveConfigPlugin::new(&json!({
            "include": [
                { "match": format!("{}admin/", packages), "file": "resolve.yaml" },
                format!("{}[a-z]+/src", packages)
            ],
            "exclude": "/generated"
        }))
        .unwrap()
        .with_resolver(Arc::new(ConfigResolver::with_loader(Arc::new(
            FileModuleLoader::with_registry(registry),
        ))));

        let mut compiler = Compiler::new();
        compiler.apply(Arc::new(plugin));
        let factory = compiler.new_normal_module_factory();

        Self {
            project,
            factory_calls,
            factory,
        }
    }

    fn resolve(&self, relative: &str) -> Option<Value> {
        let mut data = ResolveData::new(self.project.path(relative), "./dep");
        self.factory.before_resolve(&mut data).unwrap();
        data.resolve_options.map(|o| o.into_value())
    }
}

#[test]
fn test_factory_package() {
    let repo = Monorepo::new();

    assert_eq!(
        repo.resolve("packages/web/src/pages"),
        Some(json!({ "extensions": [".tsx", ".ts", ".js"] }))
    );
}

#[test]
fn test_declarative_package_uses_its_own_file() {
    let repo = Monorepo::new();

    assert_eq!(
        repo.resolve("packages/admin/src"),
        Some(json!({ "alias": { "@admin": "./src" } }))
    );
}

#[test]
fn test_primitive_config_leaves_defaults() {
    let repo = Monorepo::new();

    assert_eq!(repo.resolve("packages/legacy/src"), None);
}

#[test]
fn test_generated_code_is_excluded_in_every_package() {
    let repo = Monorepo::new();

    assert_eq!(repo.resolve("packages/web/src/generated"), None);
    assert_eq!(repo.resolve("packages/admin/src/generated"), None);
}

#[test]
fn test_root_package_is_not_included() {
    let repo = Monorepo::new();

    assert_eq!(repo.resolve(""), None);
    assert_eq!(repo.resolve("packages"), None);
}

#[test]
fn test_factory_runs_once_across_many_requests() {
    let repo = Monorepo::new();

    for dir in ["packages/web/src", "packages/web/src/pages", "packages/web/src/a/b"] {
        assert!(repo.resolve(dir).is_some());
    }
    assert!(repo.resolve("packages/web/src/generated").is_none());

    assert_eq!(repo.factory_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_context_spelling_does_not_split_the_cache() {
    let repo = Monorepo::new();
    let trailing = format!("{}/", repo.project.path("packages/web/src").as_str());

    let mut data = ResolveData::new(NormalizedPath::new(trailing), "./dep");
    repo.factory.before_resolve(&mut data).unwrap();
    repo.resolve("packages/web/src");

    assert!(data.resolve_options.is_some());
    assert_eq!(repo.factory_calls.load(Ordering::SeqCst), 1);
}
