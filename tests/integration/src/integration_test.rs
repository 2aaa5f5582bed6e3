//! End-to-end test for the full request flow
//!
//! Exercises: option validation -> plugin applied to the compiler ->
//! module factory before-resolve event -> rule match -> manifest lookup ->
//! configuration script evaluation -> resolve options on the request.

use pretty_assertions::assert_eq;
use resolve_core::host::{Compiler, NormalModuleFactory, ResolveData};
use resolve_core::{ConfigResolver, FileModuleLoader, ModuleRegistry, ResolveConfigPlugin};
use resolve_meta::DEFAULT_CONFIG_FILE;
use resolve_test_utils::TestProject;
use serde_json::{Value, json};
use std::sync::Arc;

/// A project root with `package.json` and a `webpack.resolve.config.js`
/// exporting `{ resolve: { extensions: ['.ts'] } }`.
fn setup_project() -> TestProject {
    // RUST_LOG=resolve_core=debug shows why a request got no options
    let _ = resolve_core::logging::init();

    let project = TestProject::new();
    project.package("");
    project.write(
        DEFAULT_CONFIG_FILE,
        "module.exports = { resolve: { extensions: ['.ts'] } }\n",
    );
    project.dir("src/components");
    project.dir("other");

    project.assert_file_exists("package.json");
    project.assert_file_exists(DEFAULT_CONFIG_FILE);
    project
}

fn factory_for(plugin: ResolveConfigPlugin) -> NormalModuleFactory {
    let mut compiler = Compiler::new();
    compiler.apply(Arc::new(plugin));
    compiler.new_normal_module_factory()
}

fn src_rule(project: &TestProject) -> Value {
    let root = regex::escape(project.normalized_root().as_str());
    json!({
        "include": { "match": format!("{}/src/", root), "file": "webpack.resolve.config.js" }
    })
}

#[test]
fn test_request_from_matching_directory_gets_project_options() {
    let project = setup_project();
    let factory = factory_for(ResolveConfigPlugin::new(&src_rule(&project)).unwrap());

    let mut in_src = ResolveData::new(project.path("src/components"), "./Button");
    factory.before_resolve(&mut in_src).unwrap();
    let mut elsewhere = ResolveData::new(project.path("other"), "./util");
    factory.before_resolve(&mut elsewhere).unwrap();

    assert_eq!(
        in_src.resolve_options.map(|o| o.into_value()),
        Some(json!({ "extensions": [".ts"] }))
    );
    assert_eq!(elsewhere.resolve_options, None);
    assert_eq!(elsewhere.request, "./util");
}

#[test]
fn test_bare_pattern_uses_default_config_file() {
    let project = setup_project();
    let root = regex::escape(project.normalized_root().as_str());
    let plugin = ResolveConfigPlugin::new(&json!({ "include": format!("{}/src/", root) })).unwrap();
    let factory = factory_for(plugin);

    let mut data = ResolveData::new(project.path("src/components"), "./Button");
    factory.before_resolve(&mut data).unwrap();

    assert_eq!(
        data.resolve_options.map(|o| o.into_value()),
        Some(json!({ "extensions": [".ts"] }))
    );
}

#[test]
fn test_registered_provider_overrides_script() {
    let project = setup_project();
    let registry = ModuleRegistry::new();
    registry.register_static(
        project.path(DEFAULT_CONFIG_FILE),
        json!({ "resolve": { "extensions": [".mjs"] } }),
    );
    let resolver = Arc::new(ConfigResolver::with_loader(Arc::new(
        FileModuleLoader::with_registry(registry),
    )));
    let plugin = ResolveConfigPlugin::new(&src_rule(&project))
        .unwrap()
        .with_resolver(resolver);
    let factory = factory_for(plugin);

    let mut data = ResolveData::new(project.path("src/components"), "./Button");
    factory.before_resolve(&mut data).unwrap();

    assert_eq!(
        data.resolve_options.map(|o| o.into_value()),
        Some(json!({ "extensions": [".mjs"] }))
    );
}
