use resolve_core::host::{Compiler, ResolveData};
use resolve_core::{ConfigResolver, Error, FileModuleLoader, ModuleRegistry, ResolveConfigPlugin};
use resolve_meta::PLUGIN_NAME;
use resolve_test_utils::TestProject;
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

/// A package with a few declarative config files; include patterns are
/// written relative to its root.
struct Fixture {
    project: TestProject,
}

impl Fixture {
    fn new() -> Self {
        let project = TestProject::new();
        project.package("");
        project.write_json("first.json", &json!({ "resolve": { "from": "first" } }));
        project.write_json("second.json", &json!({ "resolve": { "from": "second" } }));
        project.write_json("empty.json", &json!({ "resolve": {} }));
        Self { project }
    }

    /// Regex matching `relative` under the project root.
    fn pattern(&self, relative: &str) -> String {
        regex::escape(&format!("{}/{}", self.project.normalized_root(), relative))
    }

    fn plugin(&self, options: Value) -> ResolveConfigPlugin {
        ResolveConfigPlugin::new(&options).unwrap()
    }

    fn run(&self, plugin: &ResolveConfigPlugin, relative: &str) -> ResolveData {
        let mut data = ResolveData::new(self.project.dir(relative), "./module");
        plugin.before_resolve(&mut data);
        data
    }
}

fn from(data: &ResolveData) -> Option<&Value> {
    data.resolve_options.as_ref().and_then(|o| o.get("from"))
}

#[test]
fn test_unmatched_request_keeps_host_defaults() {
    let fx = Fixture::new();
    let plugin = fx.plugin(json!({ "include": { "match": fx.pattern("src/"), "file": "first.json" } }));

    let data = fx.run(&plugin, "other");

    assert_eq!(data.resolve_options, None);
    assert_eq!(plugin.resolver().cached_len(), 0);
}

#[test]
fn test_matched_request_receives_options() {
    let fx = Fixture::new();
    let plugin = fx.plugin(json!({ "include": { "match": fx.pattern("src/"), "file": "first.json" } }));

    let data = fx.run(&plugin, "src/components");

    assert_eq!(from(&data), Some(&json!("first")));
}

#[test]
fn test_excluded_request_keeps_host_defaults() {
    let fx = Fixture::new();
    let plugin = fx.plugin(json!({
        "include": { "match": fx.pattern("src/"), "file": "first.json" },
        "exclude": [fx.pattern("src/generated")]
    }));

    let data = fx.run(&plugin, "src/generated/api");

    assert_eq!(data.resolve_options, None);
}

#[test]
fn test_first_matching_include_wins() {
    let fx = Fixture::new();
    let plugin = fx.plugin(json!({
        "include": [
            { "match": fx.pattern("src/"), "file": "first.json" },
            { "match": fx.pattern("src/components"), "file": "second.json" }
        ]
    }));

    let data = fx.run(&plugin, "src/components");

    assert_eq!(from(&data), Some(&json!("first")));
}

#[test]
fn test_empty_resolve_section_is_not_attached() {
    let fx = Fixture::new();
    let plugin = fx.plugin(json!({ "include": { "match": fx.pattern("src/"), "file": "empty.json" } }));

    let data = fx.run(&plugin, "src/components");

    assert_eq!(data.resolve_options, None);
}

#[rstest]
#[case::no_options(json!({}))]
#[case::wrong_type(json!({ "include": true }))]
#[case::bad_exclude(json!({ "include": "src", "exclude": 1 }))]
fn test_invalid_options_fail_construction(#[case] options: Value) {
    let result = ResolveConfigPlugin::new(&options);
    assert!(matches!(result, Err(Error::Meta(_))));
}

#[test]
fn test_plugin_taps_module_factory() {
    let fx = Fixture::new();
    let plugin = Arc::new(fx.plugin(json!({ "include": { "match": fx.pattern("src/"), "file": "second.json" } })));

    let mut compiler = Compiler::new();
    compiler.apply(plugin.clone());
    assert_eq!(
        compiler.hooks.normal_module_factory.tap_names().collect::<Vec<_>>(),
        vec![PLUGIN_NAME]
    );

    let factory = compiler.new_normal_module_factory();
    assert_eq!(
        factory.hooks.before_resolve.tap_names().collect::<Vec<_>>(),
        vec![PLUGIN_NAME]
    );

    let mut matched = ResolveData::new(fx.project.dir("src/a"), "./a");
    let mut unmatched = ResolveData::new(fx.project.dir("test"), "./b");
    factory.before_resolve(&mut matched).unwrap();
    factory.before_resolve(&mut unmatched).unwrap();

    assert_eq!(from(&matched), Some(&json!("second")));
    assert_eq!(unmatched.resolve_options, None);
}

#[test]
fn test_factories_share_the_plugin_cache() {
    let fx = Fixture::new();
    let plugin = Arc::new(fx.plugin(json!({ "include": { "match": fx.pattern("src/"), "file": "first.json" } })));
    let mut compiler = Compiler::new();
    compiler.apply(plugin.clone());

    for _ in 0..3 {
        let factory = compiler.new_normal_module_factory();
        let mut data = ResolveData::new(fx.project.dir("src/x"), "./x");
        factory.before_resolve(&mut data).unwrap();
    }

    assert_eq!(plugin.resolver().cached_len(), 1);
}

#[test]
fn test_plugins_can_share_a_resolver() {
    let fx = Fixture::new();
    let registry = ModuleRegistry::new();
    registry.register_factory(fx.project.path("webpack.resolve.config.js"), || {
        json!({ "resolve": { "from": "script" } })
    });
    let resolver = Arc::new(ConfigResolver::with_loader(Arc::new(
        FileModuleLoader::with_registry(registry),
    )));

    let a = fx
        .plugin(json!({ "include": fx.pattern("src/") }))
        .with_resolver(resolver.clone());
    let b = fx
        .plugin(json!({ "include": fx.pattern("lib/") }))
        .with_resolver(resolver.clone());

    assert_eq!(from(&fx.run(&a, "src/app")), Some(&json!("script")));
    assert_eq!(from(&fx.run(&b, "lib/app")), Some(&json!("script")));
    assert_eq!(resolver.cached_len(), 1);
}
