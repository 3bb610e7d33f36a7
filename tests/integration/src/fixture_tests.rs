//! Resolves the worker fixtures under `test-fixtures/workers/` end to end.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use wrangler_options::schema::Persistence;
use wrangler_options::{ConfigResolver, HttpsOptions, NormalizedPath, WorkerOptions};

fn fixture_dir(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/workers")
        .join(name)
}

fn resolve_fixture(name: &str, environment: Option<&str>) -> (NormalizedPath, WorkerOptions) {
    let dir = fixture_dir(name);
    let content = fs::read_to_string(dir.join("wrangler.toml")).expect("fixture should exist");
    let resolver = ConfigResolver::new(dir);
    let options = resolver
        .resolve(&content, environment)
        .expect("fixture should decode");
    (resolver.base_dir().clone(), options)
}

#[rstest]
#[case("webpack-site")]
#[case("rust-wasm")]
#[case("modules-durable-objects")]
fn fixtures_resolve_to_absolute_paths(#[case] name: &str) {
    let (base, options) = resolve_fixture(name, None);

    assert!(base.is_absolute());
    for path in [&options.script_path, &options.site_path].into_iter().flatten() {
        assert!(path.is_absolute(), "{} should be absolute", path);
        assert!(path.as_str().starts_with(base.as_str()));
    }
}

#[test]
fn webpack_site_root() {
    let (base, options) = resolve_fixture("webpack-site", None);

    assert_eq!(options.build_command.as_deref(), Some("wrangler build"));
    assert_eq!(options.build_base_path.as_deref(), Some(base.as_str()));
    assert_eq!(options.build_watch_path.as_deref(), Some("src"));
    assert_eq!(options.script_path, Some(base.join("worker/script.js")));
    assert_eq!(options.site_path, Some(base.join("public")));
    assert_eq!(options.site_exclude, Some(vec!["*.map".to_string()]));
    assert_eq!(options.site_include, None);
    assert_eq!(
        options.kv_namespaces,
        Some(vec!["__STATIC_CONTENT_CACHE".to_string()])
    );
    assert_eq!(
        options.to_json()["bindings"],
        json!({"ENVIRONMENT": "development"})
    );
    assert_eq!(options.kv_persist, Some(Persistence::Enabled(true)));
    assert_eq!(options.port, Some(8788));
}

#[test]
fn webpack_site_production_uses_its_own_build() {
    let (base, options) = resolve_fixture("webpack-site", Some("production"));

    assert_eq!(options.build_command.as_deref(), Some("npm run build:prod"));
    assert_eq!(options.build_base_path, None);
    assert_eq!(options.script_path, Some(base.join("dist/worker.js")));
    assert_eq!(
        options.to_json()["bindings"],
        json!({"ENVIRONMENT": "production"})
    );
    // Untouched by the environment
    assert_eq!(options.site_path, Some(base.join("public")));
    assert_eq!(options.port, Some(8788));
}

#[test]
fn rust_wasm_keeps_user_bindings_and_adds_generated_module() {
    let (base, options) = resolve_fixture("rust-wasm", None);

    assert_eq!(
        options.script_path,
        Some(base.join("worker/generated/script.js"))
    );
    let wasm = options.wasm_bindings.unwrap();
    assert_eq!(wasm.len(), 2);
    assert_eq!(wasm["LOOKUP"], "data/lookup.wasm");
    assert_eq!(
        wasm["wasm"],
        base.join("worker/generated/script.wasm").to_string()
    );
    assert_eq!(options.upstream.as_deref(), Some("https://example.com"));
    assert_eq!(options.disable_updater, Some(true));
}

#[test]
fn modules_worker_with_durable_objects() {
    let (base, options) = resolve_fixture("modules-durable-objects", None);

    assert_eq!(options.script_path, Some(base.join("dist/index.mjs")));
    assert_eq!(options.modules, Some(true));
    assert_eq!(options.modules_rules.as_ref().map(Vec::len), Some(1));
    assert_eq!(options.crons, Some(vec!["*/30 * * * *".to_string()]));

    let objects = options.durable_objects.clone().unwrap();
    assert_eq!(objects["ROOMS"].class_name, "ChatRoom");
    assert_eq!(objects["ROOMS"].script_path, None);
    assert_eq!(objects["LIMITERS"].script_path.as_deref(), Some("limiter"));

    assert_eq!(
        options.durable_objects_persist,
        Some(Persistence::Directory("./.mf/do".into()))
    );
    match options.https {
        Some(HttpsOptions::Files(paths)) => {
            assert_eq!(paths.key_path, Some(base.join("certs/key.pem")));
            assert_eq!(paths.cert_path, Some(base.join("certs/cert.pem")));
            assert_eq!(paths.ca_path, Some(base.join("certs/ca.pem")));
            assert_eq!(paths.pfx_path, None);
            assert_eq!(paths.passphrase, None);
        }
        other => panic!("expected certificate files, got {:?}", other),
    }
}
