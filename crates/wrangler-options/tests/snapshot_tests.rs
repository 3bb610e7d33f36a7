//! Snapshots of the JSON handed to the emulator

use wrangler_options::ConfigResolver;

fn render(content: &str, environment: Option<&str>) -> String {
    let resolver = ConfigResolver::new("/home/dev/worker");
    let options = resolver.resolve(content, environment).unwrap();
    serde_json::to_string_pretty(&options).unwrap()
}

#[test]
fn snapshot_rust_worker_in_staging() {
    let rendered = render(
        r#"
name = "wasm-worker"
type = "rust"

[vars]
MODE = "dev"

[miniflare]
port = 8787

[env.staging]
vars = { MODE = "staging" }
"#,
        Some("staging"),
    );

    insta::assert_snapshot!(rendered, @r###"
    {
      "scriptPath": "/home/dev/worker/worker/generated/script.js",
      "bindings": {
        "MODE": "staging"
      },
      "buildCommand": "wrangler build && wrangler-rust-codegen",
      "buildBasePath": "/home/dev/worker",
      "buildWatchPath": "src",
      "port": 8787,
      "wasmBindings": {
        "wasm": "/home/dev/worker/worker/generated/script.wasm"
      }
    }
    "###);
}

#[test]
fn snapshot_modules_worker_with_certificates() {
    let rendered = render(
        r#"
[build]
command = "npm run build"

[build.upload]
format = "modules"
dir = "out"
main = "index.mjs"

[miniflare]
https = { cert = "certs/cert.pem", key = "certs/key.pem", passphrase = "secret" }
"#,
        None,
    );

    insta::assert_snapshot!(rendered, @r###"
    {
      "scriptPath": "/home/dev/worker/out/index.mjs",
      "modules": true,
      "buildCommand": "npm run build",
      "buildWatchPath": "src",
      "https": {
        "keyPath": "/home/dev/worker/certs/key.pem",
        "certPath": "/home/dev/worker/certs/cert.pem",
        "caPath": null,
        "pfxPath": null,
        "passphrase": "secret"
      }
    }
    "###);
}
