//! Field mapping from wrangler.toml settings to emulator options
//!
//! A pure projection: absent source fields stay absent. The only values that
//! appear out of nowhere are the `dist` upload directory used when resolving
//! the script path and the `src` watch directory used when a build command is
//! set without one.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::options::{DurableObjectOptions, HttpsOptions, HttpsPaths, ModuleRule, WorkerOptions};
use crate::path::NormalizedPath;
use crate::schema::{
    BuildConfig, DurableObjectBinding, HttpsConfig, UploadConfig, UploadFormat, WasmBinding,
    WorkerSettings,
};

/// Upload directory assumed when `build.upload.dir` is unset
pub const DEFAULT_UPLOAD_DIR: &str = "dist";

/// Watch directory assumed when a build command is set without `watch_dir`
pub const DEFAULT_WATCH_DIR: &str = "src";

/// Project `settings` onto emulator options, resolving paths against `base_dir`.
pub fn map_options(settings: &WorkerSettings, base_dir: &NormalizedPath) -> WorkerOptions {
    let build = settings.build.as_ref();
    let upload = build.and_then(|b| b.upload.as_ref());
    let site = settings.site.as_ref();
    let miniflare = settings.miniflare.as_ref();

    let options = WorkerOptions {
        script_path: upload.and_then(|u| script_path(u, base_dir)),
        modules: upload
            .and_then(|u| u.format)
            .map(|format| format == UploadFormat::Modules),
        modules_rules: upload.and_then(|u| u.rules.as_ref()).map(|rules| {
            rules
                .iter()
                .map(|rule| ModuleRule {
                    rule_type: rule.rule_type,
                    include: rule.globs.clone(),
                    fallthrough: rule.fallthrough,
                })
                .collect()
        }),

        bindings: settings.vars.as_ref().map(|vars| {
            vars.iter()
                .map(|(name, value)| (name.clone(), binding_value(value)))
                .collect()
        }),
        kv_namespaces: settings
            .kv_namespaces
            .as_ref()
            .map(|namespaces| namespaces.iter().map(|ns| ns.binding.clone()).collect()),
        site_path: site
            .and_then(|s| non_empty(s.bucket.as_deref()))
            .map(|bucket| base_dir.resolve([bucket])),
        site_include: site.and_then(|s| s.include.clone()),
        site_exclude: site.and_then(|s| s.exclude.clone()),
        durable_objects: settings
            .durable_objects
            .as_ref()
            .and_then(|d| d.bindings.as_deref())
            .map(durable_objects),
        crons: settings.triggers.as_ref().and_then(|t| t.crons.clone()),

        build_command: build.and_then(|b| b.command.clone()),
        build_base_path: build.and_then(|b| b.cwd.clone()),
        build_watch_path: build.and_then(watch_path),

        upstream: miniflare.and_then(|m| m.upstream.clone()),
        kv_persist: miniflare.and_then(|m| m.kv_persist.clone()),
        cache_persist: miniflare.and_then(|m| m.cache_persist.clone()),
        disable_cache: miniflare.and_then(|m| m.disable_cache),
        durable_objects_persist: miniflare.and_then(|m| m.durable_objects_persist.clone()),
        env_path: miniflare.and_then(|m| m.env_path.clone()),
        host: miniflare.and_then(|m| m.host.clone()),
        port: miniflare.and_then(|m| m.port),
        https: miniflare
            .and_then(|m| m.https.as_ref())
            .map(|https| https_options(https, base_dir)),
        wasm_bindings: miniflare
            .and_then(|m| m.wasm_bindings.as_deref())
            .map(wasm_bindings),
        disable_updater: miniflare.and_then(|m| m.disable_updater),
    };

    tracing::trace!(
        script = ?options.script_path,
        bindings = options.bindings.as_ref().map_or(0, BTreeMap::len),
        kv_namespaces = options.kv_namespaces.as_ref().map_or(0, Vec::len),
        durable_objects = options.durable_objects.as_ref().map_or(0, BTreeMap::len),
        wasm_bindings = options.wasm_bindings.as_ref().map_or(0, BTreeMap::len),
        "Mapped worker options"
    );

    options
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn script_path(upload: &UploadConfig, base_dir: &NormalizedPath) -> Option<NormalizedPath> {
    let main = non_empty(upload.main.as_deref())?;
    let dir = upload.dir.as_deref().unwrap_or(DEFAULT_UPLOAD_DIR);
    Some(base_dir.resolve([dir, main]))
}

/// `watch_dir`, else `src` when a command is set. An empty command yields an
/// empty watch path.
fn watch_path(build: &BuildConfig) -> Option<String> {
    build.watch_dir.clone().or_else(|| {
        build.command.as_deref().map(|command| {
            if command.is_empty() {
                String::new()
            } else {
                DEFAULT_WATCH_DIR.to_string()
            }
        })
    })
}

/// Convert a TOML variable to JSON. Dates and times become their TOML text;
/// non-finite floats become null.
fn binding_value(value: &toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s.clone()),
        toml::Value::Integer(i) => Value::from(*i),
        toml::Value::Float(f) => {
            serde_json::Number::from_f64(*f).map_or(Value::Null, Value::Number)
        }
        toml::Value::Boolean(b) => Value::Bool(*b),
        toml::Value::Datetime(datetime) => Value::String(datetime.to_string()),
        toml::Value::Array(items) => Value::Array(items.iter().map(binding_value).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .iter()
                .map(|(key, value)| (key.clone(), binding_value(value)))
                .collect(),
        ),
    }
}

/// Fold bindings into a map; a repeated name keeps the last entry.
fn durable_objects(bindings: &[DurableObjectBinding]) -> BTreeMap<String, DurableObjectOptions> {
    bindings.iter().fold(BTreeMap::new(), |mut objects, binding| {
        objects.insert(
            binding.name.clone(),
            DurableObjectOptions {
                class_name: binding.class_name.clone(),
                script_path: binding.script_name.clone(),
            },
        );
        objects
    })
}

/// Fold bindings into a map; a repeated name keeps the last entry.
fn wasm_bindings(bindings: &[WasmBinding]) -> BTreeMap<String, String> {
    bindings.iter().fold(BTreeMap::new(), |mut modules, binding| {
        modules.insert(binding.name.clone(), binding.path.clone());
        modules
    })
}

fn https_options(https: &HttpsConfig, base_dir: &NormalizedPath) -> HttpsOptions {
    let resolve = |file: &Option<String>| file.as_deref().map(|f| base_dir.resolve([f]));
    match https {
        HttpsConfig::Enabled(enabled) => HttpsOptions::Enabled(*enabled),
        HttpsConfig::Directory(dir) => HttpsOptions::Directory(dir.clone()),
        HttpsConfig::Files(files) => HttpsOptions::Files(HttpsPaths {
            key_path: resolve(&files.key),
            cert_path: resolve(&files.cert),
            ca_path: resolve(&files.ca),
            pfx_path: resolve(&files.pfx),
            passphrase: files.passphrase.clone(),
        }),
    }
}
