//! Build autofill for `webpack` and `rust` workers
//!
//! Workers of these two types are built by `wrangler build` and never carry a
//! `[build]` section of their own. When the section is missing, one is
//! synthesized that runs the bundler in the base directory and points the
//! upload entry point at the bundler's output. Rust workers also get a `wasm`
//! binding for the generated WebAssembly module.
//!
//! A document that has any `[build]` section, even an empty one, is left
//! alone: partial sections are never completed.

use crate::environment::SelectedConfig;
use crate::path::NormalizedPath;
use crate::resolver::ResolverSettings;
use crate::schema::{BuildConfig, UploadConfig, WasmBinding, WorkerSettings, WorkerType};

/// Entry point written by `wrangler build` for webpack workers
pub const WEBPACK_SCRIPT: &str = "worker/script.js";

/// Entry point written by the code-generation step for rust workers
pub const RUST_SCRIPT: &str = "worker/generated/script.js";

/// WebAssembly module written by the code-generation step for rust workers
pub const RUST_WASM_MODULE: &str = "worker/generated/script.wasm";

/// Binding name of the generated WebAssembly module
pub const RUST_WASM_BINDING: &str = "wasm";

/// Fill in the build section for worker types that imply one.
pub fn autofill_build(
    selected: SelectedConfig,
    base_dir: &NormalizedPath,
    resolver_settings: &ResolverSettings,
) -> WorkerSettings {
    let SelectedConfig {
        worker_type,
        mut settings,
    } = selected;

    if settings.build.is_some() {
        tracing::debug!(?worker_type, "Build section present, skipping autofill");
        return settings;
    }

    match worker_type {
        WorkerType::Javascript => {}
        WorkerType::Webpack => {
            tracing::debug!(%base_dir, "Synthesizing webpack build");
            settings.build = Some(synthesized_build(
                base_dir,
                resolver_settings.bundler_command.clone(),
                WEBPACK_SCRIPT,
            ));
        }
        WorkerType::Rust => {
            tracing::debug!(%base_dir, "Synthesizing rust build");
            let command = format!(
                "{} && {}",
                resolver_settings.bundler_command, resolver_settings.rust_codegen_command
            );
            settings.build = Some(synthesized_build(base_dir, command, RUST_SCRIPT));

            // The module path is absolute already; wasm binding paths are not
            // resolved again during mapping.
            let mut miniflare = settings.miniflare.take().unwrap_or_default();
            miniflare
                .wasm_bindings
                .get_or_insert_with(Vec::new)
                .push(WasmBinding {
                    name: RUST_WASM_BINDING.to_string(),
                    path: base_dir.resolve([RUST_WASM_MODULE]).to_string(),
                });
            settings.miniflare = Some(miniflare);
        }
    }

    settings
}

/// A build section running `command` in `base_dir`, uploading `main`.
///
/// The upload directory is empty rather than unset so the entry point
/// resolves against the base directory instead of `dist`.
fn synthesized_build(base_dir: &NormalizedPath, command: String, main: &str) -> BuildConfig {
    let upload = UploadConfig {
        format: None,
        dir: Some(String::new()),
        main: Some(main.to_string()),
        rules: None,
    };

    BuildConfig {
        command: Some(command),
        cwd: Some(base_dir.to_string()),
        watch_dir: None,
        upload: Some(upload),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::MiniflareConfig;
    use pretty_assertions::assert_eq;

    fn selected(worker_type: WorkerType, settings: WorkerSettings) -> SelectedConfig {
        SelectedConfig {
            worker_type,
            settings,
        }
    }

    fn base() -> NormalizedPath {
        NormalizedPath::new("/home/dev/worker")
    }

    #[test]
    fn javascript_is_never_filled() {
        let settings = autofill_build(
            selected(WorkerType::Javascript, WorkerSettings::default()),
            &base(),
            &ResolverSettings::default(),
        );
        assert_eq!(settings, WorkerSettings::default());
    }

    #[test]
    fn webpack_gets_bundler_build() {
        let settings = autofill_build(
            selected(WorkerType::Webpack, WorkerSettings::default()),
            &base(),
            &ResolverSettings::default(),
        );

        let build = settings.build.unwrap();
        assert_eq!(build.command.as_deref(), Some("wrangler build"));
        assert_eq!(build.cwd.as_deref(), Some("/home/dev/worker"));
        assert_eq!(build.watch_dir, None);

        let upload = build.upload.unwrap();
        assert_eq!(upload.dir.as_deref(), Some(""));
        assert_eq!(upload.main.as_deref(), Some("worker/script.js"));
        assert_eq!(upload.format, None);
        assert!(settings.miniflare.is_none());
    }

    #[test]
    fn rust_gets_codegen_step_and_wasm_binding() {
        let resolver_settings = ResolverSettings::default().with_rust_codegen_command("gen-wasm");
        let settings = autofill_build(
            selected(WorkerType::Rust, WorkerSettings::default()),
            &base(),
            &resolver_settings,
        );

        let build = settings.build.unwrap();
        assert_eq!(build.command.as_deref(), Some("wrangler build && gen-wasm"));
        assert_eq!(
            build.upload.unwrap().main.as_deref(),
            Some("worker/generated/script.js")
        );

        let bindings = settings.miniflare.unwrap().wasm_bindings.unwrap();
        assert_eq!(
            bindings,
            vec![WasmBinding {
                name: "wasm".into(),
                path: "/home/dev/worker/worker/generated/script.wasm".into(),
            }]
        );
    }

    #[test]
    fn rust_appends_after_existing_wasm_bindings() {
        let existing = WorkerSettings {
            miniflare: Some(MiniflareConfig {
                port: Some(8787),
                wasm_bindings: Some(vec![WasmBinding {
                    name: "extra".into(),
                    path: "extra.wasm".into(),
                }]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let settings = autofill_build(
            selected(WorkerType::Rust, existing),
            &base(),
            &ResolverSettings::default(),
        );

        let miniflare = settings.miniflare.unwrap();
        assert_eq!(miniflare.port, Some(8787));
        let names: Vec<_> = miniflare
            .wasm_bindings
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["extra", "wasm"]);
    }

    #[test]
    fn existing_build_section_is_left_alone() {
        let explicit = WorkerSettings {
            build: Some(BuildConfig::default()),
            ..Default::default()
        };

        let settings = autofill_build(
            selected(WorkerType::Rust, explicit.clone()),
            &base(),
            &ResolverSettings::default(),
        );

        assert_eq!(settings, explicit);
    }
}
