//! Environment selection
//!
//! Applies the overrides of one `[env.<name>]` table onto the root settings.
//! The merge is shallow: each top-level field the environment sets replaces
//! the root field wholesale, and fields it leaves out are kept from the root.
//! An environment name the document does not define selects nothing.

use crate::schema::{RawConfig, WorkerSettings, WorkerType};

/// A document with its environment applied and the environment table dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedConfig {
    pub worker_type: WorkerType,
    pub settings: WorkerSettings,
}

/// Select `environment` from `config`, if both are present.
pub fn select_environment(config: RawConfig, environment: Option<&str>) -> SelectedConfig {
    let RawConfig {
        worker_type,
        env,
        settings,
    } = config;

    let overrides = environment.and_then(|name| {
        let selected = env.and_then(|mut envs| envs.remove(name));
        if selected.is_some() {
            tracing::debug!(environment = name, "Applying environment overrides");
        } else {
            tracing::debug!(
                environment = name,
                "Environment not defined in document, using root settings"
            );
        }
        selected
    });

    let settings = match overrides {
        Some(overrides) => overlay(settings, overrides),
        None => settings,
    };

    SelectedConfig {
        worker_type,
        settings,
    }
}

/// Shallow merge: every field set in `overrides` replaces the one in `base`.
///
/// Both structs are destructured field by field, so a new settings field
/// does not compile until it is listed here.
pub fn overlay(base: WorkerSettings, overrides: WorkerSettings) -> WorkerSettings {
    let WorkerSettings {
        name,
        vars,
        kv_namespaces,
        site,
        durable_objects,
        triggers,
        build,
        miniflare,
    } = overrides;

    WorkerSettings {
        name: name.or(base.name),
        vars: vars.or(base.vars),
        kv_namespaces: kv_namespaces.or(base.kv_namespaces),
        site: site.or(base.site),
        durable_objects: durable_objects.or(base.durable_objects),
        triggers: triggers.or(base.triggers),
        build: build.or(base.build),
        miniflare: miniflare.or(base.miniflare),
    }
}
