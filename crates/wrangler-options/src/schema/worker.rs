//! Document root of a wrangler.toml file
//!
//! # Example TOML
//!
//! ```toml
//! name = "my-worker"
//! type = "webpack"
//!
//! [vars]
//! API_HOST = "example.com"
//!
//! [env.staging]
//! name = "my-worker-staging"
//! vars = { API_HOST = "staging.example.com" }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::bindings::{DurableObjectsConfig, KvNamespace, SiteConfig, TriggersConfig};
use super::build::BuildConfig;
use super::miniflare::MiniflareConfig;
use crate::Result;

/// Build toolchain a worker was created with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WorkerType {
    /// Plain JavaScript, no implied build step
    #[default]
    Javascript,
    /// Bundled with webpack through `wrangler build`
    Webpack,
    /// Rust compiled to WebAssembly through `wrangler build`
    Rust,
}

/// Settings that may appear both at the document root and inside a named
/// environment.
///
/// A named environment (`[env.<name>]`) is decoded into this same struct, and
/// every field it sets replaces the root value wholesale when that
/// environment is selected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WorkerSettings {
    /// Worker name, used for log context only
    #[serde(default)]
    pub name: Option<String>,

    /// Plain-text variable bindings
    ///
    /// Kept as TOML values so dates survive decoding; they reach the
    /// emulator as strings.
    #[serde(default)]
    pub vars: Option<BTreeMap<String, toml::Value>>,

    /// Key-value namespace bindings
    #[serde(default)]
    pub kv_namespaces: Option<Vec<KvNamespace>>,

    /// Workers Site static asset configuration
    #[serde(default)]
    pub site: Option<SiteConfig>,

    /// Durable Object bindings
    #[serde(default)]
    pub durable_objects: Option<DurableObjectsConfig>,

    /// Scheduled event triggers
    #[serde(default)]
    pub triggers: Option<TriggersConfig>,

    /// Custom build configuration
    #[serde(default)]
    pub build: Option<BuildConfig>,

    /// Local emulation settings
    #[serde(default)]
    pub miniflare: Option<MiniflareConfig>,
}

/// A decoded wrangler.toml document
///
/// Keys the resolver has no use for (`account_id`, `route`, `zone_id`, ...)
/// are accepted and dropped.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawConfig {
    /// Worker type; documents without one are treated as plain JavaScript
    #[serde(rename = "type", default)]
    pub worker_type: WorkerType,

    /// Named environments keyed by name
    #[serde(default)]
    pub env: Option<BTreeMap<String, WorkerSettings>>,

    /// Root-level settings
    #[serde(flatten)]
    pub settings: WorkerSettings,
}

impl RawConfig {
    /// Decode a document from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use wrangler_options::schema::{RawConfig, WorkerType};
    ///
    /// let config = RawConfig::parse(r#"
    /// type = "rust"
    /// name = "wasm-worker"
    ///
    /// [env.production]
    /// name = "wasm-worker-prod"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.worker_type, WorkerType::Rust);
    /// assert!(config.has_environment("production"));
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: RawConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Look up a named environment
    pub fn environment(&self, name: &str) -> Option<&WorkerSettings> {
        self.env.as_ref().and_then(|envs| envs.get(name))
    }

    /// Check whether the document defines the named environment
    pub fn has_environment(&self, name: &str) -> bool {
        self.environment(name).is_some()
    }

    /// Names of all environments the document defines, sorted
    pub fn environment_names(&self) -> Vec<&str> {
        self.env
            .as_ref()
            .map(|envs| envs.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
