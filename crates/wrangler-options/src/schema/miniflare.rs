//! The `[miniflare]` section: settings that only matter to local emulation

use serde::{Deserialize, Serialize};

/// A persistence setting: `true` for the default location, or a directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Persistence {
    Enabled(bool),
    Directory(String),
}

/// The `https` setting in any of its three accepted forms
///
/// ```toml
/// https = true                  # self-signed certificate
/// https = "./cert-cache"        # self-signed, cached in a directory
/// https = { key = "key.pem", cert = "cert.pem" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum HttpsConfig {
    Enabled(bool),
    Directory(String),
    Files(HttpsFiles),
}

/// Certificate files for the `https` table form
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HttpsFiles {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub cert: Option<String>,
    #[serde(default)]
    pub ca: Option<String>,
    #[serde(default)]
    pub pfx: Option<String>,
    #[serde(default)]
    pub passphrase: Option<String>,
}

/// A `[[miniflare.wasm_bindings]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WasmBinding {
    pub name: String,
    pub path: String,
}

/// Local emulation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MiniflareConfig {
    /// Origin requests are proxied to when the worker calls `fetch(request)`
    #[serde(default)]
    pub upstream: Option<String>,
    #[serde(default)]
    pub kv_persist: Option<Persistence>,
    #[serde(default)]
    pub cache_persist: Option<Persistence>,
    #[serde(default)]
    pub disable_cache: Option<bool>,
    #[serde(default)]
    pub durable_objects_persist: Option<Persistence>,
    /// Path of a `.env` file with extra variable bindings
    #[serde(default)]
    pub env_path: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub https: Option<HttpsConfig>,
    #[serde(default)]
    pub wasm_bindings: Option<Vec<WasmBinding>>,
    #[serde(default)]
    pub disable_updater: Option<bool>,
}
