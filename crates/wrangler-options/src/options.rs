//! Canonical emulator options
//!
//! [`WorkerOptions`] is the flat structure handed to the local emulator. It
//! serializes to the camelCase JSON shape the emulator reads, leaving out
//! every field that was absent from the source document.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::path::NormalizedPath;
use crate::schema::{ModuleRuleType, Persistence};

/// A module classification rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleRule {
    #[serde(rename = "type")]
    pub rule_type: ModuleRuleType,
    pub include: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallthrough: Option<bool>,
}

/// A Durable Object binding target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurableObjectOptions {
    pub class_name: String,
    /// Name of the script exporting the class
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_path: Option<String>,
}

/// Resolved certificate files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpsPaths {
    pub key_path: Option<NormalizedPath>,
    pub cert_path: Option<NormalizedPath>,
    pub ca_path: Option<NormalizedPath>,
    pub pfx_path: Option<NormalizedPath>,
    pub passphrase: Option<String>,
}

/// The `https` option as the emulator accepts it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HttpsOptions {
    Enabled(bool),
    Directory(String),
    Files(HttpsPaths),
}

/// Options for the local emulation runtime
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_path: Option<NormalizedPath>,
    /// `Some(true)` when the script is an ES module worker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modules_rules: Option<Vec<ModuleRule>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bindings: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kv_namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_path: Option<NormalizedPath>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_exclude: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durable_objects: Option<BTreeMap<String, DurableObjectOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crons: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_base_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_watch_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kv_persist: Option<Persistence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_persist: Option<Persistence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub durable_objects_persist: Option<Persistence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https: Option<HttpsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm_bindings: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_updater: Option<bool>,
}

impl WorkerOptions {
    /// Convert the options to a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}
