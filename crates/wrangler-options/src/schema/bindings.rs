//! Binding sections: KV namespaces, Workers Sites, Durable Objects, triggers

use serde::{Deserialize, Serialize};

/// A `[[kv_namespaces]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct KvNamespace {
    /// Binding name exposed to the worker
    pub binding: String,
    /// Production namespace id
    #[serde(default)]
    pub id: Option<String>,
    /// Namespace id used by `wrangler dev`
    #[serde(default)]
    pub preview_id: Option<String>,
}

/// The `[site]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Directory holding the static assets, relative to the document
    #[serde(default)]
    pub bucket: Option<String>,
    /// Directory of the generated site worker
    #[serde(default, rename = "entry-point")]
    pub entry_point: Option<String>,
    /// Globs of assets to serve
    #[serde(default)]
    pub include: Option<Vec<String>>,
    /// Globs of assets to hide
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

/// The `[durable_objects]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DurableObjectsConfig {
    #[serde(default)]
    pub bindings: Option<Vec<DurableObjectBinding>>,
}

/// One Durable Object binding
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DurableObjectBinding {
    /// Binding name exposed to the worker
    pub name: String,
    /// Exported class implementing the object
    pub class_name: String,
    /// Worker script exporting the class, when not this one
    #[serde(default)]
    pub script_name: Option<String>,
}

/// The `[triggers]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TriggersConfig {
    #[serde(default)]
    pub crons: Option<Vec<String>>,
}
