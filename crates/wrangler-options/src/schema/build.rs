//! The `[build]` section and its upload descriptor
//!
//! # Example TOML
//!
//! ```toml
//! [build]
//! command = "npm run build"
//! cwd = "worker"
//! watch_dir = "worker/src"
//!
//! [build.upload]
//! format = "modules"
//! dir = "dist"
//! main = "./index.mjs"
//!
//! [[build.upload.rules]]
//! type = "Text"
//! globs = ["**/*.txt"]
//! fallthrough = true
//! ```

use serde::{Deserialize, Serialize};

/// Custom build configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BuildConfig {
    /// Shell command producing the worker script
    #[serde(default)]
    pub command: Option<String>,
    /// Directory the command runs in
    #[serde(default)]
    pub cwd: Option<String>,
    /// Directory watched for changes to trigger a rebuild
    #[serde(default)]
    pub watch_dir: Option<String>,
    /// Where the build output lives
    #[serde(default)]
    pub upload: Option<UploadConfig>,
}

/// Script format of the build output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UploadFormat {
    ServiceWorker,
    Modules,
}

/// The `[build.upload]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UploadConfig {
    #[serde(default)]
    pub format: Option<UploadFormat>,
    /// Output directory; `dist` when unset, ignored when empty
    #[serde(default)]
    pub dir: Option<String>,
    /// Entry point inside the output directory
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub rules: Option<Vec<ModuleRuleConfig>>,
}

/// How files matched by a module rule are imported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ModuleRuleType {
    ESModule,
    CommonJS,
    Text,
    Data,
    CompiledWasm,
}

/// A `[[build.upload.rules]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModuleRuleConfig {
    #[serde(rename = "type")]
    pub rule_type: ModuleRuleType,
    pub globs: Vec<String>,
    /// Let later rules of the same type apply as well
    #[serde(default)]
    pub fallthrough: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_format_uses_kebab_case() {
        let upload: UploadConfig = toml::from_str("format = \"service-worker\"").unwrap();
        assert_eq!(upload.format, Some(UploadFormat::ServiceWorker));
    }

    #[test]
    fn rule_type_names_match_runtime_names() {
        let rule: ModuleRuleConfig =
            toml::from_str("type = \"CompiledWasm\"\nglobs = [\"**/*.wasm\"]").unwrap();
        assert_eq!(rule.rule_type, ModuleRuleType::CompiledWasm);
        assert_eq!(rule.fallthrough, None);
    }
}
