//! Schema definitions for wrangler.toml documents
//!
//! This module provides strongly-typed definitions for the sections of a
//! worker configuration document:
//!
//! - [`worker`] - the document root, worker type and named environments
//! - [`bindings`] - KV namespaces, sites, Durable Objects and cron triggers
//! - [`build`] - the custom build command and its upload descriptor
//! - [`miniflare`] - local-emulation settings

pub mod bindings;
pub mod build;
pub mod miniflare;
pub mod worker;

pub use bindings::{
    DurableObjectBinding, DurableObjectsConfig, KvNamespace, SiteConfig, TriggersConfig,
};
pub use build::{BuildConfig, ModuleRuleConfig, ModuleRuleType, UploadConfig, UploadFormat};
pub use miniflare::{HttpsConfig, HttpsFiles, MiniflareConfig, Persistence, WasmBinding};
pub use worker::{RawConfig, WorkerSettings, WorkerType};
