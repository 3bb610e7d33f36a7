//! Resolution of a wrangler.toml document into emulator options
//!
//! The `ConfigResolver` runs three stages over a decoded document, each
//! consuming the previous stage's value:
//!
//! 1. [`select_environment`] - apply a named environment's overrides
//! 2. [`autofill_build`] - synthesize the build section `webpack` and `rust`
//!    workers imply
//! 3. [`map_options`] - project the result onto [`WorkerOptions`]

use crate::Result;
use crate::autofill::autofill_build;
use crate::environment::select_environment;
use crate::mapping::map_options;
use crate::options::WorkerOptions;
use crate::path::NormalizedPath;
use crate::schema::RawConfig;

/// Bundler invocation used for `webpack` and `rust` workers
pub const DEFAULT_BUNDLER_COMMAND: &str = "wrangler build";

/// Code-generation step run after the bundler for `rust` workers
pub const DEFAULT_RUST_CODEGEN_COMMAND: &str = "wrangler-rust-codegen";

/// Commands the resolver writes into synthesized build sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Bundler invocation (`wrangler build`)
    pub bundler_command: String,
    /// Command turning the bundler's wasm-bindgen output into
    /// `worker/generated/script.js` and `script.wasm`
    pub rust_codegen_command: String,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            bundler_command: DEFAULT_BUNDLER_COMMAND.to_string(),
            rust_codegen_command: DEFAULT_RUST_CODEGEN_COMMAND.to_string(),
        }
    }
}

impl ResolverSettings {
    /// Replace the bundler invocation
    pub fn with_bundler_command(mut self, command: impl Into<String>) -> Self {
        self.bundler_command = command.into();
        self
    }

    /// Replace the rust code-generation step
    pub fn with_rust_codegen_command(mut self, command: impl Into<String>) -> Self {
        self.rust_codegen_command = command.into();
        self
    }
}

/// Resolves wrangler.toml documents found in one base directory
///
/// Holds no state between calls; resolving the same input twice gives equal
/// results and a resolver can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Directory relative paths in the document are resolved against
    base_dir: NormalizedPath,

    settings: ResolverSettings,
}

impl ConfigResolver {
    /// Create a resolver with default settings
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Absolute directory containing the document
    pub fn new(base_dir: impl Into<NormalizedPath>) -> Self {
        Self::with_settings(base_dir, ResolverSettings::default())
    }

    /// Create a resolver with custom build commands
    pub fn with_settings(base_dir: impl Into<NormalizedPath>, settings: ResolverSettings) -> Self {
        Self {
            base_dir: base_dir.into(),
            settings,
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &NormalizedPath {
        &self.base_dir
    }

    /// Get the resolver settings
    pub fn settings(&self) -> &ResolverSettings {
        &self.settings
    }

    /// Decode `content` and resolve it
    ///
    /// An `environment` the document does not define is ignored. Callers
    /// wanting to reject unknown names should check
    /// [`RawConfig::has_environment`] first.
    ///
    /// # Returns
    ///
    /// The emulator options, or a decode error if `content` is not a valid
    /// wrangler.toml document
    ///
    /// # Example
    ///
    /// ```
    /// use wrangler_options::ConfigResolver;
    ///
    /// let resolver = ConfigResolver::new("/home/dev/site");
    /// let options = resolver.resolve(r#"
    /// type = "javascript"
    ///
    /// [site]
    /// bucket = "./public"
    /// "#, None).unwrap();
    ///
    /// assert_eq!(options.site_path.unwrap().as_str(), "/home/dev/site/public");
    /// assert!(options.script_path.is_none());
    /// ```
    pub fn resolve(&self, content: &str, environment: Option<&str>) -> Result<WorkerOptions> {
        let config = RawConfig::parse(content)?;
        Ok(self.resolve_document(config, environment))
    }

    /// Resolve an already decoded document
    pub fn resolve_document(&self, config: RawConfig, environment: Option<&str>) -> WorkerOptions {
        let span = tracing::debug_span!(
            "resolve_worker",
            worker = config.settings.name.as_deref().unwrap_or("<unnamed>"),
            environment = environment.unwrap_or("<root>"),
            worker_type = ?config.worker_type,
        );
        let _guard = span.enter();

        let selected = select_environment(config, environment);
        let settings = autofill_build(selected, &self.base_dir, &self.settings);
        map_options(&settings, &self.base_dir)
    }
}

/// Resolve `content` against `base_dir` with default settings.
pub fn resolve(
    content: &str,
    base_dir: impl Into<NormalizedPath>,
    environment: Option<&str>,
) -> Result<WorkerOptions> {
    ConfigResolver::new(base_dir).resolve(content, environment)
}
