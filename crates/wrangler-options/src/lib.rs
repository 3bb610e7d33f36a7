//! Resolves wrangler.toml worker configuration into local emulator options.
//!
//! A wrangler.toml document describes a worker's bindings, its build pipeline
//! and its local-emulation settings, optionally per named environment. This
//! crate turns one such document into the flat [`WorkerOptions`] structure a
//! local emulator consumes:
//!
//! - **Environment selection**: `[env.<name>]` overrides replace root fields
//! - **Build autofill**: `webpack` and `rust` workers get the build section
//!   `wrangler build` implies
//! - **Field mapping**: fields are renamed and reshaped, relative paths are
//!   resolved against the document's directory
//!
//! Nothing here reads files or runs commands.
//!
//! # Example
//!
//! ```
//! use wrangler_options::resolve;
//!
//! let options = resolve(r#"
//! type = "webpack"
//!
//! [vars]
//! GREETING = "hello"
//! "#, "/home/dev/worker", None).unwrap();
//!
//! assert_eq!(options.build_command.as_deref(), Some("wrangler build"));
//! assert_eq!(
//!     options.script_path.unwrap().as_str(),
//!     "/home/dev/worker/worker/script.js"
//! );
//! ```

pub mod autofill;
pub mod environment;
pub mod error;
pub mod mapping;
pub mod options;
pub mod path;
pub mod resolver;
pub mod schema;

pub use error::{Error, Result};
pub use options::{DurableObjectOptions, HttpsOptions, HttpsPaths, ModuleRule, WorkerOptions};
pub use path::NormalizedPath;
pub use resolver::{ConfigResolver, ResolverSettings, resolve};
pub use schema::RawConfig;
