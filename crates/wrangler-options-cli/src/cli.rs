//! CLI argument parsing using clap derive

use clap::Parser;
use std::path::PathBuf;

/// Print the local emulator options a wrangler.toml resolves to
#[derive(Parser, Debug)]
#[command(name = "wrangler-options")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the wrangler.toml document
    #[arg(short, long, env = "WRANGLER_CONFIG", default_value = "wrangler.toml")]
    pub config: PathBuf,

    /// Named environment to apply
    #[arg(short, long, env = "WRANGLER_ENV")]
    pub env: Option<String>,

    /// Directory relative paths resolve against (defaults to the config's directory)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Code-generation step run after `wrangler build` for rust workers
    #[arg(long, env = "WRANGLER_RUST_CODEGEN")]
    pub rust_codegen: Option<String>,

    /// Fail when --env names an environment the document does not define
    #[arg(long)]
    pub strict_env: bool,

    /// List the environments the document defines and exit
    #[arg(long)]
    pub list_envs: bool,

    /// Print single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
