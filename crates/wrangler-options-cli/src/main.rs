//! wrangler-options CLI
//!
//! Reads a wrangler.toml document and prints the options a local emulator
//! should be started with, as JSON.

mod cli;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use cli::Cli;
use error::{CliError, Result};
use wrangler_options::{ConfigResolver, NormalizedPath, RawConfig, ResolverSettings};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = absolute(&cli.config)?;
    tracing::debug!(?config_path, "Reading worker configuration");
    let content = fs::read_to_string(&config_path).map_err(|source| CliError::ReadConfig {
        path: config_path.clone(),
        source,
    })?;
    let document = RawConfig::parse(&content)?;

    if cli.list_envs {
        for name in document.environment_names() {
            println!("{}", name);
        }
        return Ok(());
    }

    if let Some(env) = cli.env.as_deref() {
        if cli.strict_env && !document.has_environment(env) {
            return Err(CliError::user(format!(
                "Environment '{}' is not defined in {}",
                env,
                config_path.display()
            )));
        }
    }

    let base_dir = match &cli.base_dir {
        Some(dir) => NormalizedPath::new(absolute(dir)?),
        None => {
            let config_path = NormalizedPath::new(&config_path);
            config_path.parent().unwrap_or(config_path)
        }
    };

    let mut settings = ResolverSettings::default();
    if let Some(command) = cli.rust_codegen {
        settings = settings.with_rust_codegen_command(command);
    }

    let resolver = ConfigResolver::with_settings(base_dir, settings);
    let options = resolver.resolve_document(document, cli.env.as_deref());

    let json = if cli.compact {
        serde_json::to_string(&options)?
    } else {
        serde_json::to_string_pretty(&options)?
    };
    println!("{}", json);
    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
