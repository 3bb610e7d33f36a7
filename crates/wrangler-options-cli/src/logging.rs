use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install a stderr subscriber so stdout only carries the JSON output.
///
/// `--verbose` forces debug level, otherwise `RUST_LOG` is honoured and
/// defaults to "warn".
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
