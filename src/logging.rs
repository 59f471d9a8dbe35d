use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber, writing compact logs to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug` when
/// `verbose`. Stdout is left to command output.
pub fn init(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let fallback = if verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(fallback))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
