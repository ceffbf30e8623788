//! Tracing subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Compact human-readable lines.
    Human,
}

/// Install the global subscriber. Logs go to stderr so page output stays clean.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` for the shop crates
/// with `--verbose`.
pub fn init(verbose: bool, json: bool) {
    let default_directive = if verbose {
        "warn,shop_storefront=debug,shop_data=debug,shop_commerce=debug,shop_cli=debug"
    } else {
        "warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let format = if json { LogFormat::Json } else { LogFormat::Human };

    let registry = tracing_subscriber::registry();
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_filter(env_filter),
            )
            .try_init(),
        LogFormat::Human => registry
            .with(
                fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr)
                    .with_target(verbose)
                    .with_filter(env_filter),
            )
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }
}
