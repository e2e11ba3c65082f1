use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt::format;
use tracing_subscriber::prelude::*;

/// Install the global log subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level is `info`, or `debug` when
/// `verbose` is true. Records emitted through the `log` facade are bridged by
/// the subscriber's `tracing-log` support, so library code only uses `log`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let format = format()
        .without_time()
        .with_level(true)
        .with_target(true)
        .with_ansi(true);

    // A second call (e.g. from tests) must not abort the process
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format).with_filter(filter))
        .try_init();
}
