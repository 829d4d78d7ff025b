//! Logging and tracing configuration
//!
//! Logs go to stderr so reports on stdout stay clean.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
///
/// Failing checks are already printed on stdout by the scenario runner and
/// the `diff` command, so their `warn!`/`info!` records stay quiet unless
/// asked for.
const DEFAULT_FILTER: &str = "linediff=error,warn";

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "linediff=debug,warn";

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initialize tracing for the CLI (stderr logging)
///
/// Logs are controlled by the `RUST_LOG` environment variable.
/// Reports are printed directly, so by default only errors are logged for
/// this crate; `verbose` raises that to DEBUG.
pub fn init_cli(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
