//! Console logging setup shared by both binaries

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive used when `--verbose` is given
pub const VERBOSE_FILTER: &str = "debug";
/// Filter directive used otherwise
pub const DEFAULT_FILTER: &str = "info";

/// Pick the filter directive for the requested verbosity
pub const fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Build the console subscriber writing plain lines to `writer`
///
/// Lines carry the level but neither timestamp nor target.
pub fn console_subscriber<W>(
    filter: EnvFilter,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .finish()
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the verbosity flag. Events are written to
/// stdout so warnings read as plain report lines. Calling this more than once
/// keeps the first subscriber.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    if console_subscriber(filter, std::io::stdout).try_init().is_err() {
        tracing::debug!("Global tracing subscriber already initialized");
    }
}
