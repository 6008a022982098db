//! Tracing subscriber setup.

use std::path::Path;

use anyhow::Result;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default `info`). When `log_dir`
/// is given, everything at `info` and above is also appended to
/// `champions.log` there.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter);

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "champions.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            // Keep the writer alive for the life of the process
            std::mem::forget(guard);

            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking_file)
                    .with_ansi(false)
                    .with_filter(tracing_subscriber::filter::LevelFilter::INFO),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(dir) = log_dir {
        tracing::info!("Log file: {}/champions.log", dir.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_is_info() {
        let filter = tracing_subscriber::EnvFilter::new(DEFAULT_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
