//! Tracing setup.
//!
//! The terminal UI owns stdout and stderr, so log records go to the file named
//! by [`Config::log_file`]. Without one, nothing is installed and `tracing`
//! macros stay no-ops.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `--verbose`
//! (`debug`), then [`Config::log_level`], then `info`.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Keeps the background log writer alive. Hold it until the program exits.
#[must_use]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

pub fn init_tracing(config: &Config, verbose: bool) -> LogGuard {
    let disabled = LogGuard { _worker: None };
    let Some(log_file) = config.log_file.as_deref() else {
        return disabled;
    };
    let Some(file_name) = log_file.file_name() else {
        return disabled;
    };

    let dir = log_file
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    if fs::create_dir_all(dir).is_err() {
        return disabled;
    }

    let level = if verbose {
        "debug"
    } else {
        config.log_level.as_deref().unwrap_or("info")
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(false);

    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();

    tracing::info!(file = %log_file.display(), level, "logging initialized");
    LogGuard {
        _worker: Some(guard),
    }
}
