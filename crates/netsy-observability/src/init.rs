// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Logging initialization
//!
//! Console output always goes to stderr so tools can stream data on stdout.
//! With the `file-logging` feature and a `log_dir`, a JSON copy of every
//! event is written to a timestamped run folder:
//! ```text
//! ./logs/
//!   └── run_20250101_120000/
//!       └── netsy.log
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::cli::CrateDebugFlags;
use crate::config::{LogFormat, ObservabilityConfig};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps background log writers alive; logs are flushed when dropped
pub struct LoggingGuard {
    #[cfg(feature = "file-logging")]
    _file_guards: Vec<tracing_appender::non_blocking::WorkerGuard>,
    log_dir: Option<PathBuf>,
}

impl LoggingGuard {
    /// Run folder receiving log files, if file logging is active
    pub fn log_dir(&self) -> Option<&Path> {
        self.log_dir.as_deref()
    }
}

/// Filter directives: `RUST_LOG` when set, else debug flags over the base level
pub fn filter_directives(debug_flags: &CrateDebugFlags, config: &ObservabilityConfig) -> String {
    match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.trim().is_empty() => directives,
        _ => debug_flags.to_filter_string(&config.level),
    }
}

/// Install the global subscriber
///
/// # Errors
/// Fails if a global subscriber is already installed or the log folder
/// cannot be created.
pub fn init_logging(
    debug_flags: &CrateDebugFlags,
    config: &ObservabilityConfig,
) -> Result<LoggingGuard> {
    let directives = filter_directives(debug_flags, config);
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);
    let console = match config.format {
        LogFormat::Text => console.with_filter(EnvFilter::new(&directives)).boxed(),
        LogFormat::Json => console
            .json()
            .with_filter(EnvFilter::new(&directives))
            .boxed(),
    };
    layers.push(console);

    #[cfg(feature = "file-logging")]
    let guard = {
        let mut file_guards = Vec::new();
        let mut log_dir = None;
        if let Some(base) = &config.log_dir {
            let (layer, file_guard, run_folder) =
                file_layer(base, config.retention_runs, &directives)?;
            layers.push(layer);
            file_guards.push(file_guard);
            log_dir = Some(run_folder);
        }
        LoggingGuard {
            _file_guards: file_guards,
            log_dir,
        }
    };
    #[cfg(not(feature = "file-logging"))]
    let guard = LoggingGuard { log_dir: None };

    Registry::default()
        .with(layers)
        .try_init()
        .context("Failed to install the global tracing subscriber")?;

    if cfg!(not(feature = "file-logging")) && config.log_dir.is_some() {
        tracing::warn!("log_dir is set but netsy-observability was built without `file-logging`");
    }

    Ok(guard)
}

/// Console logging only, at the given base level
pub fn init_logging_default(debug_flags: &CrateDebugFlags) -> Result<LoggingGuard> {
    init_logging(debug_flags, &ObservabilityConfig::default())
}

#[cfg(feature = "file-logging")]
fn file_layer(
    base: &Path,
    retention_runs: usize,
    directives: &str,
) -> Result<(BoxedLayer, tracing_appender::non_blocking::WorkerGuard, PathBuf)> {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let run_folder = base.join(format!("run_{}", timestamp));
    std::fs::create_dir_all(&run_folder)
        .with_context(|| format!("Failed to create log directory: {}", run_folder.display()))?;

    cleanup_old_runs(base, retention_runs)?;

    let appender = tracing_appender::rolling::never(&run_folder, "netsy.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .json()
        .with_filter(EnvFilter::new(directives))
        .boxed();

    Ok((layer, guard, run_folder))
}

/// Delete the oldest `run_*` folders so at most `keep` remain (never fewer
/// than one). Returns the number removed.
///
/// Run folder names embed a sortable timestamp, so name order is age order.
pub fn cleanup_old_runs(base: &Path, keep: usize) -> Result<usize> {
    if !base.exists() {
        return Ok(0);
    }

    let mut runs: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(base)
        .with_context(|| format!("Failed to list log directory: {}", base.display()))?
    {
        let path = entry?.path();
        let is_run = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("run_"));
        if path.is_dir() && is_run {
            runs.push(path);
        }
    }
    runs.sort();

    let keep = keep.max(1);
    let excess = runs.len().saturating_sub(keep);
    for path in runs.iter().take(excess) {
        std::fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove old log directory {}", path.display()))?;
    }
    Ok(excess)
}
