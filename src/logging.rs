//! Route `tracing` events to a log file.
//!
//! The terminal belongs to the UI, so nothing is written to stdout or stderr
//! once the explorer is running.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app_dirs;

/// Environment variable holding `tracing` filter directives.
pub const LOG_FILTER_ENV: &str = "LEETEX_LOG";

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_NAME: &str = "leetex.log";

/// Log file used when no explicit path is given.
pub fn default_log_path() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path` or the default log file.
///
/// Returns the file events are written to.
pub fn initialize(path: Option<&Path>) -> Result<PathBuf> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => default_log_path()?,
	};
	let file = open_log_file(&path)?;

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.with_target(true),
		)
		.with(env_filter(std::env::var(LOG_FILTER_ENV).ok().as_deref()))
		.try_init()
		.context("failed to install log subscriber")?;

	tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %path.display(), "logging initialised");
	Ok(path)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}

/// Build the filter from `directives`, falling back to the default level when
/// they are missing or invalid.
fn env_filter(directives: Option<&str>) -> EnvFilter {
	directives
		.filter(|value| !value.trim().is_empty())
		.and_then(|value| EnvFilter::try_new(value).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
