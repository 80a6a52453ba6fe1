//! Process-wide `tracing` setup.
//!
//! The list screen owns the terminal, so events go to a log file in the cache
//! directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use shoplist_core::{Change, ListState, StoreObserver};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::app_dirs;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "SHOPLIST_LOG";
/// File name of the log inside the cache directory.
pub const LOG_FILE_NAME: &str = "shoplist.log";

/// Install the file subscriber and return the log path.
///
/// `SHOPLIST_LOG` takes precedence over `level`. Calling this more than once
/// keeps the first subscriber.
pub fn initialize(level: LevelFilter) -> Result<PathBuf> {
	let dir = app_dirs::get_cache_dir()?;
	fs::create_dir_all(&dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter(level))
		.with_ansi(false)
		.with_target(false)
		.with_writer(Mutex::new(file))
		.try_init();

	Ok(path)
}

fn filter(level: LevelFilter) -> EnvFilter {
	EnvFilter::builder()
		.with_default_directive(level.into())
		.with_env_var(LOG_ENV)
		.from_env_lossy()
}

/// Observer that records item-level changes at `info`.
#[must_use]
pub fn change_logger() -> impl StoreObserver {
	|change: Change, state: &ListState| {
		if let Some(id) = change.item() {
			info!(%id, ?change, items = state.len(), "shopping list updated");
		}
	}
}
