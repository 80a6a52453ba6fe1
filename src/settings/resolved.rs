use std::fmt::Write;

use shoplist::{Seed, SeedError, Theme, UiLabels};
use shoplist::style::ThemeError;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

/// Values in the merged configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
	#[error(transparent)]
	Seed(#[from] SeedError),
	#[error(transparent)]
	Theme(#[from] ThemeError),
	#[error("invalid log level `{0}` (expected off, error, warn, info, debug or trace)")]
	InvalidLogLevel(String),
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub title: Option<String>,
	pub theme_name: String,
	pub theme: Theme,
	pub browse_hint: Option<String>,
	pub seeds: Vec<Seed>,
	pub log_level: LevelFilter,
}

impl ResolvedConfig {
	/// Labels for the list screen with the configured overrides applied.
	#[must_use]
	pub fn labels(&self) -> UiLabels {
		let mut labels = UiLabels::default();
		if let Some(title) = &self.title {
			labels = labels.with_title(title.clone());
		}
		if let Some(hint) = &self.browse_hint {
			labels = labels.with_browse_hint(hint.clone());
		}
		labels
	}

	/// Human readable summary of the effective configuration.
	#[must_use]
	pub fn summary(&self) -> String {
		let labels = self.labels();
		let mut out = String::from("Effective configuration:\n");
		let _ = writeln!(out, "  Title: {}", labels.title);
		let _ = writeln!(out, "  Theme: {}", self.theme_name);
		let _ = writeln!(out, "  Hint: {}", labels.browse_hint);
		let _ = writeln!(out, "  Log level: {}", self.log_level);
		if self.seeds.is_empty() {
			let _ = writeln!(out, "  Items: (none)");
		} else {
			let items: Vec<String> = self.seeds.iter().map(ToString::to_string).collect();
			let _ = writeln!(out, "  Items: {}", items.join(", "));
		}
		out
	}

	/// Print [`Self::summary`] to stdout.
	pub fn print_summary(&self) {
		print!("{}", self.summary());
	}
}
