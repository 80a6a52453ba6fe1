use std::str::FromStr;

use serde::Deserialize;
use shoplist::Seed;
use shoplist::style;
use tracing_subscriber::filter::LevelFilter;

use super::resolved::{ResolvedConfig, SettingsError};
use crate::cli::CliArgs;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	ui: UiSection,
	list: ListSection,
	logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	title: Option<String>,
	theme: Option<String>,
	hint: Option<String>,
}

/// Items placed on the list before the screen opens, as `NAME[:QTY]`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ListSection {
	items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct LoggingSection {
	level: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.ui.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(level) = cli.log_level.clone() {
			self.logging.level = Some(level);
		}
	}

	/// Validate the raw values and fill in defaults. `extra_items` are seeded
	/// after the configured ones.
	pub(super) fn resolve(self, extra_items: &[Seed]) -> Result<ResolvedConfig, SettingsError> {
		let mut seeds = self
			.list
			.items
			.iter()
			.map(|entry| Seed::from_str(entry))
			.collect::<Result<Vec<_>, _>>()?;
		seeds.extend_from_slice(extra_items);

		let requested = self
			.ui
			.theme
			.filter(|name| !name.trim().is_empty())
			.unwrap_or_else(|| style::default_theme_name().to_string());
		let (theme_name, theme) = style::lookup(&requested)?;

		let log_level = match self.logging.level {
			Some(level) => LevelFilter::from_str(level.trim())
				.map_err(|_| SettingsError::InvalidLogLevel(level))?,
			None => LevelFilter::INFO,
		};

		Ok(ResolvedConfig {
			title: self.ui.title,
			theme_name: theme_name.to_string(),
			theme,
			browse_hint: self.ui.hint,
			seeds,
			log_level,
		})
	}
}

#[cfg(test)]
mod tests {
	use clap::Parser;

	use super::*;

	#[test]
	fn cli_overrides_take_precedence() {
		let cli = CliArgs::parse_from([
			"shoplist",
			"--title",
			"Weekend",
			"--theme",
			"light",
			"--log-level",
			"trace",
		]);
		let mut config = RawConfig::default();
		config.ui.title = Some("Pantry".into());
		config.ui.theme = Some("slate".into());
		config.apply_cli_overrides(&cli);

		assert_eq!(config.ui.title.as_deref(), Some("Weekend"));
		assert_eq!(config.ui.theme.as_deref(), Some("light"));
		assert_eq!(config.logging.level.as_deref(), Some("trace"));
	}

	#[test]
	fn defaults_resolve_without_any_input() {
		let resolved = RawConfig::default().resolve(&[]).expect("defaults resolve");
		assert_eq!(resolved.title, None);
		assert_eq!(resolved.theme_name, style::default_theme_name());
		assert!(resolved.seeds.is_empty());
		assert_eq!(resolved.log_level, LevelFilter::INFO);
	}

	#[test]
	fn theme_aliases_resolve_to_the_listed_name() {
		let mut config = RawConfig::default();
		config.ui.theme = Some("Paper".into());
		let resolved = config.resolve(&[]).expect("alias resolves");
		assert_eq!(resolved.theme_name, "light");
		assert!(style::names().contains(&resolved.theme_name));
	}

	#[test]
	fn unknown_theme_is_rejected() {
		let mut config = RawConfig::default();
		config.ui.theme = Some("neon".into());
		let err = config.resolve(&[]).expect_err("unknown theme");
		assert!(matches!(err, SettingsError::Theme(_)));
	}

	#[test]
	fn invalid_log_level_is_rejected() {
		let mut config = RawConfig::default();
		config.logging.level = Some("loud".into());
		let err = config.resolve(&[]).expect_err("bad level");
		assert_eq!(err, SettingsError::InvalidLogLevel("loud".into()));
	}

	#[test]
	fn configured_items_come_before_extra_items() {
		let mut config = RawConfig::default();
		config.list.items = vec!["Milk:2".into()];
		let resolved = config
			.resolve(&[Seed::new("Eggs", "")])
			.expect("items resolve");
		assert_eq!(resolved.seeds, vec![Seed::new("Milk", "2"), Seed::new("Eggs", "")]);
	}
}
