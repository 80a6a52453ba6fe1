use anyhow::{Context, Result};

use super::raw::RawConfig;
use super::resolved::ResolvedConfig;
use super::sources::build_config;
use crate::cli::CliArgs;

/// Load configuration by combining CLI arguments, config files and environment
/// variables.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);
	Ok(raw.resolve(&cli.items)?)
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use clap::Parser;
	use shoplist::Seed;
	use tempfile::NamedTempFile;
	use tracing_subscriber::filter::LevelFilter;

	use super::*;

	fn config_file(contents: &str) -> NamedTempFile {
		let mut file = tempfile::Builder::new()
			.suffix(".toml")
			.tempfile()
			.expect("temp file");
		file.write_all(contents.as_bytes()).expect("write config");
		file
	}

	#[test]
	fn explicit_config_file_is_merged() {
		let file = config_file(
			r#"
[ui]
title = "Pantry"
theme = "paper"

[list]
items = ["Milk:2", "Bread"]

[logging]
level = "debug"
"#,
		);
		let path = file.path().to_str().expect("utf-8 path");
		let cli = CliArgs::parse_from(["shoplist", "--no-config", "--config", path]);

		let resolved = load(&cli).expect("config loads");
		assert_eq!(resolved.title.as_deref(), Some("Pantry"));
		assert_eq!(resolved.theme_name, "light");
		assert_eq!(resolved.seeds, vec![Seed::new("Milk", "2"), Seed::new("Bread", "")]);
		assert_eq!(resolved.log_level, LevelFilter::DEBUG);
	}

	#[test]
	fn cli_flags_override_files_and_append_items() {
		let file = config_file(
			r#"
[ui]
title = "Pantry"

[list]
items = ["Milk:2"]
"#,
		);
		let path = file.path().to_str().expect("utf-8 path");
		let cli = CliArgs::parse_from([
			"shoplist",
			"--no-config",
			"--config",
			path,
			"--title",
			"Weekend",
			"--item",
			"Eggs:12",
		]);

		let resolved = load(&cli).expect("config loads");
		assert_eq!(resolved.title.as_deref(), Some("Weekend"));
		assert_eq!(resolved.seeds, vec![Seed::new("Milk", "2"), Seed::new("Eggs", "12")]);
	}

	#[test]
	fn missing_explicit_config_is_an_error() {
		let cli = CliArgs::parse_from([
			"shoplist",
			"--no-config",
			"--config",
			"/definitely/not/here/shoplist.toml",
		]);
		assert!(load(&cli).is_err());
	}

	#[test]
	fn malformed_configured_item_is_reported() {
		let file = config_file("[list]\nitems = [\"Milk:lots\"]\n");
		let path = file.path().to_str().expect("utf-8 path");
		let cli = CliArgs::parse_from(["shoplist", "--no-config", "--config", path]);

		let err = load(&cli).expect_err("invalid quantity");
		assert!(format!("{err:#}").contains("Milk:lots"), "{err:#}");
	}
}
