use std::collections::BTreeMap;
use std::sync::OnceLock;

use thiserror::Error;

use super::builtins;
use super::types::Theme;

/// Raised when a theme name matches neither a built-in theme nor an alias.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme `{name}` (available: {available})")]
pub struct ThemeError {
	pub name: String,
	available: String,
}

#[derive(Debug, Default)]
struct ThemeTable {
	canonical: BTreeMap<String, (String, Theme)>,
	aliases: BTreeMap<String, String>,
}

fn table() -> &'static ThemeTable {
	static TABLE: OnceLock<ThemeTable> = OnceLock::new();
	TABLE.get_or_init(|| {
		let mut table = ThemeTable::default();
		for registration in builtins::registrations() {
			let key = normalize_name(&registration.name);
			for alias in &registration.aliases {
				table.aliases.insert(normalize_name(alias), key.clone());
			}
			table
				.canonical
				.insert(key, (registration.name, registration.theme));
		}
		table
	})
}

fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Look up a theme by name or alias, ignoring case.
pub fn by_name(name: &str) -> Result<Theme, ThemeError> {
	lookup(name).map(|(_, theme)| theme)
}

/// Like [`by_name`], also returning the name the theme is registered under.
pub fn lookup(name: &str) -> Result<(&'static str, Theme), ThemeError> {
	let table = table();
	let key = normalize_name(name);
	let key = table.aliases.get(&key).unwrap_or(&key);
	table
		.canonical
		.get(key)
		.map(|(registered, theme)| (registered.as_str(), *theme))
		.ok_or_else(|| ThemeError {
			name: name.to_string(),
			available: names().join(", "),
		})
}

/// Display names of every built-in theme, sorted.
#[must_use]
pub fn names() -> Vec<String> {
	table()
		.canonical
		.values()
		.map(|(name, _)| name.clone())
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::style::theme::{default_theme, default_theme_name};

	#[test]
	fn builtin_names_are_listed() {
		assert_eq!(names(), vec!["light".to_string(), "slate".to_string()]);
	}

	#[test]
	fn lookup_ignores_case_and_follows_aliases() {
		let slate = by_name("Slate").expect("slate");
		assert_eq!(by_name("dark").expect("alias"), slate);
		assert_eq!(slate, default_theme());
		assert!(by_name("paper").is_ok());
	}

	#[test]
	fn lookup_reports_the_registered_name() {
		let (name, theme) = lookup("PAPER").expect("alias");
		assert_eq!(name, "light");
		assert_eq!(theme, by_name("light").expect("light"));
		assert_eq!(lookup(" Slate ").expect("slate").0, "slate");
	}

	#[test]
	fn default_theme_is_registered_by_name() {
		assert_eq!(default_theme_name(), "slate");
		assert_eq!(by_name(default_theme_name()).expect("default"), default_theme());
	}

	#[test]
	fn unknown_theme_lists_alternatives() {
		let err = by_name("neon").expect_err("unknown");
		assert_eq!(err.to_string(), "unknown theme `neon` (available: light, slate)");
	}
}
