//! Visual styling utilities.
//!
//! Themes carry the colour scheme of the list screen. [`StyleConfig`] is the
//! bundle handed to the application so further knobs can sit next to the
//! theme later.

/// Theme definitions, built-in themes and name lookup.
pub mod theme;

pub use theme::{
	Theme, ThemeError, ThemeRegistration, builtin_themes, by_name, default_theme, default_theme_name, lookup,
	names,
};

/// Aggregate container for styling knobs.
#[derive(Clone, Debug, Default)]
pub struct StyleConfig {
	/// The active theme for the UI.
	pub theme: Theme,
}

impl StyleConfig {
	/// Creates a new style configuration with the given theme.
	#[must_use]
	pub fn with_theme(theme: Theme) -> Self {
		Self { theme }
	}
}
