mod builtins;
mod registry;
mod types;

pub use builtins::{default_theme, default_theme_name};
pub use registry::{ThemeError, by_name, lookup, names};
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
