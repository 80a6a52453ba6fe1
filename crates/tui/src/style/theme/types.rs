use ratatui::style::{Color, Style};

/// Colour scheme for the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Title line and table header.
	pub header: Style,
	/// Table and dialog borders.
	pub border: Style,
	/// The selected row.
	pub row_highlight: Style,
	/// The row currently open in the inline editor.
	pub editing: Style,
	/// An input field without focus.
	pub field: Style,
	/// The input field receiving keystrokes.
	pub field_focused: Style,
	/// Key hints and the empty-list message.
	pub hint: Style,
}

impl Theme {
	/// Style for the add dialog frame, derived from the border and header.
	#[must_use]
	pub fn dialog_style(&self) -> Style {
		self.border
			.fg(self.header.fg.unwrap_or(Color::Reset))
	}

	/// Style for the cursor cell inside a focused field.
	#[must_use]
	pub fn cursor_style(&self) -> Style {
		self.field_focused.add_modifier(ratatui::style::Modifier::REVERSED)
	}
}

/// A named theme as registered with the lookup table.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}
}
