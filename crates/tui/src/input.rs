//! Single-line text inputs backed by `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;
use tui_textarea::{CursorMove, TextArea};

use crate::style::Theme;

/// Editable one-line field. The literal text is what gets forwarded to the
/// store.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for TextInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> TextInput<'a> {
	/// Create a field holding `text` with the cursor at its end.
	#[must_use]
	pub fn new(text: impl Into<String>) -> Self {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	/// Current contents of the field.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Cursor position in characters from the start of the line.
	#[must_use]
	pub fn cursor(&self) -> usize {
		self.textarea.cursor().1
	}

	/// Feed a key to the field. Returns `true` when the text changed.
	///
	/// Line breaks are swallowed so the field stays single-line.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m' | 'j')));
		if newline {
			return false;
		}
		let before = self.text().to_string();
		self.textarea.input(key);
		self.text() != before
	}

	/// Prepare the underlying widget for drawing inside `block`.
	pub(crate) fn widget(&mut self, block: Block<'a>, focused: bool, theme: &Theme) -> &TextArea<'a> {
		let (style, cursor) = if focused {
			(theme.field_focused, theme.cursor_style())
		} else {
			(theme.field, theme.field)
		};
		self.textarea.set_block(block);
		self.textarea.set_style(style);
		self.textarea.set_cursor_style(cursor);
		&self.textarea
	}

	/// Inline rendering for use inside a table cell, with a block cursor when
	/// focused.
	#[must_use]
	pub fn line(&self, focused: bool, theme: &Theme) -> Line<'static> {
		let text = self.text();
		if !focused {
			return Line::from(Span::styled(text.to_string(), theme.field));
		}

		let cursor = self.cursor();
		let before: String = text.chars().take(cursor).collect();
		let mut rest = text.chars().skip(cursor);
		let at = rest.next().map_or_else(|| " ".to_string(), String::from);
		let after: String = rest.collect();
		Line::from(vec![
			Span::styled(before, theme.field_focused),
			Span::styled(at, theme.cursor_style()),
			Span::styled(after, theme.field_focused),
		])
	}
}
