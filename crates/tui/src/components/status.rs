use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::style::Theme;

/// Title followed by the item count, e.g. `Shopping list  3 items`.
pub fn render_header(frame: &mut Frame, area: Rect, title: &str, count: String, theme: &Theme) {
	let line = Line::from(vec![
		Span::styled(title.to_string(), theme.header),
		Span::raw("  "),
		Span::styled(count, theme.hint),
	]);
	frame.render_widget(Paragraph::new(line), area);
}

/// Key hints for the current mode.
pub fn render_footer(frame: &mut Frame, area: Rect, hint: &str, theme: &Theme) {
	frame.render_widget(Paragraph::new(Line::styled(hint.to_string(), theme.hint)), area);
}
