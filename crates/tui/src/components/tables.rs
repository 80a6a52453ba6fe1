use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::widgets::{
	Block, Borders, Cell, HighlightSpacing, Paragraph, Row, ScrollbarState, Table, TableState,
};
use unicode_width::UnicodeWidthStr;

use crate::components::render_scrollbar;
use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub(crate) const TABLE_COLUMN_SPACING: u16 = 2;
/// Header row + separator height inside the table's viewport.
pub(crate) const TABLE_HEADER_ROWS: u16 = 2;

/// Fully materialized table configuration.
pub struct TableSpec<'a> {
	/// Column headers.
	pub headers: Vec<String>,
	/// Column width constraints.
	pub widths: Vec<Constraint>,
	/// Rendered table rows.
	pub rows: Vec<Row<'a>>,
	/// Title on the table border.
	pub title: String,
	/// Message drawn under the header when there are no rows.
	pub empty_message: String,
}

/// Width constraint that fits `header` and every value in `cells`.
#[must_use]
pub fn fit_column<'s>(header: &str, cells: impl IntoIterator<Item = &'s str>) -> Constraint {
	let widest = cells
		.into_iter()
		.map(UnicodeWidthStr::width)
		.chain(std::iter::once(header.width()))
		.max()
		.unwrap_or_default();
	Constraint::Length(u16::try_from(widest).unwrap_or(u16::MAX))
}

/// Render the bordered item table, with a scrollbar when rows overflow.
pub fn render_table(
	frame: &mut Frame,
	area: Rect,
	table_state: &mut TableState,
	scrollbar_state: &mut ScrollbarState,
	spec: TableSpec<'_>,
	theme: &Theme,
) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(ratatui::symbols::border::ROUNDED)
		.border_style(theme.border)
		.title(spec.title)
		.title_style(theme.header);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let header = Row::new(spec.headers.into_iter().map(Cell::from))
		.style(theme.header)
		.height(1)
		.bottom_margin(1);

	let total_rows = spec.rows.len();
	let visible_rows = usize::from(inner.height.saturating_sub(TABLE_HEADER_ROWS));
	let table_area = if total_rows > visible_rows && visible_rows > 0 {
		*scrollbar_state = scrollbar_state
			.content_length(total_rows)
			.viewport_content_length(visible_rows)
			.position(table_state.selected().unwrap_or_default());
		render_scrollbar(frame, inner, scrollbar_state, theme)
	} else {
		inner
	};

	let is_empty = spec.rows.is_empty();
	let table = Table::new(spec.rows, spec.widths)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, table_area, table_state);

	if is_empty && inner.height > TABLE_HEADER_ROWS {
		let message_area = Rect {
			y: inner.y + TABLE_HEADER_ROWS,
			height: inner.height - TABLE_HEADER_ROWS,
			..inner
		};
		let empty = Paragraph::new(spec.empty_message)
			.alignment(Alignment::Center)
			.style(theme.hint);
		frame.render_widget(empty, message_area);
	}
}
