use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear};

use crate::app::Field;
use crate::config::UiLabels;
use crate::input::TextInput;
use crate::style::Theme;

const DIALOG_WIDTH: u16 = 44;
/// Two bordered inputs plus the dialog's own border.
const DIALOG_HEIGHT: u16 = 8;

/// Argument bundle for rendering the add dialog.
pub struct DialogContext<'a, 'b> {
	pub name_input: &'b mut TextInput<'a>,
	pub quantity_input: &'b mut TextInput<'a>,
	pub focus: Field,
	pub labels: &'b UiLabels,
	pub theme: &'b Theme,
}

/// Center a `width`×`height` box inside `area`, clamped to its size.
#[must_use]
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
	let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
		.flex(Flex::Center)
		.areas(area);
	let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
		.flex(Flex::Center)
		.areas(row);
	cell
}

/// Draw the modal add dialog over whatever is already in `area`.
pub fn render_add_dialog(frame: &mut Frame, area: Rect, context: DialogContext<'_, '_>) {
	let DialogContext {
		name_input,
		quantity_input,
		focus,
		labels,
		theme,
	} = context;

	let dialog_area = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
	frame.render_widget(Clear, dialog_area);

	let block = Block::bordered()
		.border_type(BorderType::Rounded)
		.border_style(theme.dialog_style())
		.title(Line::styled(format!(" {} ", labels.dialog_title), theme.header))
		.title_bottom(Line::styled(format!(" {} ", labels.dialog_hint), theme.hint).centered());
	let inner = block.inner(dialog_area);
	frame.render_widget(block, dialog_area);

	let [name_area, quantity_area] =
		Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).areas(inner);

	let fields = [
		(name_input, &labels.name_label, Field::Name, name_area),
		(quantity_input, &labels.quantity_label, Field::Quantity, quantity_area),
	];
	for (input, label, field, field_area) in fields {
		let focused = focus == field;
		let border = if focused { theme.field_focused } else { theme.border };
		let field_block = Block::bordered()
			.border_type(BorderType::Rounded)
			.border_style(border)
			.title(label.clone());
		frame.render_widget(input.widget(field_block, focused, theme), field_area);
	}
}
