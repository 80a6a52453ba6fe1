use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::state::{App, Field, Mode};
use crate::components::rows::{EDIT_ACTIONS, ROW_ACTIONS};
use crate::components::tables::fit_column;
use crate::components::{
	DialogContext, EditingRow, TableSpec, build_item_rows, render_add_dialog, render_footer,
	render_header, render_table,
};

const NAME_HEADER: &str = "Name";
const QUANTITY_HEADER: &str = "Qty";
const ACTIONS_HEADER: &str = "";

impl App<'_> {
	/// Draw the whole screen from the current store state.
	pub fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [header_area, table_area, footer_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(3),
			Constraint::Length(1),
		])
		.areas(area);

		let mode = self.mode();
		let theme = self.style.theme;
		let count = format!("{} {}", self.state().len(), self.labels.count_label);
		render_header(frame, header_area, &self.labels.title, count, &theme);
		self.render_items(frame, table_area, mode);

		let hint = match mode {
			Mode::Browse => &self.labels.browse_hint,
			Mode::AddDialog => &self.labels.dialog_hint,
			Mode::Editing(_) => &self.labels.edit_hint,
		};
		render_footer(frame, footer_area, hint, &theme);

		if mode == Mode::AddDialog {
			let context = DialogContext {
				name_input: &mut self.name_input,
				quantity_input: &mut self.quantity_input,
				focus: self.focus,
				labels: &self.labels,
				theme: &theme,
			};
			render_add_dialog(frame, area, context);
		}
	}

	fn render_items(&mut self, frame: &mut Frame, area: ratatui::layout::Rect, mode: Mode) {
		let theme = self.style.theme;
		let editing = match mode {
			Mode::Editing(id) => Some(EditingRow {
				id,
				name: self.edit_name.line(self.focus == Field::Name, &theme),
				quantity: self.edit_quantity.line(self.focus == Field::Quantity, &theme),
			}),
			_ => None,
		};

		let items = self.store.state().items();
		let quantities: Vec<String> = items.iter().map(|item| item.quantity.to_string()).collect();
		let quantity_width = match mode {
			Mode::Editing(_) => {
				// Focused fields draw one extra cell for the cursor.
				let typed = format!("{} ", self.edit_quantity.text());
				let cells = quantities.iter().map(String::as_str);
				fit_column(QUANTITY_HEADER, cells.chain([typed.as_str()]))
			}
			_ => fit_column(QUANTITY_HEADER, quantities.iter().map(String::as_str)),
		};
		let spec = TableSpec {
			headers: vec![
				NAME_HEADER.to_string(),
				QUANTITY_HEADER.to_string(),
				ACTIONS_HEADER.to_string(),
			],
			widths: vec![
				Constraint::Fill(1),
				quantity_width,
				fit_column(ACTIONS_HEADER, [ROW_ACTIONS, EDIT_ACTIONS]),
			],
			rows: build_item_rows(items, editing, &theme),
			title: format!(" {} ", self.labels.title),
			empty_message: self.labels.empty_message.clone(),
		};
		render_table(
			frame,
			area,
			&mut self.table_state,
			&mut self.scrollbar_state,
			spec,
			&theme,
		);
	}
}
