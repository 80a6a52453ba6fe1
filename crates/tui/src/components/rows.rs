use ratatui::text::Line;
use ratatui::widgets::{Cell, Row};
use shoplist_core::{Item, ItemId};

use crate::style::Theme;

/// Action column text for a row in its normal state.
pub(crate) const ROW_ACTIONS: &str = "e edit · d del";
/// Action column text for the row open in the inline editor.
pub(crate) const EDIT_ACTIONS: &str = "⏎ save";

/// Pre-rendered fields of the row that is being edited inline.
pub struct EditingRow {
	/// Item the fields belong to.
	pub id: ItemId,
	/// Name field, cursor included when focused.
	pub name: Line<'static>,
	/// Quantity field, cursor included when focused.
	pub quantity: Line<'static>,
}

/// Build one table row per item, swapping in the edit fields for the item
/// that is being edited.
#[must_use]
pub fn build_item_rows<'a>(
	items: &'a [Item],
	editing: Option<EditingRow>,
	theme: &Theme,
) -> Vec<Row<'a>> {
	let mut editing = editing;
	items
		.iter()
		.map(|item| match editing.take_if(|row| row.id == item.id) {
			Some(row) => Row::new([
				Cell::from(row.name),
				Cell::from(row.quantity),
				Cell::from(EDIT_ACTIONS),
			])
			.style(theme.editing),
			None => Row::new([
				Cell::from(item.name.as_str()),
				Cell::from(item.quantity.to_string()),
				Cell::from(Line::styled(ROW_ACTIONS, theme.hint)),
			]),
		})
		.collect()
}
