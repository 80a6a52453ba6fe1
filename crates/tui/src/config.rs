/// Text rendered around the list: titles, labels and key hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
	/// Title on the header line and the table border.
	pub title: String,
	/// Noun appended to the item count, e.g. `3 items`.
	pub count_label: String,
	/// Message drawn inside the table when the list is empty.
	pub empty_message: String,
	/// Title of the add dialog.
	pub dialog_title: String,
	/// Label of the name input.
	pub name_label: String,
	/// Label of the quantity input.
	pub quantity_label: String,
	/// Footer shown while browsing the list.
	pub browse_hint: String,
	/// Footer shown while the add dialog is open.
	pub dialog_hint: String,
	/// Footer shown while an item is being edited inline.
	pub edit_hint: String,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			title: "Shopping list".to_string(),
			count_label: "items".to_string(),
			empty_message: "No items".to_string(),
			dialog_title: "Add item".to_string(),
			name_label: "Name".to_string(),
			quantity_label: "Quantity".to_string(),
			browse_hint: "a add · e edit · d delete · q quit".to_string(),
			dialog_hint: "Enter confirm · Esc cancel".to_string(),
			edit_hint: "Enter save · Esc discard · Ctrl+D delete".to_string(),
		}
	}
}

impl UiLabels {
	/// Replace the title, keeping every other label.
	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Replace the browse footer, keeping every other label.
	#[must_use]
	pub fn with_browse_hint(mut self, hint: impl Into<String>) -> Self {
		self.browse_hint = hint.into();
		self
	}
}
