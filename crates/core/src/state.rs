use serde::{Deserialize, Serialize};

use crate::item::{Item, ItemId};

/// Everything the interface needs to draw the list screen.
///
/// Only [`ListStore`](crate::ListStore) mutates a `ListState`; everyone else
/// sees it through the accessors below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
	pub(crate) items: Vec<Item>,
	pub(crate) add_dialog_open: bool,
	pub(crate) draft_name: String,
	pub(crate) draft_quantity: String,
}

impl ListState {
	/// Items in insertion order.
	#[must_use]
	pub fn items(&self) -> &[Item] {
		&self.items
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[must_use]
	pub fn is_add_dialog_open(&self) -> bool {
		self.add_dialog_open
	}

	/// Text currently typed into the add dialog's name field.
	#[must_use]
	pub fn draft_name(&self) -> &str {
		&self.draft_name
	}

	/// Text currently typed into the add dialog's quantity field.
	#[must_use]
	pub fn draft_quantity(&self) -> &str {
		&self.draft_quantity
	}

	/// Look up an item by id.
	#[must_use]
	pub fn item(&self, id: ItemId) -> Option<&Item> {
		self.items.iter().find(|item| item.id == id)
	}

	/// Position of an item within the list.
	#[must_use]
	pub fn position(&self, id: ItemId) -> Option<usize> {
		self.items.iter().position(|item| item.id == id)
	}

	/// The item in inline-edit mode, if any.
	#[must_use]
	pub fn editing_item(&self) -> Option<&Item> {
		self.items.iter().find(|item| item.is_editing)
	}

	pub(crate) fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
		self.items.iter_mut().find(|item| item.id == id)
	}

	pub(crate) fn clear_drafts(&mut self) {
		self.draft_name.clear();
		self.draft_quantity.clear();
	}
}
