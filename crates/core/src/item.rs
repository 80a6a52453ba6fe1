use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to an [`Item`] when it is added.
///
/// Identifiers come from a counter owned by the store and are never reused,
/// even after the item they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
	/// Wrap a raw identifier value.
	#[must_use]
	pub const fn new(raw: u64) -> Self {
		Self(raw)
	}

	/// Return the raw identifier value.
	#[must_use]
	pub const fn get(self) -> u64 {
		self.0
	}

	pub(crate) const fn next(self) -> Self {
		Self(self.0 + 1)
	}
}

impl fmt::Display for ItemId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A single entry on the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
	/// Identity of the entry.
	pub id: ItemId,
	/// Display name, never empty when created through the store.
	pub name: String,
	/// How many to buy.
	pub quantity: u32,
	/// Whether the entry is currently shown with inline edit fields.
	pub is_editing: bool,
}

impl Item {
	pub(crate) fn new(id: ItemId, name: String, quantity: u32) -> Self {
		Self {
			id,
			name,
			quantity,
			is_editing: false,
		}
	}
}

impl fmt::Display for Item {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} × {}", self.name, self.quantity)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn item_display_shows_name_and_quantity() {
		let item = Item::new(ItemId::new(3), "Milk".into(), 2);
		assert_eq!(item.to_string(), "Milk × 2");
	}

	#[test]
	fn item_id_serializes_as_bare_number() {
		let json = serde_json::to_string(&ItemId::new(7)).expect("serialize");
		assert_eq!(json, "7");
	}
}
