use crate::item::ItemId;

/// A user action forwarded from the interface to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
	OpenAddDialog,
	CloseAddDialog,
	UpdateDraftName(String),
	UpdateDraftQuantity(String),
	ConfirmAdd,
	BeginEdit(ItemId),
	/// Save the inline editor's literal field texts onto an item.
	CommitEdit {
		id: ItemId,
		name: String,
		quantity: String,
	},
	DeleteItem(ItemId),
}

/// What applying an intent did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
	AddDialogOpened,
	AddDialogClosed,
	DraftUpdated,
	ItemAdded(ItemId),
	EditStarted(ItemId),
	ItemUpdated(ItemId),
	ItemDeleted(ItemId),
	/// The intent was rejected or already satisfied; nothing moved.
	Unchanged,
}

impl Change {
	#[must_use]
	pub fn is_unchanged(self) -> bool {
		matches!(self, Self::Unchanged)
	}

	/// The item a change refers to, when it refers to one.
	#[must_use]
	pub fn item(self) -> Option<ItemId> {
		match self {
			Self::ItemAdded(id)
			| Self::EditStarted(id)
			| Self::ItemUpdated(id)
			| Self::ItemDeleted(id) => Some(id),
			_ => None,
		}
	}
}
