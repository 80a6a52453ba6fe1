use std::fmt;

use tracing::debug;

use crate::intent::{Change, Intent};
use crate::item::{Item, ItemId};
use crate::observer::StoreObserver;
use crate::quantity::parse_quantity;
use crate::seed::Seed;
use crate::state::ListState;

/// Sole owner of the shopping list and its dialog/editing state.
///
/// Every operation is infallible: empty names and unknown ids leave the state
/// untouched and report [`Change::Unchanged`], unreadable quantities become
/// [`DEFAULT_QUANTITY`](crate::DEFAULT_QUANTITY).
pub struct ListStore {
	state: ListState,
	next_id: ItemId,
	observers: Vec<Box<dyn StoreObserver>>,
}

impl Default for ListStore {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Debug for ListStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ListStore")
			.field("state", &self.state)
			.field("next_id", &self.next_id)
			.field("observers", &self.observers.len())
			.finish()
	}
}

impl ListStore {
	#[must_use]
	pub fn new() -> Self {
		Self {
			state: ListState::default(),
			next_id: ItemId::new(1),
			observers: Vec::new(),
		}
	}

	/// Build a store whose list is filled by replaying the add dialog for
	/// each seed, so seeded items go through the same path as typed ones.
	#[must_use]
	pub fn seeded<I>(seeds: I) -> Self
	where
		I: IntoIterator<Item = Seed>,
	{
		let mut store = Self::new();
		for seed in seeds {
			store.open_add_dialog();
			store.update_draft_name(seed.name);
			store.update_draft_quantity(seed.quantity);
			if store.confirm_add().is_unchanged() {
				store.close_add_dialog();
			}
		}
		store
	}

	/// Read-only view of the current state.
	#[must_use]
	pub fn state(&self) -> &ListState {
		&self.state
	}

	/// Owned copy of the current state.
	#[must_use]
	pub fn snapshot(&self) -> ListState {
		self.state.clone()
	}

	/// Register an observer called after every effective transition.
	pub fn subscribe<O>(&mut self, observer: O)
	where
		O: StoreObserver + 'static,
	{
		self.observers.push(Box::new(observer));
	}

	/// Apply an intent value. Equivalent to calling the matching method.
	pub fn dispatch(&mut self, intent: Intent) -> Change {
		match intent {
			Intent::OpenAddDialog => self.open_add_dialog(),
			Intent::CloseAddDialog => self.close_add_dialog(),
			Intent::UpdateDraftName(name) => self.update_draft_name(name),
			Intent::UpdateDraftQuantity(quantity) => self.update_draft_quantity(quantity),
			Intent::ConfirmAdd => self.confirm_add(),
			Intent::BeginEdit(id) => self.begin_edit(id),
			Intent::CommitEdit { id, name, quantity } => self.commit_edit(id, name, &quantity),
			Intent::DeleteItem(id) => self.delete_item(id),
		}
	}

	pub fn open_add_dialog(&mut self) -> Change {
		if self.state.add_dialog_open {
			return Change::Unchanged;
		}
		self.state.add_dialog_open = true;
		self.emit(Change::AddDialogOpened)
	}

	/// Close the add dialog and drop whatever was typed into it.
	pub fn close_add_dialog(&mut self) -> Change {
		let had_drafts = !self.state.draft_name.is_empty() || !self.state.draft_quantity.is_empty();
		if !self.state.add_dialog_open && !had_drafts {
			return Change::Unchanged;
		}
		self.state.add_dialog_open = false;
		self.state.clear_drafts();
		self.emit(Change::AddDialogClosed)
	}

	pub fn update_draft_name(&mut self, name: impl Into<String>) -> Change {
		let name = name.into();
		if self.state.draft_name == name {
			return Change::Unchanged;
		}
		self.state.draft_name = name;
		self.emit(Change::DraftUpdated)
	}

	pub fn update_draft_quantity(&mut self, quantity: impl Into<String>) -> Change {
		let quantity = quantity.into();
		if self.state.draft_quantity == quantity {
			return Change::Unchanged;
		}
		self.state.draft_quantity = quantity;
		self.emit(Change::DraftUpdated)
	}

	/// Turn the drafts into a new item at the end of the list.
	///
	/// An empty draft name rejects the add and keeps the dialog open.
	pub fn confirm_add(&mut self) -> Change {
		if self.state.draft_name.is_empty() {
			debug!("add rejected: empty name");
			return Change::Unchanged;
		}

		let id = self.allocate_id();
		let name = std::mem::take(&mut self.state.draft_name);
		let quantity = parse_quantity(&self.state.draft_quantity);
		self.state.items.push(Item::new(id, name, quantity));
		self.state.add_dialog_open = false;
		self.state.clear_drafts();
		self.emit(Change::ItemAdded(id))
	}

	/// Put one item into inline-edit mode, taking every other item out of it.
	pub fn begin_edit(&mut self, id: ItemId) -> Change {
		match self.state.item(id) {
			None => {
				debug!(%id, "edit ignored: unknown item");
				return Change::Unchanged;
			}
			Some(item) if item.is_editing => return Change::Unchanged,
			Some(_) => {}
		}

		for item in &mut self.state.items {
			item.is_editing = item.id == id;
		}
		self.emit(Change::EditStarted(id))
	}

	/// Save new field texts onto an item and leave inline-edit mode.
	pub fn commit_edit(&mut self, id: ItemId, name: impl Into<String>, quantity: &str) -> Change {
		let Some(item) = self.state.item_mut(id) else {
			debug!(%id, "commit ignored: unknown item");
			return Change::Unchanged;
		};

		item.name = name.into();
		item.quantity = parse_quantity(quantity);
		item.is_editing = false;
		self.emit(Change::ItemUpdated(id))
	}

	pub fn delete_item(&mut self, id: ItemId) -> Change {
		let Some(index) = self.state.position(id) else {
			debug!(%id, "delete ignored: unknown item");
			return Change::Unchanged;
		};

		self.state.items.remove(index);
		self.emit(Change::ItemDeleted(id))
	}

	fn allocate_id(&mut self) -> ItemId {
		let id = self.next_id;
		self.next_id = id.next();
		id
	}

	fn emit(&mut self, change: Change) -> Change {
		debug!(?change, items = self.state.items.len(), "list state changed");
		for observer in &mut self.observers {
			observer.state_changed(change, &self.state);
		}
		change
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::DEFAULT_QUANTITY;

	fn add(store: &mut ListStore, name: &str, quantity: &str) -> ItemId {
		store.open_add_dialog();
		store.update_draft_name(name);
		store.update_draft_quantity(quantity);
		store
			.confirm_add()
			.item()
			.expect("add with a name must create an item")
	}

	fn names(store: &ListStore) -> Vec<&str> {
		store
			.state()
			.items()
			.iter()
			.map(|item| item.name.as_str())
			.collect()
	}

	#[test]
	fn open_add_dialog_only_flips_the_flag() {
		let mut store = ListStore::new();
		store.update_draft_name("typed early");

		assert_eq!(store.open_add_dialog(), Change::AddDialogOpened);
		assert!(store.state().is_add_dialog_open());
		assert_eq!(store.state().draft_name(), "typed early");
		assert!(store.state().is_empty());
	}

	#[test]
	fn confirm_add_appends_and_closes_dialog() {
		let mut store = ListStore::new();
		add(&mut store, "Bread", "1");

		store.open_add_dialog();
		store.update_draft_name("Milk");
		store.update_draft_quantity("2");
		let change = store.confirm_add();

		let state = store.state();
		assert!(matches!(change, Change::ItemAdded(_)));
		assert_eq!(state.len(), 2);
		let last = state.items().last().expect("item");
		assert_eq!(last.name, "Milk");
		assert_eq!(last.quantity, 2);
		assert!(!last.is_editing);
		assert!(!state.is_add_dialog_open());
		assert_eq!(state.draft_name(), "");
		assert_eq!(state.draft_quantity(), "");
	}

	#[test]
	fn confirm_add_with_empty_name_keeps_dialog_open() {
		let mut store = ListStore::new();
		store.open_add_dialog();
		store.update_draft_quantity("3");

		assert_eq!(store.confirm_add(), Change::Unchanged);
		assert!(store.state().is_empty());
		assert!(store.state().is_add_dialog_open());
		assert_eq!(store.state().draft_quantity(), "3");
	}

	#[test]
	fn unreadable_quantity_defaults_to_one() {
		let mut store = ListStore::new();
		let id = add(&mut store, "Apples", "abc");
		assert_eq!(
			store.state().item(id).map(|item| item.quantity),
			Some(DEFAULT_QUANTITY)
		);

		let id = add(&mut store, "Pears", "");
		assert_eq!(store.state().item(id).map(|item| item.quantity), Some(1));
	}

	#[test]
	fn ids_increase_and_are_not_reused_after_delete() {
		let mut store = ListStore::new();
		let first = add(&mut store, "a", "1");
		let second = add(&mut store, "b", "1");
		store.delete_item(second);
		let third = add(&mut store, "c", "1");

		assert!(first < second);
		assert!(second < third);
		assert_eq!(first.get(), 1);
		assert_eq!(third.get(), 3);
	}

	#[test]
	fn begin_edit_is_exclusive() {
		let mut store = ListStore::new();
		let first = add(&mut store, "a", "1");
		let second = add(&mut store, "b", "1");

		store.begin_edit(first);
		assert_eq!(store.begin_edit(second), Change::EditStarted(second));

		let editing: Vec<ItemId> = store
			.state()
			.items()
			.iter()
			.filter(|item| item.is_editing)
			.map(|item| item.id)
			.collect();
		assert_eq!(editing, vec![second]);
	}

	#[test]
	fn begin_edit_with_unknown_id_keeps_current_editor() {
		let mut store = ListStore::new();
		let id = add(&mut store, "a", "1");
		store.begin_edit(id);

		assert_eq!(store.begin_edit(ItemId::new(99)), Change::Unchanged);
		assert_eq!(store.state().editing_item().map(|item| item.id), Some(id));
	}

	#[test]
	fn commit_edit_updates_only_the_target() {
		let mut store = ListStore::new();
		let milk = add(&mut store, "Milk", "2");
		let bread = add(&mut store, "Bread", "1");
		let before = store.state().item(bread).cloned();

		store.begin_edit(milk);
		assert_eq!(store.commit_edit(milk, "Eggs", "5"), Change::ItemUpdated(milk));

		let item = store.state().item(milk).expect("item");
		assert_eq!(item.name, "Eggs");
		assert_eq!(item.quantity, 5);
		assert!(!item.is_editing);
		assert_eq!(store.state().item(bread).cloned(), before);
	}

	#[test]
	fn commit_edit_with_unknown_id_is_a_no_op() {
		let mut store = ListStore::new();
		add(&mut store, "Milk", "2");
		let before = store.snapshot();

		assert_eq!(store.commit_edit(ItemId::new(42), "x", "9"), Change::Unchanged);
		assert_eq!(store.snapshot(), before);
	}

	#[test]
	fn delete_preserves_order_of_remaining_items() {
		let mut store = ListStore::new();
		add(&mut store, "a", "1");
		let b = add(&mut store, "b", "1");
		add(&mut store, "c", "1");

		assert_eq!(store.delete_item(b), Change::ItemDeleted(b));
		assert_eq!(names(&store), vec!["a", "c"]);
		assert_eq!(store.delete_item(b), Change::Unchanged);
	}

	#[test]
	fn deleting_the_edited_item_drops_edit_state() {
		let mut store = ListStore::new();
		add(&mut store, "a", "1");
		let b = add(&mut store, "b", "1");
		store.begin_edit(b);

		store.delete_item(b);
		assert!(store.state().editing_item().is_none());
	}

	#[test]
	fn close_add_dialog_is_idempotent() {
		let mut store = ListStore::new();
		store.open_add_dialog();
		store.update_draft_name("Milk");
		store.update_draft_quantity("2");

		assert_eq!(store.close_add_dialog(), Change::AddDialogClosed);
		let once = store.snapshot();
		assert_eq!(store.close_add_dialog(), Change::Unchanged);
		assert_eq!(store.snapshot(), once);
		assert!(!once.is_add_dialog_open());
		assert_eq!(once.draft_name(), "");
		assert_eq!(once.draft_quantity(), "");
	}

	#[test]
	fn dispatch_matches_direct_calls() {
		let mut direct = ListStore::new();
		let id = add(&mut direct, "Milk", "2");
		direct.begin_edit(id);
		direct.commit_edit(id, "Oat milk", "3");

		let mut dispatched = ListStore::new();
		for intent in [
			Intent::OpenAddDialog,
			Intent::UpdateDraftName("Milk".into()),
			Intent::UpdateDraftQuantity("2".into()),
			Intent::ConfirmAdd,
			Intent::BeginEdit(id),
			Intent::CommitEdit {
				id,
				name: "Oat milk".into(),
				quantity: "3".into(),
			},
		] {
			dispatched.dispatch(intent);
		}

		assert_eq!(dispatched.snapshot(), direct.snapshot());
	}

	#[test]
	fn observers_see_effective_changes_only() {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let mut store = ListStore::new();
		store.subscribe(move |change: Change, state: &ListState| {
			sink.borrow_mut().push((change, state.len()));
		});

		store.close_add_dialog();
		store.open_add_dialog();
		store.confirm_add();
		store.update_draft_name("Milk");
		store.confirm_add();

		assert_eq!(
			*seen.borrow(),
			vec![
				(Change::AddDialogOpened, 0),
				(Change::DraftUpdated, 0),
				(Change::ItemAdded(ItemId::new(1)), 1),
			]
		);
	}

	#[test]
	fn seeded_store_replays_the_add_path() {
		let store = ListStore::seeded([
			Seed::new("Milk", "2"),
			Seed::new("", "4"),
			Seed::new("Bread", ""),
		]);

		let state = store.state();
		assert_eq!(names(&store), vec!["Milk", "Bread"]);
		assert_eq!(state.items()[0].id, ItemId::new(1));
		assert_eq!(state.items()[1].id, ItemId::new(2));
		assert_eq!(state.items()[1].quantity, 1);
		assert!(!state.is_add_dialog_open());
		assert_eq!(state.draft_quantity(), "");
	}
}
