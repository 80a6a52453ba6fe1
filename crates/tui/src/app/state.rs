//! Core state container for the terminal front-end.

use ratatui::widgets::{ScrollbarState, TableState};
use serde::Serialize;
use shoplist_core::{Item, ItemId, ListState, ListStore};

use crate::config::UiLabels;
use crate::input::TextInput;
use crate::style::{StyleConfig, Theme};

/// Which of the two inputs receives keystrokes, in the dialog or inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
	#[default]
	Name,
	Quantity,
}

impl Field {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Name => Self::Quantity,
			Self::Quantity => Self::Name,
		}
	}
}

/// Interaction mode, derived from the store's state on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	Browse,
	AddDialog,
	Editing(ItemId),
}

/// What the screen hands back when the user leaves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListOutcome {
	/// Items in list order at the moment of exit.
	pub items: Vec<Item>,
}

/// Aggregate state shared across the terminal UI.
///
/// The store is the single owner of list data; the `App` only reads its
/// state and forwards intents with the literal text of each input.
pub struct App<'a> {
	pub(super) store: ListStore,
	/// Selection within the item table.
	pub table_state: TableState,
	pub(crate) scrollbar_state: ScrollbarState,
	pub(crate) focus: Field,
	pub(crate) name_input: TextInput<'a>,
	pub(crate) quantity_input: TextInput<'a>,
	pub(crate) edit_name: TextInput<'a>,
	pub(crate) edit_quantity: TextInput<'a>,
	pub(crate) labels: UiLabels,
	/// Current style and theme configuration.
	pub style: StyleConfig,
}

impl<'a> App<'a> {
	pub fn new(store: ListStore) -> Self {
		let mut app = Self {
			store,
			table_state: TableState::default(),
			scrollbar_state: ScrollbarState::default(),
			focus: Field::Name,
			name_input: TextInput::default(),
			quantity_input: TextInput::default(),
			edit_name: TextInput::default(),
			edit_quantity: TextInput::default(),
			labels: UiLabels::default(),
			style: StyleConfig::default(),
		};
		app.ensure_selection();
		app
	}

	#[must_use]
	pub fn with_labels(mut self, labels: UiLabels) -> Self {
		self.labels = labels;
		self
	}

	#[must_use]
	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.style = StyleConfig::with_theme(theme);
		self
	}

	/// Read-only view of the list for rendering.
	#[must_use]
	pub fn state(&self) -> &ListState {
		self.store.state()
	}

	pub(crate) fn store_mut(&mut self) -> &mut ListStore {
		&mut self.store
	}

	/// Give the store back, e.g. after the event loop finished.
	#[must_use]
	pub fn into_store(self) -> ListStore {
		self.store
	}

	#[must_use]
	pub fn mode(&self) -> Mode {
		let state = self.store.state();
		if state.is_add_dialog_open() {
			Mode::AddDialog
		} else if let Some(item) = state.editing_item() {
			Mode::Editing(item.id)
		} else {
			Mode::Browse
		}
	}

	#[must_use]
	pub fn outcome(&self) -> ListOutcome {
		ListOutcome {
			items: self.store.state().items().to_vec(),
		}
	}

	/// Item under the table cursor.
	#[must_use]
	pub fn selected_item(&self) -> Option<&Item> {
		let index = self.table_state.selected()?;
		self.store.state().items().get(index)
	}

	pub(crate) fn select_item(&mut self, id: ItemId) {
		if let Some(index) = self.store.state().position(id) {
			self.table_state.select(Some(index));
		}
	}

	/// Keep the table cursor on an existing row after the list changed.
	pub(crate) fn ensure_selection(&mut self) {
		let len = self.store.state().len();
		match self.table_state.selected() {
			_ if len == 0 => self.table_state.select(None),
			None => self.table_state.select(Some(0)),
			Some(selected) if selected >= len => self.table_state.select(Some(len - 1)),
			Some(_) => {}
		}
	}

	/// Copy the store's drafts into the dialog inputs.
	pub(crate) fn load_dialog_inputs(&mut self) {
		let state = self.store.state();
		self.name_input = TextInput::new(state.draft_name());
		self.quantity_input = TextInput::new(state.draft_quantity());
		self.focus = Field::Name;
	}

	/// Copy an item's current values into the inline editor.
	pub(crate) fn load_edit_inputs(&mut self, id: ItemId) {
		if let Some(item) = self.store.state().item(id) {
			self.edit_name = TextInput::new(item.name.as_str());
			self.edit_quantity = TextInput::new(item.quantity.to_string());
		}
		self.focus = Field::Name;
	}
}
