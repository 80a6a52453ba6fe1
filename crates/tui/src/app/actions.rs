use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shoplist_core::{Change, ItemId};
use tracing::trace;

use super::state::{App, Field, ListOutcome, Mode};

impl App<'_> {
	/// Process a keyboard event and return the outcome if the user exits.
	pub fn handle_key(&mut self, key: KeyEvent) -> Option<ListOutcome> {
		trace!(?key, mode = ?self.mode(), "key");
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Some(self.outcome());
		}

		match self.mode() {
			Mode::Browse => return self.handle_browse_key(key),
			Mode::AddDialog => self.handle_dialog_key(key),
			Mode::Editing(id) => self.handle_edit_key(id, key),
		}
		None
	}

	fn handle_browse_key(&mut self, key: KeyEvent) -> Option<ListOutcome> {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => return Some(self.outcome()),
			KeyCode::Char('a' | '+') => {
				self.store_mut().open_add_dialog();
				self.load_dialog_inputs();
			}
			KeyCode::Char('e') | KeyCode::Enter => {
				if let Some(id) = self.selected_item().map(|item| item.id) {
					self.store_mut().begin_edit(id);
					self.load_edit_inputs(id);
				}
			}
			KeyCode::Char('d') | KeyCode::Delete => {
				if let Some(id) = self.selected_item().map(|item| item.id) {
					self.store_mut().delete_item(id);
					self.ensure_selection();
				}
			}
			KeyCode::Up | KeyCode::Char('k') => self.move_selection_up(),
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			KeyCode::Home | KeyCode::Char('g') => self.table_state.select_first(),
			KeyCode::End | KeyCode::Char('G') => self.table_state.select_last(),
			_ => {}
		}
		self.ensure_selection();
		None
	}

	fn handle_dialog_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => {
				self.store_mut().close_add_dialog();
				self.load_dialog_inputs();
			}
			KeyCode::Enter => {
				if let Change::ItemAdded(id) = self.store_mut().confirm_add() {
					self.load_dialog_inputs();
					self.select_item(id);
				}
			}
			KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
				self.focus = self.focus.toggled();
			}
			_ => match self.focus {
				Field::Name => {
					if self.name_input.input(key) {
						let text = self.name_input.text().to_string();
						self.store_mut().update_draft_name(text);
					}
				}
				Field::Quantity => {
					if self.quantity_input.input(key) {
						let text = self.quantity_input.text().to_string();
						self.store_mut().update_draft_quantity(text);
					}
				}
			},
		}
	}

	fn handle_edit_key(&mut self, id: ItemId, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => {
				let name = self.edit_name.text().to_string();
				let quantity = self.edit_quantity.text().to_string();
				self.store_mut().commit_edit(id, name, &quantity);
			}
			KeyCode::Esc => {
				// No cancel intent exists: discarding re-commits the current values.
				if let Some(item) = self.state().item(id) {
					let name = item.name.clone();
					let quantity = item.quantity.to_string();
					self.store_mut().commit_edit(id, name, &quantity);
				}
			}
			KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.store_mut().delete_item(id);
				self.ensure_selection();
			}
			KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
				self.focus = self.focus.toggled();
			}
			_ => {
				let input = match self.focus {
					Field::Name => &mut self.edit_name,
					Field::Quantity => &mut self.edit_quantity,
				};
				input.input(key);
			}
		}
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.state().len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}
