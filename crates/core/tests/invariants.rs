use proptest::prelude::*;
use shoplist_core::{Change, Intent, ItemId, ListStore};

fn intent() -> impl Strategy<Value = Intent> {
	let id = (1u64..12).prop_map(ItemId::new);
	prop_oneof![
		Just(Intent::OpenAddDialog),
		Just(Intent::CloseAddDialog),
		"[a-z]{0,6}".prop_map(Intent::UpdateDraftName),
		"[0-9a-z]{0,3}".prop_map(Intent::UpdateDraftQuantity),
		Just(Intent::ConfirmAdd),
		id.clone().prop_map(Intent::BeginEdit),
		(id.clone(), "[a-z]{0,6}", "[0-9]{0,2}")
			.prop_map(|(id, name, quantity)| Intent::CommitEdit { id, name, quantity }),
		id.prop_map(Intent::DeleteItem),
	]
}

proptest! {
	#[test]
	fn at_most_one_item_is_editing(intents in prop::collection::vec(intent(), 0..64)) {
		let mut store = ListStore::new();
		for intent in intents {
			store.dispatch(intent);
			let editing = store.state().items().iter().filter(|item| item.is_editing).count();
			prop_assert!(editing <= 1);
		}
	}

	#[test]
	fn ids_are_distinct_and_follow_add_order(intents in prop::collection::vec(intent(), 0..64)) {
		let mut store = ListStore::new();
		let mut added = Vec::new();
		for intent in intents {
			if let Change::ItemAdded(id) = store.dispatch(intent) {
				added.push(id);
			}
		}

		prop_assert!(added.windows(2).all(|pair| pair[0] < pair[1]));
		let mut unique = added.clone();
		unique.dedup();
		prop_assert_eq!(unique.len(), added.len());
		let ids: Vec<ItemId> = store.state().items().iter().map(|item| item.id).collect();
		prop_assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
	}

	#[test]
	fn closing_the_dialog_always_clears_drafts(intents in prop::collection::vec(intent(), 0..32)) {
		let mut store = ListStore::new();
		for intent in intents {
			store.dispatch(intent);
		}
		store.dispatch(Intent::CloseAddDialog);
		let closed_once = store.snapshot();
		store.dispatch(Intent::CloseAddDialog);

		prop_assert!(!closed_once.is_add_dialog_open());
		prop_assert_eq!(closed_once.draft_name(), "");
		prop_assert_eq!(closed_once.draft_quantity(), "");
		prop_assert_eq!(store.snapshot(), closed_once);
	}
}
