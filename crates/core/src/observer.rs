use crate::intent::Change;
use crate::state::ListState;

/// Receives a callback after every intent that changed the store.
///
/// Closures taking `(Change, &ListState)` implement this trait, which is the
/// usual way to hook a redraw or a log line onto the store.
pub trait StoreObserver {
	fn state_changed(&mut self, change: Change, state: &ListState);
}

impl<F> StoreObserver for F
where
	F: FnMut(Change, &ListState),
{
	fn state_changed(&mut self, change: Change, state: &ListState) {
		self(change, state);
	}
}
