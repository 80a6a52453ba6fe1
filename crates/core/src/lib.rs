//! In-memory state machine behind the `shoplist` interface.
//!
//! [`ListStore`] owns the ordered items together with the add-dialog drafts
//! and the inline-edit flag. Presentation layers read [`ListState`] through
//! [`ListStore::state`] and forward user actions either through the named
//! methods or as [`Intent`] values via [`ListStore::dispatch`].

mod intent;
mod item;
mod observer;
mod quantity;
mod seed;
mod state;
mod store;

pub use intent::{Change, Intent};
pub use item::{Item, ItemId};
pub use observer::StoreObserver;
pub use quantity::{DEFAULT_QUANTITY, parse_quantity};
pub use seed::{Seed, SeedError};
pub use state::ListState;
pub use store::ListStore;
