//! Core crate exports for building and running the `shoplist` terminal list.
//!
//! The root module re-exports the store from `shoplist-core` and the
//! front-end from `shoplist-tui` so embedders only need one dependency, and
//! adds the process-level pieces: application directories and logging.

pub mod app_dirs;
pub mod logging;

pub use shoplist_core::{
	Change, DEFAULT_QUANTITY, Intent, Item, ItemId, ListState, ListStore, Seed, SeedError,
	StoreObserver, parse_quantity,
};
pub use shoplist_tui::{App, ListOutcome, Theme, UiLabels, run, style};
