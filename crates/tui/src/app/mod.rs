//! Application state and behavior for the list screen.
//!
//! [`App`] pairs the [`ListStore`](shoplist_core::ListStore) with the
//! presentation-only state (selection, focused field, input buffers). The
//! submodules split it into input handling and rendering.

mod actions;
mod render;
mod state;

pub use state::{App, Field, ListOutcome, Mode};
