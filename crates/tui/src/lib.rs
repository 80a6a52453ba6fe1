//! Terminal front-end for the `shoplist` store.
//!
//! The [`App`] renders a [`ListState`](shoplist_core::ListState) with
//! `ratatui` and turns key presses into store intents. [`run`] owns the
//! terminal for the lifetime of the screen and returns the final list.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;


pub use app::{App, Field, ListOutcome, Mode};
pub use config::UiLabels;
pub use runtime::run;

pub use crate::input::TextInput;
pub use crate::style::{StyleConfig, Theme, ThemeError, builtin_themes, default_theme};
