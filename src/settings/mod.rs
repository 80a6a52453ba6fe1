//! Configuration loading and resolution.
//!
//! `load` merges configuration files, environment variables and CLI flags and
//! returns the [`ResolvedConfig`] the binary runs with.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
