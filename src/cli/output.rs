use std::fmt::Write;

use anyhow::{Context, Result};
use shoplist::ListOutcome;

const EMPTY_LIST: &str = "Shopping list is empty";

/// Render the final list as one `name × quantity` line per item.
pub(crate) fn format_plain(outcome: &ListOutcome) -> String {
	if outcome.items.is_empty() {
		return format!("{EMPTY_LIST}\n");
	}

	let mut out = String::new();
	for item in &outcome.items {
		let _ = writeln!(out, "{item}");
	}
	out
}

/// Print the plain-text representation of the final list.
pub(crate) fn print_plain(outcome: &ListOutcome) {
	print!("{}", format_plain(outcome));
}

/// Format the final list as a pretty JSON document.
pub(crate) fn format_json(outcome: &ListOutcome) -> Result<String> {
	serde_json::to_string_pretty(outcome).context("failed to serialise the list as JSON")
}

/// Print the JSON representation of the final list.
pub(crate) fn print_json(outcome: &ListOutcome) -> Result<()> {
	println!("{}", format_json(outcome)?);
	Ok(())
}
