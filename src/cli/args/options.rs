use clap::ValueEnum;

/// How the final list is printed once the screen closes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// One `name × quantity` line per item.
	#[default]
	Plain,
	/// Pretty-printed JSON document.
	Json,
}
