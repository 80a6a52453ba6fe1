use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};
use shoplist::Seed;

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

#[derive(Parser, Debug)]
#[command(
	name = "shoplist",
	version,
	long_version = long_version(),
	about = "Keep a shopping list in the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `shoplist` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SHOPLIST_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the list title (default: Shopping list)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'i',
		long = "item",
		value_name = "NAME[:QTY]",
		action = ArgAction::Append,
		help = "Start with this item on the list, after configured items (default: none)"
	)]
	pub(crate) items: Vec<Seed>,
	#[arg(
		short = 'o',
		long,
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Format used to print the list on exit"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-level",
		value_name = "LEVEL",
		help = "Log verbosity written to the log file (default: info)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(long = "print-config", help = "Print the effective configuration before starting")]
	pub(crate) print_config: bool,
	#[arg(long = "list-themes", help = "List the built-in themes and exit")]
	pub(crate) list_themes: bool,
}
