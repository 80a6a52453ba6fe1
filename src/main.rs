mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use shoplist::{App, ListStore, logging, style};
use tracing::info;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in style::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_list(cli.output, resolved)
}

/// Open the list screen and print the final list in the chosen format.
fn run_list(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	match logging::initialize(settings.log_level) {
		Ok(path) => info!(path = %path.display(), "logging initialised"),
		Err(err) => eprintln!("warning: logging disabled: {err:#}"),
	}

	let mut store = ListStore::seeded(settings.seeds.iter().cloned());
	store.subscribe(logging::change_logger());

	let outcome = App::new(store)
		.with_labels(settings.labels())
		.with_theme(settings.theme)
		.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
