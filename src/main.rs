mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::ExploreWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in leetex_tui::names() {
			println!("{name}");
		}
		return Ok(());
	}

	if let Err(err) = leetex::logging::initialize(cli.log_file.as_deref()) {
		eprintln!("warning: logging disabled: {err:#}");
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_explorer(cli.output, resolved)
}

/// Execute the explorer and print its outcome in the chosen format.
fn run_explorer(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = ExploreWorkflow::from_config(settings)?;
	let outcome = workflow.run()?;
	tracing::info!(accepted = outcome.accepted, "explorer finished");

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
