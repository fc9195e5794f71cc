mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_listing, print_plain};
use settings::ResolvedConfig;
use workflow::DashboardWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in medboard::ui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	medboard::logging::initialize();

	let resolved = settings::load(&cli)?;

	if cli.list_clinics {
		for clinic in resolved.store.clinics() {
			println!("{}", clinic.name);
		}
		return Ok(());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	if cli.list {
		return print_listing(&workflow::list(&resolved), cli.output);
	}

	run_dashboard(cli.output, resolved)
}

/// Run the interactive dashboard and print the outcome in the chosen format.
fn run_dashboard(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = DashboardWorkflow::from_config(settings);
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
