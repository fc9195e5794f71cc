use clap::{CommandFactory, FromArgMatches};

use super::{CliArgs, OutputFormat};

fn parse(args: &[&str]) -> CliArgs {
	let command = CliArgs::command();
	let mut matches = command
		.try_get_matches_from(args.iter().copied())
		.expect("arguments parse");
	CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
}

#[test]
fn command_supports_custom_styles() {
	let command = CliArgs::command();
	assert!(command.get_about().is_some());
	command.debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = parse(&["medboard"]);
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.initial_query.is_none());
	assert!(!parsed.list);
}

#[test]
fn filters_and_output_flags_parse() {
	let parsed = parse(&[
		"medboard",
		"-q",
		"neuro",
		"--clinic",
		"Neurology",
		"--sort",
		"patient-id-asc",
		"--debounce-ms",
		"120",
		"--list",
		"-o",
		"json",
	]);
	assert_eq!(parsed.initial_query.as_deref(), Some("neuro"));
	assert_eq!(parsed.clinic.as_deref(), Some("Neurology"));
	assert_eq!(parsed.sort.as_deref(), Some("patient-id-asc"));
	assert_eq!(parsed.debounce_ms, Some(120));
	assert!(parsed.list);
	assert_eq!(parsed.output, OutputFormat::Json);
}
