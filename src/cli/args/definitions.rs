use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `medboard` binary.
#[derive(Parser, Debug)]
#[command(
	name = "medboard",
	version,
	long_version = long_version(),
	about = "Search, filter and sort the day's clinic appointments",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "MEDBOARD_CONFIG",
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
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Load appointments from a JSON file (default: built-in list)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 't',
		long,
		value_name = "TITLE",
		help = "Set the table title (default: Appointments)"
	)]
	pub(crate) title: Option<String>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Provide an initial search query (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "NAME",
		help = "Show only one clinic (default: All clinics)"
	)]
	pub(crate) clinic: Option<String>,
	#[arg(
		short = 's',
		long,
		value_name = "ID",
		help = "Order or narrow rows, e.g. patient-name-asc or gender-female (default: none)"
	)]
	pub(crate) sort: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Quiet period before a typed query is applied (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "no-history",
		help = "Keep recent searches in memory only (default: disabled)"
	)]
	pub(crate) no_history: bool,
	#[arg(
		long = "list",
		help = "Print the matching rows and exit instead of opening the dashboard (default: disabled)"
	)]
	pub(crate) list: bool,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long = "list-clinics",
		help = "List known clinics and exit (default: disabled)"
	)]
	pub(crate) list_clinics: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
}

impl CliArgs {
	/// Arguments equivalent to running the binary with no flags.
	#[cfg(test)]
	pub(crate) fn empty() -> Self {
		Self {
			config: Vec::new(),
			no_config: true,
			data: None,
			title: None,
			initial_query: None,
			clinic: None,
			sort: None,
			theme: None,
			debounce_ms: None,
			no_history: false,
			list: false,
			print_config: false,
			list_themes: false,
			list_clinics: false,
			output: OutputFormat::Plain,
		}
	}
}
