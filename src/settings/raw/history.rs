use serde::Deserialize;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct HistorySection {
	pub(super) enabled: Option<bool>,
}

impl HistorySection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if cli.no_history {
			self.enabled = Some(false);
		}
	}

	pub(super) fn enabled(&self) -> bool {
		self.enabled.unwrap_or(true)
	}
}
