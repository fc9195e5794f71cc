use medboard::pipeline::DEFAULT_DEBOUNCE;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Search behaviour as read from config files and the environment.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) debounce_ms: Option<u64>,
	pub(super) initial_query: Option<String>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
	}

	pub(super) fn debounce_ms(&self) -> u64 {
		self.debounce_ms
			.unwrap_or_else(|| DEFAULT_DEBOUNCE.as_millis() as u64)
	}
}
