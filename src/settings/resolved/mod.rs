use std::path::PathBuf;

use medboard::pipeline::SortCriterion;
use medboard::records::{ClinicSelection, RecordStore};

mod errors;
mod sources;
mod summary;
pub(super) mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub data_file: Option<PathBuf>,
	pub store: RecordStore,
	pub title: Option<String>,
	pub initial_query: String,
	pub debounce_ms: u64,
	pub theme: Option<String>,
	pub clinic: ClinicSelection,
	pub sort: Option<SortCriterion>,
	pub history_enabled: bool,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
impl ResolvedConfig {
	pub(crate) fn for_tests() -> Self {
		Self {
			data_file: None,
			store: RecordStore::builtin(),
			title: None,
			initial_query: String::new(),
			debounce_ms: 300,
			theme: None,
			clinic: ClinicSelection::All,
			sort: None,
			history_enabled: false,
		}
	}
}
