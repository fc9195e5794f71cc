use std::path::PathBuf;

use anyhow::{Context, Result};
use medboard::RecordStore;
use serde::Deserialize;

use crate::cli::CliArgs;

/// Where appointment records come from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) file: Option<PathBuf>,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.file = Some(path);
		}
	}

	/// Load the configured data file, or the built-in list when none is set.
	pub(super) fn resolve(self) -> Result<(Option<PathBuf>, RecordStore)> {
		let Some(path) = self.file else {
			return Ok((None, RecordStore::builtin()));
		};
		let store = RecordStore::from_json_file(&path)
			.with_context(|| format!("failed to load appointments from {}", path.display()))?;
		Ok((Some(path), store))
	}
}
