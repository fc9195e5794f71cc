use serde::Deserialize;

use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) title: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) clinic: Option<String>,
	pub(super) sort: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(title) = cli.title.clone() {
			self.title = Some(title);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(clinic) = cli.clinic.clone() {
			self.clinic = Some(clinic);
		}
		if let Some(sort) = cli.sort.clone() {
			self.sort = Some(sort);
		}
	}

	/// Drop blank values so they fall back to defaults.
	pub(super) fn normalized(self) -> Self {
		Self {
			title: non_blank(self.title),
			theme: non_blank(self.theme),
			clinic: non_blank(self.clinic),
			sort: non_blank(self.sort),
		}
	}
}
