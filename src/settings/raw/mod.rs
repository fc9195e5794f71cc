use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};
use super::resolved::validation::{parse_clinic, parse_sort};

mod data;
mod history;
mod search;
mod ui;

use data::DataSection;
use history::HistorySection;
use search::SearchSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	data: DataSection,
	search: SearchSection,
	ui: UiSection,
	history: HistorySection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.data.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.history.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let ui = self.ui.normalized();
		let sources = ConfigSources {
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.search.debounce_ms.is_some(),
				"MEDBOARD__SEARCH__DEBOUNCE_MS",
				"--debounce-ms",
				"search.debounce_ms",
			),
			theme: detect_source(
				cli.theme.is_some(),
				ui.theme.is_some(),
				"MEDBOARD__UI__THEME",
				"--theme",
				"ui.theme",
			),
			clinic: detect_source(
				cli.clinic.is_some(),
				ui.clinic.is_some(),
				"MEDBOARD__UI__CLINIC",
				"--clinic",
				"ui.clinic",
			),
			sort: detect_source(
				cli.sort.is_some(),
				ui.sort.is_some(),
				"MEDBOARD__UI__SORT",
				"--sort",
				"ui.sort",
			),
		};

		let debounce_ms = self.search.debounce_ms();
		let (data_file, store) = self.data.resolve()?;
		let clinic = parse_clinic(ui.clinic, &store, &sources).map_err(Error::new)?;
		let sort = parse_sort(ui.sort, &sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			data_file,
			store,
			title: ui.title,
			initial_query: self.search.initial_query.unwrap_or_default(),
			debounce_ms,
			theme: ui.theme,
			clinic,
			sort,
			history_enabled: self.history.enabled(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
