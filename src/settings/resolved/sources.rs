use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) debounce_ms: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) clinic: Option<SettingSource>,
	pub(crate) sort: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_debounce(&self) -> SettingSource {
		self.debounce_ms
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.debounce_ms"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme.clone().unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_clinic(&self) -> SettingSource {
		self.clinic.clone().unwrap_or(SettingSource::ConfigKey("ui.clinic"))
	}

	pub(crate) fn source_for_sort(&self) -> SettingSource {
		self.sort.clone().unwrap_or(SettingSource::ConfigKey("ui.sort"))
	}
}
