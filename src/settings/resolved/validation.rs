use medboard::pipeline::SortCriterion;
use medboard::records::{ClinicSelection, RecordStore};
use medboard::ui::theme;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest accepted debounce window.
pub(crate) const MAX_DEBOUNCE_MS: u64 = 5_000;

pub(super) fn validate(config: &ResolvedConfig, sources: &ConfigSources) -> Result<(), ConfigError> {
	if config.debounce_ms > MAX_DEBOUNCE_MS {
		return Err(ConfigError::invalid(
			"search.debounce_ms",
			config.debounce_ms.to_string(),
			sources.source_for_debounce(),
			format!("must be at most {MAX_DEBOUNCE_MS}"),
		));
	}

	if let Some(name) = &config.theme
		&& theme::by_name(name).is_none()
	{
		let known: Vec<&str> = theme::names().collect();
		return Err(ConfigError::invalid(
			"ui.theme",
			name.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", known.join(", ")),
		));
	}

	Ok(())
}

/// Turn a sort id into a criterion, rejecting unknown ids.
pub(in crate::settings) fn parse_sort(
	value: Option<String>,
	sources: &ConfigSources,
) -> Result<Option<SortCriterion>, ConfigError> {
	let Some(value) = value else {
		return Ok(None);
	};
	match SortCriterion::from_id(&value) {
		Some(criterion) => Ok(Some(criterion)),
		None => {
			let known: Vec<&str> = SortCriterion::ALL.iter().map(|criterion| criterion.id()).collect();
			Err(ConfigError::invalid(
				"ui.sort",
				value,
				sources.source_for_sort(),
				format!("unknown sort; expected one of {}", known.join(", ")),
			))
		}
	}
}

/// Match a clinic name against the registry of the loaded store.
pub(in crate::settings) fn parse_clinic(
	value: Option<String>,
	store: &RecordStore,
	sources: &ConfigSources,
) -> Result<ClinicSelection, ConfigError> {
	let Some(value) = value else {
		return Ok(ClinicSelection::All);
	};
	let selection = ClinicSelection::from_label(&value);
	if selection.is_all() || store.has_clinic(&value) {
		return Ok(selection);
	}
	Err(ConfigError::invalid(
		"ui.clinic",
		value,
		sources.source_for_clinic(),
		"not a known clinic; run with --list-clinics to see them",
	))
}
