use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use medboard::pipeline::SortCriterion;
use medboard::records::ClinicSelection;

use super::RawConfig;
use crate::cli::CliArgs;

#[test]
fn cli_overrides_take_precedence() {
	let mut cli = CliArgs::parse_from(["medboard", "--no-history"]);
	cli.data = Some(PathBuf::from("/tmp/appointments.json"));
	cli.title = Some("Ward".into());
	cli.initial_query = Some("neuro".into());
	cli.clinic = Some("Neurology".into());
	cli.sort = Some("patient-id-asc".into());
	cli.theme = Some("light".into());
	cli.debounce_ms = Some(50);

	let mut config = RawConfig::default();
	config.ui.title = Some("From file".into());
	config.history.enabled = Some(true);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.data.file, cli.data);
	assert_eq!(config.ui.title, cli.title);
	assert_eq!(config.ui.clinic, cli.clinic);
	assert_eq!(config.ui.sort, cli.sort);
	assert_eq!(config.ui.theme, cli.theme);
	assert_eq!(config.search.initial_query, cli.initial_query);
	assert_eq!(config.search.debounce_ms, Some(50));
	assert_eq!(config.history.enabled, Some(false));
}

#[test]
fn defaults_resolve_to_the_builtin_dashboard() {
	let cli = CliArgs::empty();
	let resolved = RawConfig::default().resolve(&cli).expect("defaults resolve");

	assert!(resolved.data_file.is_none());
	assert_eq!(resolved.store.len(), 12);
	assert_eq!(resolved.debounce_ms, 300);
	assert!(resolved.clinic.is_all());
	assert_eq!(resolved.sort, None);
	assert!(resolved.history_enabled);
	assert!(resolved.initial_query.is_empty());
}

#[test]
fn resolved_values_are_typed() {
	let mut cli = CliArgs::empty();
	cli.clinic = Some("Accident & Emergency".into());
	cli.sort = Some("Gender-Female".into());
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);
	let resolved = raw.resolve(&cli).expect("resolves");

	assert_eq!(resolved.clinic, ClinicSelection::Named("Accident & Emergency".into()));
	assert_eq!(resolved.sort, SortCriterion::from_id("gender-female"));
}

#[test]
fn unknown_sort_from_cli_names_the_flag() {
	let mut cli = CliArgs::empty();
	cli.sort = Some("oldest-first".into());
	let mut raw = RawConfig::default();
	raw.apply_cli_overrides(&cli);

	let message = raw.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.sort"));
	assert!(message.contains("CLI flag `--sort`"));
}

#[test]
fn blank_theme_falls_back_to_default() {
	let mut raw = RawConfig::default();
	raw.ui.theme = Some("   ".into());
	let resolved = raw.resolve(&CliArgs::empty()).expect("resolves");
	assert!(resolved.theme.is_none());
}

#[test]
fn data_file_is_loaded_and_clinics_validated_against_it() {
	let mut file = tempfile::NamedTempFile::new().expect("temp file");
	write!(
		file,
		r#"{{
			"appointments": [{{
				"id": 1, "patientName": "Ada Obi", "patientId": "HOSP1", "gender": "Female",
				"age": "40yrs", "clinic": "Dermatology", "walletBalance": 5000,
				"time": "09:00 AM", "date": "23 Sep 2025", "status": "Processing"
			}}],
			"clinics": [{{ "id": "derm", "name": "Dermatology" }}]
		}}"#
	)
	.expect("write");

	let mut raw = RawConfig::default();
	raw.data.file = Some(file.path().to_path_buf());
	raw.ui.clinic = Some("Dermatology".into());
	let resolved = raw.resolve(&CliArgs::empty()).expect("resolves");
	assert_eq!(resolved.store.len(), 1);
	assert_eq!(resolved.clinic, ClinicSelection::Named("Dermatology".into()));

	let mut raw = RawConfig::default();
	raw.data.file = Some(file.path().to_path_buf());
	raw.ui.clinic = Some("Neurology".into());
	assert!(raw.resolve(&CliArgs::empty()).is_err());
}

#[test]
fn missing_data_file_reports_the_path() {
	let mut raw = RawConfig::default();
	raw.data.file = Some(PathBuf::from("/no/such/appointments.json"));
	let err = raw.resolve(&CliArgs::empty()).unwrap_err();
	assert!(format!("{err:#}").contains("/no/such/appointments.json"));
}
