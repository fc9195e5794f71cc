use anyhow::Result;
use medboard::{AppointmentRecord, DashboardOutcome};
use serde_json::json;

use super::OutputFormat;

/// Print a plain-text representation of the dashboard outcome.
pub(crate) fn print_plain(outcome: &DashboardOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(record) => println!("{}", plain_row(record)),
		None => println!("No selection"),
	}
}

fn plain_row(record: &AppointmentRecord) -> String {
	format!(
		"{}\t{}\t{}\t{}\t{}\t{} {}\t{}",
		record.id,
		record.patient_name,
		record.patient_id,
		record.clinic,
		record.formatted_balance(),
		record.time,
		record.date,
		record.status
	)
}

/// Format the dashboard outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &DashboardOutcome) -> Result<String> {
	let selection = match &outcome.selection {
		Some(record) => serde_json::to_value(record)?,
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the dashboard outcome.
pub(crate) fn print_json(outcome: &DashboardOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Format rows produced by a headless pipeline run.
pub(crate) fn format_listing(records: &[&AppointmentRecord], format: OutputFormat) -> Result<String> {
	match format {
		OutputFormat::Plain => Ok(records
			.iter()
			.map(|record| plain_row(record))
			.collect::<Vec<_>>()
			.join("\n")),
		OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
	}
}

pub(crate) fn print_listing(records: &[&AppointmentRecord], format: OutputFormat) -> Result<()> {
	let listing = format_listing(records, format)?;
	if !listing.is_empty() {
		println!("{listing}");
	}
	Ok(())
}
