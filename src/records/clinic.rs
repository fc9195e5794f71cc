use std::fmt;

use serde::{Deserialize, Serialize};

/// Label of the pass-through entry at the top of the clinic picker.
pub const ALL_CLINICS: &str = "All clinics";

/// A clinic known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinic {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub icon: String,
}

impl Clinic {
	pub fn new(id: impl Into<String>, name: impl Into<String>, icon: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			icon: icon.into(),
		}
	}
}

/// The clinic filter currently applied to the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ClinicSelection {
	#[default]
	All,
	Named(String),
}

impl ClinicSelection {
	/// Parse a picker label; the sentinel label maps to [`ClinicSelection::All`].
	pub fn from_label(label: &str) -> Self {
		if label == ALL_CLINICS {
			Self::All
		} else {
			Self::Named(label.to_string())
		}
	}

	#[must_use]
	pub fn label(&self) -> &str {
		match self {
			Self::All => ALL_CLINICS,
			Self::Named(name) => name,
		}
	}

	#[must_use]
	pub fn is_all(&self) -> bool {
		matches!(self, Self::All)
	}
}

impl fmt::Display for ClinicSelection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sentinel_label_round_trips_to_all() {
		assert!(ClinicSelection::from_label("All clinics").is_all());
		assert_eq!(ClinicSelection::All.label(), ALL_CLINICS);
		let named = ClinicSelection::from_label("Neurology");
		assert_eq!(named, ClinicSelection::Named("Neurology".into()));
		assert_eq!(named.to_string(), "Neurology");
	}
}
