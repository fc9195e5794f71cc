use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use super::{AppointmentRecord, Clinic, fixtures};

/// Failure while loading an appointment list.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to read appointment data from {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse appointment data from {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("appointment id {0} appears more than once")]
	DuplicateId(u32),
}

/// On-disk layout of an appointment data file.
#[derive(Debug, Deserialize)]
struct DataFile {
	appointments: Vec<AppointmentRecord>,
	#[serde(default)]
	clinics: Option<Vec<Clinic>>,
}

/// Read-only appointment list and clinic registry.
///
/// Records are created once at startup and shared behind an [`Arc`]; nothing
/// mutates them afterwards.
#[derive(Debug, Clone)]
pub struct RecordStore {
	appointments: Arc<[AppointmentRecord]>,
	clinics: Arc<[Clinic]>,
}

impl RecordStore {
	/// Build a store, rejecting duplicate appointment ids.
	pub fn new(appointments: Vec<AppointmentRecord>, clinics: Vec<Clinic>) -> Result<Self, StoreError> {
		let mut seen = HashSet::with_capacity(appointments.len());
		for record in &appointments {
			if !seen.insert(record.id) {
				return Err(StoreError::DuplicateId(record.id));
			}
		}
		Ok(Self {
			appointments: appointments.into(),
			clinics: clinics.into(),
		})
	}

	/// The sample appointment list bundled with the crate.
	#[must_use]
	pub fn builtin() -> Self {
		Self {
			appointments: fixtures::appointments().into(),
			clinics: fixtures::clinics().into(),
		}
	}

	/// Load records from a JSON file. When the file omits `clinics` the
	/// built-in registry is used.
	pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
		let contents = fs::read_to_string(path).map_err(|source| StoreError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		let data: DataFile = serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
			path: path.to_path_buf(),
			source,
		})?;
		let clinics = data.clinics.unwrap_or_else(fixtures::clinics);
		let store = Self::new(data.appointments, clinics)?;
		log::info!(
			"loaded {} appointments from {}",
			store.appointments.len(),
			path.display()
		);
		Ok(store)
	}

	#[must_use]
	pub fn appointments(&self) -> &[AppointmentRecord] {
		&self.appointments
	}

	#[must_use]
	pub fn clinics(&self) -> &[Clinic] {
		&self.clinics
	}

	/// Whether `name` matches a registry clinic exactly.
	#[must_use]
	pub fn has_clinic(&self, name: &str) -> bool {
		self.clinics.iter().any(|clinic| clinic.name == name)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.appointments.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.appointments.is_empty()
	}
}

impl Default for RecordStore {
	fn default() -> Self {
		Self::builtin()
	}
}
