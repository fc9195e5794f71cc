use std::fmt;

use serde::{Deserialize, Serialize};

/// Patient gender as recorded on the appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
	Male,
	Female,
}

impl Gender {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Male => "Male",
			Self::Female => "Female",
		}
	}
}

impl fmt::Display for Gender {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Where a patient currently sits in the visit workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
	Processing,
	#[serde(rename = "Not arrived")]
	NotArrived,
	#[serde(rename = "Awaiting vitals")]
	AwaitingVitals,
	#[serde(rename = "Awaiting doctor")]
	AwaitingDoctor,
	#[serde(rename = "Admitted to ward")]
	AdmittedToWard,
	#[serde(rename = "Transferred to A&E")]
	TransferredToAe,
	#[serde(rename = "Seen doctor")]
	SeenDoctor,
}

impl AppointmentStatus {
	pub const ALL: [Self; 7] = [
		Self::Processing,
		Self::NotArrived,
		Self::AwaitingVitals,
		Self::AwaitingDoctor,
		Self::AdmittedToWard,
		Self::TransferredToAe,
		Self::SeenDoctor,
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Processing => "Processing",
			Self::NotArrived => "Not arrived",
			Self::AwaitingVitals => "Awaiting vitals",
			Self::AwaitingDoctor => "Awaiting doctor",
			Self::AdmittedToWard => "Admitted to ward",
			Self::TransferredToAe => "Transferred to A&E",
			Self::SeenDoctor => "Seen doctor",
		}
	}

	/// Rows in this state carry the orange still-in-progress marker.
	#[must_use]
	pub fn shows_pending_marker(self) -> bool {
		self != Self::SeenDoctor
	}
}

impl fmt::Display for AppointmentStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A single entry in the appointment list.
///
/// Only `id` is unique. Patient names and ids may repeat across records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
	pub id: u32,
	pub patient_name: String,
	pub patient_id: String,
	pub gender: Gender,
	pub age: String,
	pub clinic: String,
	#[serde(default)]
	pub clinic_icon: String,
	pub wallet_balance: u64,
	pub time: String,
	pub date: String,
	pub status: AppointmentStatus,
	#[serde(default)]
	pub is_new: bool,
}

impl AppointmentRecord {
	/// Lowercased copies of every field the search filter inspects.
	pub(crate) fn searchable_fields(&self) -> [String; 6] {
		[
			self.patient_name.to_lowercase(),
			self.patient_id.to_lowercase(),
			self.clinic.to_lowercase(),
			self.status.as_str().to_lowercase(),
			self.gender.as_str().to_lowercase(),
			self.age.to_lowercase(),
		]
	}

	/// Fields offered as autocomplete candidates, in the order they are scanned.
	pub(crate) fn suggestion_fields(&self) -> [&str; 3] {
		[&self.patient_name, &self.patient_id, &self.clinic]
	}

	/// Wallet balance grouped with thousands separators, e.g. `230,500`.
	#[must_use]
	pub fn formatted_balance(&self) -> String {
		group_thousands(self.wallet_balance)
	}
}

fn group_thousands(value: u64) -> String {
	let digits = value.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (idx, ch) in digits.chars().enumerate() {
		if idx > 0 && (digits.len() - idx) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	out
}
