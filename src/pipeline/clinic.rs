use crate::records::{AppointmentRecord, ClinicSelection};

/// Keep the indices whose record belongs to `selection`, preserving order.
///
/// Matching is exact string equality on the clinic name.
pub fn clinic_filter(
	records: &[AppointmentRecord],
	indices: Vec<usize>,
	selection: &ClinicSelection,
) -> Vec<usize> {
	let ClinicSelection::Named(name) = selection else {
		return indices;
	};

	indices
		.into_iter()
		.filter(|&idx| records.get(idx).is_some_and(|record| &record.clinic == name))
		.collect()
}
