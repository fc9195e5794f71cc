use crate::records::AppointmentRecord;

/// Indices of the records matching `query`, in input order.
///
/// A blank query keeps every record. Otherwise the trimmed, lowercased query
/// must appear as a substring of at least one searchable field.
pub fn search_filter(records: &[AppointmentRecord], query: &str) -> Vec<usize> {
	let needle = query.trim().to_lowercase();
	if needle.is_empty() {
		return (0..records.len()).collect();
	}

	records
		.iter()
		.enumerate()
		.filter(|(_, record)| matches_query(record, &needle))
		.map(|(idx, _)| idx)
		.collect()
}

/// `needle` must already be trimmed and lowercased.
pub(crate) fn matches_query(record: &AppointmentRecord, needle: &str) -> bool {
	record
		.searchable_fields()
		.iter()
		.any(|field| field.contains(needle))
}
