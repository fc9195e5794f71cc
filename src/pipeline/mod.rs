//! The search → clinic → sort pipeline that decides which appointments the
//! table shows.
//!
//! Every stage works on indices into the record slice so the table can keep
//! referring to the shared, immutable store.

mod clinic;
mod debounce;
mod search;
mod sort;

pub use clinic::clinic_filter;
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use search::search_filter;
pub use sort::{SortCriterion, UNSORTED_LABEL, apply_sort, locale_cmp, sort_label};

use crate::records::{AppointmentRecord, ClinicSelection};

/// Everything the table view is filtered and ordered by.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
	/// The debounced search text.
	pub query: String,
	pub clinic: ClinicSelection,
	pub sort: Option<SortCriterion>,
}

impl Criteria {
	pub fn new(query: impl Into<String>, clinic: ClinicSelection, sort: Option<SortCriterion>) -> Self {
		Self {
			query: query.into(),
			clinic,
			sort,
		}
	}

	/// Whether the search stage will narrow the input.
	#[must_use]
	pub fn has_query(&self) -> bool {
		!self.query.trim().is_empty()
	}
}

/// Run all stages and return the indices to display, in display order.
pub fn run(records: &[AppointmentRecord], criteria: &Criteria) -> Vec<usize> {
	let searched = search_filter(records, &criteria.query);
	let filtered = clinic_filter(records, searched, &criteria.clinic);
	let displayed = apply_sort(records, filtered, criteria.sort);
	log::debug!(
		"pipeline: query={:?} clinic={} sort={} -> {} of {} rows",
		criteria.query,
		criteria.clinic,
		sort_label(criteria.sort),
		displayed.len(),
		records.len()
	);
	displayed
}

/// Borrow the records behind a list of indices.
pub fn resolve<'a>(records: &'a [AppointmentRecord], indices: &[usize]) -> Vec<&'a AppointmentRecord> {
	indices.iter().filter_map(|&idx| records.get(idx)).collect()
}
