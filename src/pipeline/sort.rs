use std::cmp::Ordering;
use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::records::{AppointmentRecord, Gender};

/// Label shown on the sort button when no criterion is selected.
pub const UNSORTED_LABEL: &str = "Sort by";

/// Options offered by the sort picker.
///
/// The gender entries restrict the table rather than reorder it. The picker
/// presents them alongside the orderings, so the behaviour is kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
	NameAscending,
	NameDescending,
	IdAscending,
	IdDescending,
	GenderMale,
	GenderFemale,
}

impl SortCriterion {
	pub const ALL: [Self; 6] = [
		Self::NameAscending,
		Self::NameDescending,
		Self::IdAscending,
		Self::IdDescending,
		Self::GenderMale,
		Self::GenderFemale,
	];

	/// Stable identifier used in configuration and on the command line.
	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::NameAscending => "patient-name-asc",
			Self::NameDescending => "patient-name-desc",
			Self::IdAscending => "patient-id-asc",
			Self::IdDescending => "patient-id-desc",
			Self::GenderMale => "gender-male",
			Self::GenderFemale => "gender-female",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::NameAscending => "Patient name: A-Z",
			Self::NameDescending => "Patient name: Z-A",
			Self::IdAscending => "Patient ID: Ascending",
			Self::IdDescending => "Patient ID: Descending",
			Self::GenderMale => "Gender: Male",
			Self::GenderFemale => "Gender: Female",
		}
	}

	/// Picker section heading for this option.
	#[must_use]
	pub fn category(self) -> &'static str {
		match self {
			Self::NameAscending | Self::NameDescending => "Patient name",
			Self::IdAscending | Self::IdDescending => "Patient ID",
			Self::GenderMale | Self::GenderFemale => "Gender",
		}
	}

	/// Look up a criterion by its [`id`](Self::id), ignoring case and
	/// surrounding whitespace.
	pub fn from_id(value: &str) -> Option<Self> {
		let wanted = value.trim().to_ascii_lowercase();
		Self::ALL.into_iter().find(|criterion| criterion.id() == wanted)
	}
}

impl fmt::Display for SortCriterion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Button label for an optional criterion.
#[must_use]
pub fn sort_label(criterion: Option<SortCriterion>) -> &'static str {
	criterion.map_or(UNSORTED_LABEL, SortCriterion::label)
}

/// Order or restrict `indices` according to `criterion`.
///
/// Sorting is stable, so records comparing equal keep their relative order.
pub fn apply_sort(
	records: &[AppointmentRecord],
	mut indices: Vec<usize>,
	criterion: Option<SortCriterion>,
) -> Vec<usize> {
	let Some(criterion) = criterion else {
		return indices;
	};

	let record = |idx: usize| &records[idx];
	match criterion {
		SortCriterion::NameAscending => {
			indices.sort_by(|&a, &b| locale_cmp(&record(a).patient_name, &record(b).patient_name));
		}
		SortCriterion::NameDescending => {
			indices.sort_by(|&a, &b| locale_cmp(&record(b).patient_name, &record(a).patient_name));
		}
		SortCriterion::IdAscending => {
			indices.sort_by(|&a, &b| locale_cmp(&record(a).patient_id, &record(b).patient_id));
		}
		SortCriterion::IdDescending => {
			indices.sort_by(|&a, &b| locale_cmp(&record(b).patient_id, &record(a).patient_id));
		}
		SortCriterion::GenderMale => indices.retain(|&idx| record(idx).gender == Gender::Male),
		SortCriterion::GenderFemale => indices.retain(|&idx| record(idx).gender == Gender::Female),
	}
	indices
}

/// Collation used for name and id ordering.
///
/// Base letters compare first with accents and case folded away. Ties fall
/// back to accents (unaccented first), then case (lowercase first), then
/// byte order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
	base_letters(a)
		.cmp(base_letters(b))
		.then_with(|| folded(a).cmp(folded(b)))
		.then_with(|| case_order(a, b))
		.then_with(|| a.cmp(b))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
	text.nfd()
		.filter(|&ch| !is_combining_mark(ch))
		.flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
	text.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
	for (left, right) in a.chars().zip(b.chars()) {
		if left == right {
			continue;
		}
		match (left.is_lowercase(), right.is_lowercase()) {
			(true, false) => return Ordering::Less,
			(false, true) => return Ordering::Greater,
			_ => {}
		}
	}
	Ordering::Equal
}
