//! Autocomplete suggestions and the persisted recent-search list.

mod history;
mod store;

pub use history::{HISTORY_LIMIT, SearchHistory};
pub use store::{HISTORY_KEY, HistoryStore, JsonFileStore, MemoryStore};

use crate::records::AppointmentRecord;

/// Maximum number of query-derived suggestions.
pub const SUGGESTION_LIMIT: usize = 5;

/// Fixed shortcuts offered while the query is empty.
pub const POPULAR_SEARCHES: [&str; 4] = ["Neurology", "Cardiology", "Processing", "Awaiting doctor"];

/// Autocomplete candidates for the raw query, first-seen order, deduplicated.
///
/// Patient names, patient ids and clinic names are scanned record by record.
pub fn suggestions(records: &[AppointmentRecord], raw_query: &str) -> Vec<String> {
	if raw_query.trim().is_empty() {
		return Vec::new();
	}
	let needle = raw_query.to_lowercase();

	let mut found: Vec<String> = Vec::with_capacity(SUGGESTION_LIMIT);
	for record in records {
		for field in record.suggestion_fields() {
			if field.to_lowercase().contains(&needle) && !found.iter().any(|seen| seen == field) {
				found.push(field.to_string());
			}
		}
	}
	found.truncate(SUGGESTION_LIMIT);
	found
}

/// One selectable line in the search overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEntry {
	Suggestion(String),
	Recent(String),
	Popular(&'static str),
}

impl OverlayEntry {
	#[must_use]
	pub fn text(&self) -> &str {
		match self {
			Self::Suggestion(text) | Self::Recent(text) => text.as_str(),
			Self::Popular(text) => text,
		}
	}
}

/// What the overlay shows for a given raw query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
	pub query: String,
	pub entries: Vec<OverlayEntry>,
}

impl Overlay {
	/// Something was typed and it produced no suggestions.
	#[must_use]
	pub fn has_no_matches(&self) -> bool {
		!self.query.is_empty() && self.entries.is_empty()
	}

	pub fn suggestions(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().filter_map(|entry| match entry {
			OverlayEntry::Suggestion(text) => Some(text.as_str()),
			_ => None,
		})
	}

	pub fn recent(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().filter_map(|entry| match entry {
			OverlayEntry::Recent(text) => Some(text.as_str()),
			_ => None,
		})
	}

	pub fn popular(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().filter_map(|entry| match entry {
			OverlayEntry::Popular(text) => Some(*text),
			_ => None,
		})
	}
}

/// Builds overlay contents and applies the history side effects of picking
/// an entry.
pub struct SuggestionEngine {
	history: SearchHistory,
}

impl SuggestionEngine {
	pub fn new(history: SearchHistory) -> Self {
		Self { history }
	}

	/// Overlay contents for the raw, undebounced query.
	///
	/// Recent and popular entries only appear while the input is completely
	/// empty. Whitespace alone yields the no-suggestions state.
	pub fn overlay(&self, records: &[AppointmentRecord], raw_query: &str) -> Overlay {
		let entries = if raw_query.is_empty() {
			self.history
				.entries()
				.iter()
				.cloned()
				.map(OverlayEntry::Recent)
				.chain(POPULAR_SEARCHES.into_iter().map(OverlayEntry::Popular))
				.collect()
		} else {
			suggestions(records, raw_query)
				.into_iter()
				.map(OverlayEntry::Suggestion)
				.collect()
		};
		Overlay {
			query: raw_query.to_string(),
			entries,
		}
	}

	/// Pick an entry and return the query it stands for. Suggestions and
	/// popular searches are recorded in the history; re-running a recent
	/// search leaves the list as it was.
	pub fn accept(&mut self, entry: &OverlayEntry) -> String {
		match entry {
			OverlayEntry::Suggestion(text) => self.history.accept(text),
			OverlayEntry::Popular(text) => self.history.accept(text),
			OverlayEntry::Recent(_) => {}
		}
		entry.text().to_string()
	}

	pub fn remove_recent(&mut self, query: &str) {
		self.history.remove(query);
	}

	#[must_use]
	pub fn history(&self) -> &SearchHistory {
		&self.history
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::records::fixtures;

	fn engine_with(entries: &[&str]) -> (SuggestionEngine, MemoryStore) {
		let store = MemoryStore::with_entries(entries.iter().copied());
		let history = SearchHistory::load(Box::new(store.clone()));
		(SuggestionEngine::new(history), store)
	}

	#[test]
	fn empty_query_has_no_suggestions() {
		let records = fixtures::appointments();
		assert!(suggestions(&records, "").is_empty());
		assert!(suggestions(&records, "  ").is_empty());
	}

	#[test]
	fn suggestions_are_deduplicated_in_first_seen_order() {
		let records = fixtures::appointments();
		let found = suggestions(&records, "chinwe");
		assert_eq!(
			found,
			vec![
				"Chinwe Azikiwe",
				"Chinwe Azikiwe 2",
				"Chinwe Azikiwe 3",
				"Chinwe Azikiwe 4",
				"Chinwe Azikiwe 5",
			]
		);

		let clinics = suggestions(&records, "EMERG");
		assert_eq!(clinics, vec!["Accident & Emergency"]);
	}

	#[test]
	fn suggestions_are_capped_and_scan_fields_per_record() {
		let records = fixtures::appointments();
		let found = suggestions(&records, "a");
		assert_eq!(found.len(), SUGGESTION_LIMIT);
		assert_eq!(found[0], "Akpopodion Endurance");
		assert_eq!(found[1], "Boluwatife Olusola");
		// clinic names are scanned between records
		assert_eq!(found[2], "Ear, Nose & Throat");
		assert_eq!(found[3], "Arlie Mertz");
	}

	#[test]
	fn suggestions_only_consider_name_id_and_clinic() {
		let records = fixtures::appointments();
		assert!(suggestions(&records, "processing").is_empty());
		assert_eq!(suggestions(&records, "hosp1234"), vec!["HOSP12345789"]);
	}

	#[test]
	fn idle_overlay_lists_only_popular_searches_without_history() {
		let records = fixtures::appointments();
		let (engine, _) = engine_with(&[]);
		let overlay = engine.overlay(&records, "");
		assert_eq!(overlay.suggestions().count(), 0);
		assert_eq!(overlay.recent().count(), 0);
		assert_eq!(overlay.popular().collect::<Vec<_>>(), POPULAR_SEARCHES);
		assert!(!overlay.has_no_matches());
	}

	#[test]
	fn idle_overlay_lists_recent_before_popular() {
		let records = fixtures::appointments();
		let (engine, _) = engine_with(&["HOSP12345789"]);
		let overlay = engine.overlay(&records, "");
		assert_eq!(
			overlay.entries.first(),
			Some(&OverlayEntry::Recent("HOSP12345789".into()))
		);
		assert_eq!(overlay.entries.len(), 1 + POPULAR_SEARCHES.len());
	}

	#[test]
	fn whitespace_query_reports_no_suggestions_instead_of_shortcuts() {
		let records = fixtures::appointments();
		let (engine, _) = engine_with(&["Neurology"]);
		let overlay = engine.overlay(&records, "  ");
		assert!(overlay.entries.is_empty());
		assert_eq!(overlay.popular().count(), 0);
		assert!(overlay.has_no_matches());
	}

	#[test]
	fn unmatched_query_is_reported() {
		let records = fixtures::appointments();
		let (engine, _) = engine_with(&["Neurology"]);
		let overlay = engine.overlay(&records, "zzz");
		assert!(overlay.has_no_matches());
		assert_eq!(overlay.recent().count(), 0);
	}

	#[test]
	fn accepting_entries_updates_history() {
		let (mut engine, store) = engine_with(&["Neurology"]);

		let query = engine.accept(&OverlayEntry::Suggestion("Arlie Mertz".into()));
		assert_eq!(query, "Arlie Mertz");
		assert_eq!(store.snapshot(), vec!["Arlie Mertz", "Neurology"]);

		engine.accept(&OverlayEntry::Popular("Cardiology"));
		assert_eq!(store.snapshot(), vec!["Cardiology", "Arlie Mertz", "Neurology"]);

		let query = engine.accept(&OverlayEntry::Recent("Neurology".into()));
		assert_eq!(query, "Neurology");
		assert_eq!(store.snapshot(), vec!["Cardiology", "Arlie Mertz", "Neurology"]);

		engine.remove_recent("Arlie Mertz");
		assert_eq!(engine.history().entries(), ["Cardiology", "Neurology"]);
	}
}
