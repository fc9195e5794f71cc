use std::collections::HashSet;
use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::clock::Clock;
use super::components::LogPane;
use super::input::SearchInput;
use super::theme::Theme;
use crate::pipeline::{self, Criteria, DEFAULT_DEBOUNCE, Debouncer, SortCriterion};
use crate::records::{AppointmentRecord, ClinicSelection, RecordStore};
use crate::suggestions::{Overlay, SuggestionEngine};

/// Number of rows the count label claims per page.
pub(crate) const PAGE_SIZE: usize = 20;

pub(crate) const DEFAULT_TITLE: &str = "Appointments";

/// Floating panel currently capturing navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Popup {
	Suggestions { selected: Option<usize> },
	Clinics { selected: usize },
	Sort { selected: usize },
}

/// Text shown in place of the table when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EmptyState {
	pub title: &'static str,
	pub detail: String,
	pub hint: Option<&'static str>,
}

pub struct App<'a> {
	pub(crate) store: RecordStore,
	pub search_input: SearchInput<'a>,
	pub(crate) debouncer: Debouncer<String>,
	pub(crate) clinic: ClinicSelection,
	pub(crate) sort: Option<SortCriterion>,
	pub(crate) rows: Vec<usize>,
	pub table_state: TableState,
	pub(crate) popup: Option<Popup>,
	pub(crate) engine: SuggestionEngine,
	pub(crate) expanded: HashSet<u32>,
	pub(crate) title: String,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) log_pane: LogPane,
	pub(crate) show_logs: bool,
	pub(crate) clock: Clock,
	recomputations: usize,
}

impl<'a> App<'a> {
	pub fn new(store: RecordStore, engine: SuggestionEngine) -> Self {
		let mut app = Self {
			store,
			search_input: SearchInput::new(""),
			debouncer: Debouncer::new(String::new(), DEFAULT_DEBOUNCE),
			clinic: ClinicSelection::All,
			sort: None,
			rows: Vec::new(),
			table_state: TableState::default(),
			popup: None,
			engine,
			expanded: HashSet::new(),
			title: DEFAULT_TITLE.to_string(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			log_pane: LogPane::new(),
			show_logs: false,
			clock: Clock::new(),
			recomputations: 0,
		};
		app.refresh_rows();
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.title = title.into();
	}

	/// Change the quiet period, keeping the settled query.
	pub fn set_debounce(&mut self, delay: Duration) {
		let settled = self.debouncer.settled().clone();
		self.debouncer = Debouncer::new(settled, delay);
	}

	/// Replace the query and apply it without waiting for the debounce window.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let query = query.into();
		self.search_input.set_text(query.clone());
		if self.debouncer.reset(query) {
			self.refresh_rows();
		}
	}

	pub fn set_clinic(&mut self, clinic: ClinicSelection) {
		if self.clinic != clinic {
			self.clinic = clinic;
			self.refresh_rows();
		}
	}

	pub fn set_sort(&mut self, sort: Option<SortCriterion>) {
		if self.sort != sort {
			self.sort = sort;
			self.refresh_rows();
		}
	}

	#[must_use]
	pub fn records(&self) -> &[AppointmentRecord] {
		self.store.appointments()
	}

	/// The filters the table currently reflects.
	pub(crate) fn criteria(&self) -> Criteria {
		Criteria::new(self.debouncer.settled().clone(), self.clinic.clone(), self.sort)
	}

	/// Re-run the pipeline against the settled query.
	pub(crate) fn refresh_rows(&mut self) {
		self.rows = pipeline::run(self.store.appointments(), &self.criteria());
		self.recomputations += 1;
		self.ensure_selection();
	}

	/// How many times the pipeline has been run.
	#[must_use]
	pub fn recomputations(&self) -> usize {
		self.recomputations
	}

	/// Feed the raw input into the debouncer after an edit.
	pub(crate) fn query_edited(&mut self, now: Instant) {
		self.debouncer.push(self.search_input.text().to_string(), now);
	}

	/// Settle the debounced query if its window has elapsed.
	pub fn tick(&mut self, now: Instant) {
		if self.debouncer.poll(now) {
			self.refresh_rows();
		}
	}

	/// Apply the raw query immediately.
	pub(crate) fn flush_query(&mut self) {
		if self.debouncer.flush() {
			self.refresh_rows();
		}
	}

	#[must_use]
	pub fn is_search_pending(&self) -> bool {
		self.debouncer.is_pending()
	}

	#[must_use]
	pub fn settled_query(&self) -> &str {
		self.debouncer.settled()
	}

	pub(crate) fn displayed(&self) -> Vec<&AppointmentRecord> {
		pipeline::resolve(self.store.appointments(), &self.rows)
	}

	#[must_use]
	pub fn displayed_ids(&self) -> Vec<u32> {
		self.displayed().iter().map(|record| record.id).collect()
	}

	pub(crate) fn ensure_selection(&mut self) {
		if self.rows.is_empty() {
			self.table_state.select(None);
		} else if self.table_state.selected().is_none() {
			self.table_state.select(Some(0));
		} else if let Some(selected) = self.table_state.selected()
			&& selected >= self.rows.len()
		{
			self.table_state.select(Some(self.rows.len() - 1));
		}
	}

	pub(crate) fn current_selection(&self) -> Option<&AppointmentRecord> {
		let selected = self.table_state.selected()?;
		let index = *self.rows.get(selected)?;
		self.store.appointments().get(index)
	}

	/// Expand or collapse the selected row. Returns `false` with no selection.
	pub(crate) fn toggle_expanded(&mut self) -> bool {
		let Some(id) = self.current_selection().map(|record| record.id) else {
			return false;
		};
		if !self.expanded.remove(&id) {
			self.expanded.insert(id);
		}
		true
	}

	#[must_use]
	pub(crate) fn is_expanded(&self, record: &AppointmentRecord) -> bool {
		self.expanded.contains(&record.id)
	}

	/// `1 - 12 of 12` style pager text.
	pub(crate) fn count_label(&self) -> String {
		count_label(self.rows.len())
	}

	pub(crate) fn empty_state(&self) -> Option<EmptyState> {
		if !self.rows.is_empty() {
			return None;
		}
		let query = self.debouncer.settled().trim();
		let state = if !query.is_empty() {
			EmptyState {
				title: "No search results found",
				detail: format!("No results for \"{query}\""),
				hint: Some("Try a different search term"),
			}
		} else if !self.clinic.is_all() {
			EmptyState {
				title: "No appointments found",
				detail: format!("No appointments for {}", self.clinic),
				hint: None,
			}
		} else {
			EmptyState {
				title: "No appointments found",
				detail: "Try adjusting your filters".to_string(),
				hint: None,
			}
		};
		Some(state)
	}

	/// Overlay contents for what is typed right now.
	pub(crate) fn overlay(&self) -> Overlay {
		self.engine.overlay(self.store.appointments(), self.search_input.text())
	}

	/// Labels offered by the clinic picker, sentinel first.
	pub(crate) fn clinic_options(&self) -> Vec<ClinicSelection> {
		std::iter::once(ClinicSelection::All)
			.chain(
				self.store
					.clinics()
					.iter()
					.map(|clinic| ClinicSelection::Named(clinic.name.clone())),
			)
			.collect()
	}
}

pub(crate) fn count_label(total: usize) -> String {
	if total == 0 {
		return "0 of 0".to_string();
	}
	format!("1 - {} of {}", total.min(PAGE_SIZE), total)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::records::AppointmentStatus;
	use crate::suggestions::{MemoryStore, SearchHistory};

	fn app() -> App<'static> {
		let history = SearchHistory::load(Box::new(MemoryStore::default()));
		App::new(RecordStore::builtin(), SuggestionEngine::new(history))
	}

	#[test]
	fn starts_with_every_record_selected_from_the_top() {
		let app = app();
		assert_eq!(app.rows.len(), 12);
		assert_eq!(app.table_state.selected(), Some(0));
		assert_eq!(app.count_label(), "1 - 12 of 12");
		assert!(app.empty_state().is_none());
	}

	#[test]
	fn count_label_caps_the_page() {
		assert_eq!(count_label(0), "0 of 0");
		assert_eq!(count_label(3), "1 - 3 of 3");
		assert_eq!(count_label(45), "1 - 20 of 45");
	}

	#[test]
	fn debounced_query_settles_once_per_window() {
		let mut app = app();
		let start = Instant::now();
		let baseline = app.recomputations();
		for (offset, ch) in ["n", "ne", "neu", "neur", "neuro"].into_iter().enumerate() {
			app.search_input.set_text(ch);
			app.query_edited(start + Duration::from_millis(offset as u64 * 50));
			app.tick(start + Duration::from_millis(offset as u64 * 50));
		}
		assert!(app.is_search_pending());
		assert_eq!(app.recomputations(), baseline);
		app.tick(start + Duration::from_millis(200 + 300));
		assert_eq!(app.recomputations(), baseline + 1);
		assert_eq!(app.displayed_ids(), vec![1, 3]);
	}

	#[test]
	fn repeated_identical_pushes_recompute_once() {
		let mut app = app();
		let start = Instant::now();
		let baseline = app.recomputations();
		app.search_input.set_text("male");
		for _ in 0..10 {
			app.query_edited(start);
		}
		app.tick(start + DEFAULT_DEBOUNCE);
		app.tick(start + DEFAULT_DEBOUNCE * 2);
		assert_eq!(app.recomputations(), baseline + 1);
	}

	#[test]
	fn empty_states_describe_the_active_filter() {
		let mut app = app();
		app.set_query("zzz");
		let state = app.empty_state().expect("empty");
		assert_eq!(state.title, "No search results found");
		assert_eq!(state.detail, "No results for \"zzz\"");
		assert_eq!(app.table_state.selected(), None);

		app.set_query("");
		app.set_clinic(ClinicSelection::Named("Cardiology".into()));
		let state = app.empty_state().expect("empty");
		assert_eq!(state.title, "No appointments found");
		assert_eq!(state.detail, "No appointments for Cardiology");
	}

	#[test]
	fn any_row_toggles_including_seen_doctor() {
		let mut app = app();
		app.set_clinic(ClinicSelection::Named("Accident & Emergency".into()));
		app.table_state.select(Some(0));
		assert!(app.toggle_expanded());
		let first = app.current_selection().expect("row").clone();
		assert!(app.is_expanded(&first));

		let last = app.rows.len() - 1;
		app.table_state.select(Some(last));
		let seen = app.current_selection().expect("row").clone();
		assert_eq!(seen.status, AppointmentStatus::SeenDoctor);
		assert!(app.toggle_expanded());
		assert!(app.is_expanded(&seen));
		assert!(app.toggle_expanded());
		assert!(!app.is_expanded(&seen));
	}

	#[test]
	fn toggling_needs_a_selected_row() {
		let mut app = app();
		app.set_query("xyz");
		assert!(!app.toggle_expanded());
		assert!(app.expanded.is_empty());
	}

	#[test]
	fn clinic_options_start_with_the_sentinel() {
		let app = app();
		let options = app.clinic_options();
		assert!(options[0].is_all());
		assert_eq!(options.len(), 1 + app.store.clinics().len());
	}
}
