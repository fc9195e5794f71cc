use std::time::Duration;

use anyhow::Result;
use medboard::pipeline::{self, Criteria};
use medboard::suggestions::{HistoryStore, JsonFileStore, MemoryStore, SearchHistory, SuggestionEngine};
use medboard::{
	AppointmentRecord, ClinicSelection, Dashboard, DashboardOutcome, RecordStore, SortCriterion, app_dirs,
};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive dashboard.
pub(crate) struct DashboardWorkflow {
	dashboard: Dashboard,
}

impl DashboardWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		let dashboard = DashboardFactory::build(config);
		Self { dashboard }
	}

	pub(crate) fn run(self) -> Result<DashboardOutcome> {
		self.dashboard.run()
	}
}

/// Run the pipeline once with the configured filters, without a terminal.
pub(crate) fn list(config: &ResolvedConfig) -> Vec<&AppointmentRecord> {
	let criteria = Criteria::new(config.initial_query.clone(), config.clinic.clone(), config.sort);
	let records = config.store.appointments();
	let rows = pipeline::run(records, &criteria);
	log::debug!("listing {} of {} appointments", rows.len(), records.len());
	pipeline::resolve(records, &rows)
}

/// Pick where recent searches live for this run.
fn history_store(enabled: bool) -> Box<dyn HistoryStore> {
	if !enabled {
		return Box::new(MemoryStore::default());
	}
	match app_dirs::get_data_dir() {
		Ok(dir) => Box::new(JsonFileStore::in_dir(dir)),
		Err(err) => {
			log::warn!("recent searches will not be saved: {err:#}");
			Box::new(MemoryStore::default())
		}
	}
}

/// Helper for translating resolved configuration into a configured `Dashboard`.
struct DashboardFactory {
	dashboard: Dashboard,
}

impl DashboardFactory {
	fn build(config: ResolvedConfig) -> Dashboard {
		let ResolvedConfig {
			data_file: _,
			store,
			title,
			initial_query,
			debounce_ms,
			theme,
			clinic,
			sort,
			history_enabled,
		} = config;

		Self::new(store, history_enabled)
			.with_title(title)
			.with_theme(theme)
			.with_debounce(debounce_ms)
			.with_filters(clinic, sort)
			.with_initial_query(initial_query)
			.finish()
	}

	fn new(store: RecordStore, history_enabled: bool) -> Self {
		let history = SearchHistory::load(history_store(history_enabled));
		let dashboard = Dashboard::new(store, SuggestionEngine::new(history));
		Self { dashboard }
	}

	fn with_title(mut self, title: Option<String>) -> Self {
		if let Some(title) = title {
			self.dashboard = self.dashboard.with_title(title);
		}
		self
	}

	fn with_theme(mut self, theme: Option<String>) -> Self {
		if let Some(theme) = theme {
			self.dashboard = self.dashboard.with_theme_name(&theme);
		}
		self
	}

	fn with_debounce(mut self, debounce_ms: u64) -> Self {
		self.dashboard = self.dashboard.with_debounce(Duration::from_millis(debounce_ms));
		self
	}

	fn with_filters(mut self, clinic: ClinicSelection, sort: Option<SortCriterion>) -> Self {
		self.dashboard = self.dashboard.with_clinic(clinic).with_sort(sort);
		self
	}

	fn with_initial_query(mut self, query: String) -> Self {
		if !query.is_empty() {
			self.dashboard = self.dashboard.with_initial_query(query);
		}
		self
	}

	fn finish(self) -> Dashboard {
		self.dashboard
	}
}
