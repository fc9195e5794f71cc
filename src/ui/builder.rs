use std::time::Duration;

use anyhow::Result;

use super::App;
use super::outcome::DashboardOutcome;
use super::theme::{self, Theme};
use crate::pipeline::SortCriterion;
use crate::records::{ClinicSelection, RecordStore};
use crate::suggestions::SuggestionEngine;

/// A small builder for configuring the interactive dashboard before running it.
pub struct Dashboard {
	store: RecordStore,
	engine: SuggestionEngine,
	title: Option<String>,
	initial_query: Option<String>,
	clinic: ClinicSelection,
	sort: Option<SortCriterion>,
	debounce: Option<Duration>,
	theme: Option<Theme>,
}

impl Dashboard {
	pub fn new(store: RecordStore, engine: SuggestionEngine) -> Self {
		Self {
			store,
			engine,
			title: None,
			initial_query: None,
			clinic: ClinicSelection::All,
			sort: None,
			debounce: None,
			theme: None,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = Some(title.into());
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	pub fn with_clinic(mut self, clinic: ClinicSelection) -> Self {
		self.clinic = clinic;
		self
	}

	pub fn with_sort(mut self, sort: Option<SortCriterion>) -> Self {
		self.sort = sort;
		self
	}

	pub fn with_debounce(mut self, delay: Duration) -> Self {
		self.debounce = Some(delay);
		self
	}

	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_theme(mut self, theme: Theme) -> Self {
		self.theme = Some(theme);
		self
	}

	/// Assemble the [`App`] without starting the terminal.
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.store, self.engine);
		if let Some(title) = self.title {
			app.set_title(title);
		}
		if let Some(delay) = self.debounce {
			app.set_debounce(delay);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_clinic(self.clinic);
		app.set_sort(self.sort);
		if let Some(query) = self.initial_query {
			app.set_query(query);
		}
		app
	}

	/// Run the interactive dashboard with the configured options.
	pub fn run(self) -> Result<DashboardOutcome> {
		let mut app = self.build();
		app.run()
	}
}
