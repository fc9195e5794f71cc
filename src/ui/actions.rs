use std::time::Instant;

use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::outcome::DashboardOutcome;
use super::state::Popup;
use crate::pipeline::SortCriterion;
use crate::suggestions::OverlayEntry;

impl<'a> App<'a> {
	/// Apply a key press at time `now`. Returns an outcome once the session ends.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<DashboardOutcome>> {
		if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
			return Ok(Some(self.outcome(false)));
		}
		if key.code == KeyCode::F(2) {
			self.show_logs = !self.show_logs;
			return Ok(None);
		}
		if self.show_logs && self.log_pane.handle_key(key) {
			return Ok(None);
		}

		let popup = self.popup;
		match popup {
			Some(Popup::Suggestions { selected }) => self.handle_suggestion_key(key, selected, now),
			Some(Popup::Clinics { selected }) => self.handle_clinic_key(key, selected),
			Some(Popup::Sort { selected }) => self.handle_sort_key(key, selected),
			None => return self.handle_table_key(key, now),
		}
		Ok(None)
	}

	fn handle_table_key(&mut self, key: KeyEvent, now: Instant) -> Result<Option<DashboardOutcome>> {
		match key.code {
			KeyCode::Esc => {
				if self.search_input.text().is_empty() {
					return Ok(Some(self.outcome(false)));
				}
				self.set_query("");
			}
			KeyCode::Enter => {
				self.flush_query();
				return Ok(Some(self.outcome(true)));
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			KeyCode::Tab => {
				self.toggle_expanded();
			}
			KeyCode::F(3) => self.open_clinic_picker(),
			KeyCode::F(4) => self.open_sort_picker(),
			KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
				self.popup = Some(Popup::Suggestions { selected: None });
			}
			_ => self.edit_query(key, now),
		}
		Ok(None)
	}

	fn handle_suggestion_key(&mut self, key: KeyEvent, selected: Option<usize>, now: Instant) {
		let overlay = self.overlay();
		let len = overlay.entries.len();
		match key.code {
			KeyCode::Esc => self.popup = None,
			KeyCode::Up => {
				let selected = match selected {
					None | Some(0) => None,
					Some(index) => Some(index - 1),
				};
				self.popup = Some(Popup::Suggestions { selected });
			}
			KeyCode::Down => {
				let selected = match selected {
					_ if len == 0 => None,
					None => Some(0),
					Some(index) => Some((index + 1).min(len - 1)),
				};
				self.popup = Some(Popup::Suggestions { selected });
			}
			KeyCode::Enter => {
				match selected.and_then(|index| overlay.entries.get(index)) {
					Some(entry) => {
						let query = self.engine.accept(entry);
						self.set_query(query);
					}
					None => self.flush_query(),
				}
				self.popup = None;
			}
			KeyCode::Delete => {
				if let Some(OverlayEntry::Recent(text)) = selected.and_then(|index| overlay.entries.get(index)) {
					self.engine.remove_recent(text);
					let remaining = self.overlay().entries.len();
					let selected = selected.filter(|_| remaining > 0).map(|index| index.min(remaining - 1));
					self.popup = Some(Popup::Suggestions { selected });
				}
			}
			KeyCode::F(3) => self.open_clinic_picker(),
			KeyCode::F(4) => self.open_sort_picker(),
			_ => self.edit_query(key, now),
		}
	}

	fn handle_clinic_key(&mut self, key: KeyEvent, selected: usize) {
		let options = self.clinic_options();
		match key.code {
			KeyCode::Esc => self.popup = None,
			KeyCode::Up => {
				self.popup = Some(Popup::Clinics {
					selected: selected.saturating_sub(1),
				});
			}
			KeyCode::Down => {
				self.popup = Some(Popup::Clinics {
					selected: (selected + 1).min(options.len().saturating_sub(1)),
				});
			}
			KeyCode::Enter => {
				if let Some(clinic) = options.into_iter().nth(selected) {
					log::debug!("clinic filter set to {clinic}");
					self.set_clinic(clinic);
				}
				self.popup = None;
			}
			_ => {}
		}
	}

	fn handle_sort_key(&mut self, key: KeyEvent, selected: usize) {
		match key.code {
			KeyCode::Esc => self.popup = None,
			KeyCode::Up => {
				self.popup = Some(Popup::Sort {
					selected: selected.saturating_sub(1),
				});
			}
			KeyCode::Down => {
				self.popup = Some(Popup::Sort {
					selected: (selected + 1).min(SortCriterion::ALL.len() - 1),
				});
			}
			KeyCode::Enter => {
				let chosen = SortCriterion::ALL.get(selected).copied();
				// choosing the active option again clears it
				let sort = if chosen == self.sort { None } else { chosen };
				self.set_sort(sort);
				self.popup = None;
			}
			KeyCode::Delete | KeyCode::Backspace => {
				self.set_sort(None);
				self.popup = None;
			}
			_ => {}
		}
	}

	fn edit_query(&mut self, key: KeyEvent, now: Instant) {
		if self.search_input.input(key) {
			self.query_edited(now);
			self.popup = Some(Popup::Suggestions { selected: None });
		}
	}

	fn open_clinic_picker(&mut self) {
		let selected = self
			.clinic_options()
			.iter()
			.position(|option| *option == self.clinic)
			.unwrap_or(0);
		self.popup = Some(Popup::Clinics { selected });
	}

	fn open_sort_picker(&mut self) {
		let selected = self
			.sort
			.and_then(|sort| SortCriterion::ALL.iter().position(|option| *option == sort))
			.unwrap_or(0);
		self.popup = Some(Popup::Sort { selected });
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.rows.len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}

	fn outcome(&self, accepted: bool) -> DashboardOutcome {
		DashboardOutcome {
			accepted,
			query: self.search_input.text().to_string(),
			selection: if accepted {
				self.current_selection().cloned()
			} else {
				None
			},
		}
	}
}

#[cfg(test)]
mod tests;
