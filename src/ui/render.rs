use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

use super::App;
use super::components::{
	HeaderContext, InputContext, OverlayContext, PendingState, PickerContext, PickerOption, TableContext,
	ToolbarContext, render_empty_state, render_header, render_input, render_overlay, render_picker, render_table,
	render_toolbar,
};
use super::state::Popup;
use crate::pipeline::{self, SortCriterion, sort_label};

const OVERLAY_MAX_WIDTH: u16 = 60;
const LOG_PANE_HEIGHT: u16 = 10;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
			])
			.split(frame.area());

		render_header(
			frame,
			HeaderContext {
				clinic: self.clinic.label(),
				clock: &self.clock,
				area: layout[0],
				theme: &self.theme,
			},
		);

		let body = layout[4].inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let input_area = layout[1].inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		render_input(
			frame,
			InputContext {
				search_input: &self.search_input,
				area: input_area,
				theme: &self.theme,
			},
			PendingState {
				pending: self.is_search_pending(),
				throbber_state: &self.throbber_state,
			},
		);

		let count = self.count_label();
		let toolbar_area = layout[3].inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		render_toolbar(
			frame,
			ToolbarContext {
				title: &self.title,
				clinic: self.clinic.label(),
				sort: sort_label(self.sort),
				count: &count,
				area: toolbar_area,
				theme: &self.theme,
			},
		);

		let (table_area, log_area) = self.split_logs(body);
		self.render_results(frame, table_area);
		if let Some(log_area) = log_area {
			self.log_pane.render(frame, log_area, &self.theme);
		}

		let below_input = Rect {
			x: input_area.x,
			y: input_area.bottom(),
			width: input_area.width.min(OVERLAY_MAX_WIDTH),
			height: frame.area().bottom().saturating_sub(input_area.bottom()),
		};
		let below_toolbar = Rect {
			y: toolbar_area.bottom(),
			height: frame.area().bottom().saturating_sub(toolbar_area.bottom()),
			..toolbar_area
		};
		self.render_popup(frame, below_input, below_toolbar);
	}

	fn split_logs(&self, area: Rect) -> (Rect, Option<Rect>) {
		if !self.show_logs || area.height <= LOG_PANE_HEIGHT + 3 {
			return (area, None);
		}
		let split = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Min(3), Constraint::Length(LOG_PANE_HEIGHT)])
			.split(area);
		(split[0], Some(split[1]))
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		let records = pipeline::resolve(self.store.appointments(), &self.rows);
		render_table(
			frame,
			&mut self.table_state,
			TableContext {
				area,
				records: &records,
				query: self.debouncer.settled(),
				expanded: &self.expanded,
				theme: &self.theme,
			},
		);

		if let Some(empty) = self.empty_state() {
			render_empty_state(frame, area, &empty, &self.theme);
		}
	}

	fn render_popup(&self, frame: &mut Frame, below_input: Rect, below_toolbar: Rect) {
		match self.popup {
			Some(Popup::Suggestions { selected }) => {
				let overlay = self.overlay();
				render_overlay(
					frame,
					OverlayContext {
						overlay: &overlay,
						selected,
						area: below_input,
						theme: &self.theme,
					},
				);
			}
			Some(Popup::Clinics { selected }) => {
				let options: Vec<PickerOption> = self
					.clinic_options()
					.into_iter()
					.map(|option| PickerOption {
						active: option == self.clinic,
						label: option.label().to_string(),
						group: None,
					})
					.collect();
				render_picker(
					frame,
					PickerContext {
						title: "Clinic",
						options: &options,
						selected,
						area: below_toolbar,
						theme: &self.theme,
					},
				);
			}
			Some(Popup::Sort { selected }) => {
				let options: Vec<PickerOption> = SortCriterion::ALL
					.into_iter()
					.map(|criterion| PickerOption {
						label: criterion.label().to_string(),
						group: Some(criterion.category()),
						active: Some(criterion) == self.sort,
					})
					.collect();
				render_picker(
					frame,
					PickerContext {
						title: "Sort by",
						options: &options,
						selected,
						area: below_toolbar,
						theme: &self.theme,
					},
				);
			}
			None => {}
		}
	}
}
