use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::ui::input::SearchInput;
use crate::ui::theme::Theme;

const PROMPT: &str = "Search";

/// Argument bundle for rendering the search input row.
pub(crate) struct InputContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Whether a debounced search is still waiting to run.
pub(crate) struct PendingState<'a> {
	pub pending: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the prompt, the text area and the pending indicator.
pub(crate) fn render_input(frame: &mut Frame, input: InputContext<'_>, pending: PendingState<'_>) {
	let InputContext {
		search_input,
		area,
		theme,
	} = input;

	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(prompt_width(PROMPT)), Constraint::Min(1)])
		.split(area);

	let prompt = Paragraph::new(format!("{PROMPT} > ")).style(theme.prompt_style());
	frame.render_widget(prompt, horizontal[0]);

	let input_area = horizontal[1];
	search_input.render(frame, input_area);
	render_pending(frame, input_area, pending, theme);
}

fn prompt_width(prompt: &str) -> u16 {
	if prompt.is_empty() {
		0
	} else {
		prompt.width() as u16 + 3
	}
}

fn render_pending(frame: &mut Frame, area: Rect, pending: PendingState<'_>, theme: &Theme) {
	if !pending.pending || area.width == 0 || area.height == 0 {
		return;
	}

	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let line = Line::from(vec![
		spinner.to_symbol_span(pending.throbber_state),
		Span::styled("searching", muted_style),
	]);

	let line_width = line.width() as u16;
	if line_width == 0 || line_width >= area.width {
		return;
	}
	let start_x = area.right().saturating_sub(line_width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &line, line_width);
}

/// Argument bundle for the clinic/sort/count row beneath the input.
pub(crate) struct ToolbarContext<'a> {
	pub title: &'a str,
	pub clinic: &'a str,
	pub sort: &'a str,
	pub count: &'a str,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the section title, the picker buttons and the count label.
pub(crate) fn render_toolbar(frame: &mut Frame, toolbar: ToolbarContext<'_>) {
	let ToolbarContext {
		title,
		clinic,
		sort,
		count,
		area,
		theme,
	} = toolbar;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let bold = theme.header_style().add_modifier(Modifier::BOLD);
	let muted = theme.empty_style();
	let left = Line::from(vec![
		Span::styled(format!(" {title} "), bold),
		Span::raw("  "),
		Span::styled(format!("{clinic} ▾"), theme.prompt_style()),
		Span::styled(" F3", muted),
		Span::raw("   "),
		Span::styled(format!("⇅ {sort}"), theme.prompt_style()),
		Span::styled(" F4", muted),
	]);
	frame.render_widget(Paragraph::new(left), area);

	let count_line = Line::from(Span::styled(count.to_string(), muted));
	let count_width = count_line.width() as u16;
	if count_width < area.width {
		let start_x = area.right().saturating_sub(count_width);
		frame
			.buffer_mut()
			.set_line(start_x, area.top(), &count_line, count_width);
	}
}
