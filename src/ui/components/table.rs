use std::collections::HashSet;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table, TableState};

use crate::records::AppointmentRecord;
use crate::ui::highlight::highlight_line;
use crate::ui::state::EmptyState;
use crate::ui::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const PENDING_MARKER: &str = "▌";
const TABLE_COLUMN_SPACING: u16 = 1;
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

const HEADERS: [&str; 7] = [
	"",
	"#",
	"PATIENT INFORMATION",
	"CLINIC",
	"WALLET BAL. (₦)",
	"TIME/DATE",
	"STATUS",
];

const WIDTHS: [Constraint; 7] = [
	Constraint::Length(2),
	Constraint::Length(3),
	Constraint::Fill(3),
	Constraint::Fill(2),
	Constraint::Length(15),
	Constraint::Length(11),
	Constraint::Length(20),
];

/// Argument bundle describing what the appointment table shows.
pub(crate) struct TableContext<'a> {
	pub area: Rect,
	pub records: &'a [&'a AppointmentRecord],
	/// Settled query whose matches are highlighted.
	pub query: &'a str,
	pub expanded: &'a HashSet<u32>,
	pub theme: &'a Theme,
}

pub(crate) fn render_table(frame: &mut Frame, table_state: &mut TableState, context: TableContext<'_>) {
	let TableContext {
		area,
		records,
		query,
		expanded,
		theme,
	} = context;

	let header = Row::new(HEADERS.into_iter().map(Cell::from))
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1);

	let rows = records.iter().enumerate().map(|(position, record)| {
		build_row(position, record, query, expanded.contains(&record.id), theme)
	});

	let table = Table::new(rows, WIDTHS)
		.header(header)
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::WhenSelected)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, area, table_state);

	render_header_separator(frame, area, theme);
}

fn build_row<'a>(
	position: usize,
	record: &AppointmentRecord,
	query: &str,
	expanded: bool,
	theme: &Theme,
) -> Row<'a> {
	let highlight = theme.highlight_style();
	let plain = Style::default();
	let muted = theme.empty_style();

	let marker = if record.status.shows_pending_marker() {
		Span::styled(PENDING_MARKER, theme.badge_style())
	} else {
		Span::raw(" ")
	};
	let chevron = if expanded { "▾" } else { "▸" };

	let mut name_line = highlight_line(&record.patient_name, query, None, plain.add_modifier(Modifier::BOLD), highlight);
	if record.is_new {
		name_line.spans.push(Span::raw(" "));
		name_line.spans.push(Span::styled("NEW", theme.badge_style()));
	}
	let mut id_line = highlight_line(&record.patient_id, query, None, muted, highlight);
	id_line
		.spans
		.push(Span::styled(format!(" • {} • {}", record.gender, record.age), muted));
	let patient = vec![name_line, id_line];

	let mut clinic = highlight_line(&record.clinic, query, None, plain, highlight);
	if !record.clinic_icon.is_empty() {
		clinic.spans.insert(0, Span::raw(format!("{} ", record.clinic_icon)));
	}

	let status_style = theme.status_style(record.status);
	let row = Row::new(vec![
		Cell::from(Line::from(vec![marker, Span::raw(chevron)])),
		Cell::from((position + 1).to_string()),
		Cell::from(Text::from(patient)),
		Cell::from(clinic),
		Cell::from(record.formatted_balance()),
		Cell::from(Text::from(vec![
			Line::from(Span::styled(record.time.clone(), status_style)),
			Line::from(Span::styled(record.date.clone(), muted)),
		])),
		Cell::from(Span::styled(format!(" {} ", record.status), status_style.add_modifier(Modifier::REVERSED))),
	])
	.height(2);

	if expanded { row.style(theme.expanded_style()) } else { row }
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	if area.height <= 1 || area.width == 0 {
		return;
	}
	let sep_rect = Rect {
		x: area.x,
		y: area.y + 1,
		width: area.width,
		height: 1,
	};
	let width = usize::from(area.width);
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		frame.render_widget(Paragraph::new(" ".repeat(width)).style(base_style), sep_rect);
		return;
	}

	let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Line::from(spans)), sep_rect);
}

/// Replace the table body with a centred explanation.
pub(crate) fn render_empty_state(frame: &mut Frame, area: Rect, state: &EmptyState, theme: &Theme) {
	if area.height <= HEADER_AND_DIVIDER_HEIGHT {
		return;
	}
	let message_area = Rect {
		y: area.y + HEADER_AND_DIVIDER_HEIGHT,
		height: area.height - HEADER_AND_DIVIDER_HEIGHT,
		..area
	};

	let mut lines = vec![
		Line::from(""),
		Line::from(Span::styled(state.title, Style::default().add_modifier(Modifier::BOLD))),
		Line::from(Span::styled(state.detail.clone(), theme.empty_style())),
	];
	if let Some(hint) = state.hint {
		lines.push(Line::from(Span::styled(hint, theme.empty_style())));
	}

	frame.render_widget(Clear, message_area);
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), message_area);
}
