use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ui::clock::Clock;
use crate::ui::theme::Theme;

const BRAND: &str = "medboard";

pub(crate) struct HeaderContext<'a> {
	pub clinic: &'a str,
	pub clock: &'a Clock,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Top bar with the clinic on the left and the clock on the right.
pub(crate) fn render_header(frame: &mut Frame, header: HeaderContext<'_>) {
	let HeaderContext {
		clinic,
		clock,
		area,
		theme,
	} = header;
	if area.height == 0 {
		return;
	}

	let style = theme.header_style();
	let left = Line::from(vec![
		Span::styled(format!(" {BRAND} "), style.add_modifier(Modifier::BOLD)),
		Span::styled(format!("· {clinic}"), style),
	]);
	frame.render_widget(Paragraph::new(left).style(style), area);

	let right = Line::from(vec![
		Span::styled(clock.date_label(), style),
		Span::styled("  ", style),
		Span::styled(clock.time_label(), style.add_modifier(Modifier::BOLD)),
		Span::styled(" ", Style::default().bg(theme.header_bg())),
	]);
	let right_width = right.width() as u16;
	if right_width >= area.width {
		return;
	}
	let start_x = area.right().saturating_sub(right_width);
	frame
		.buffer_mut()
		.set_line(start_x, area.top(), &right, right_width);
}
