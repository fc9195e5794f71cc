use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::suggestions::{Overlay, OverlayEntry};
use crate::ui::highlight::highlight_line;
use crate::ui::theme::Theme;

pub(crate) struct OverlayContext<'a> {
	pub overlay: &'a Overlay,
	pub selected: Option<usize>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render the suggestion dropdown anchored to the top of `area`.
pub(crate) fn render_overlay(frame: &mut Frame, context: OverlayContext<'_>) {
	let OverlayContext {
		overlay,
		selected,
		area,
		theme,
	} = context;

	let lines = overlay_lines(overlay, selected, area.width.saturating_sub(4), theme);
	let height = (lines.len() as u16 + 2).min(area.height);
	if height < 3 || area.width < 10 {
		return;
	}
	let popup = Rect { height, ..area };

	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.prompt_style());
	frame.render_widget(Clear, popup);
	frame.render_widget(Paragraph::new(lines).block(block), popup);
}

pub(crate) fn overlay_lines<'a>(
	overlay: &Overlay,
	selected: Option<usize>,
	width: u16,
	theme: &Theme,
) -> Vec<Line<'a>> {
	let section = theme.empty_style().add_modifier(Modifier::BOLD);
	let mut lines = Vec::new();

	if overlay.has_no_matches() {
		lines.push(Line::from(vec![
			Span::raw("No suggestions for "),
			Span::styled(format!("\"{}\"", overlay.query), Style::default().add_modifier(Modifier::BOLD)),
		]));
		lines.push(Line::from(Span::styled("Press Enter to search anyway", theme.empty_style())));
		return lines;
	}

	let mut current_section = None;
	for (index, entry) in overlay.entries.iter().enumerate() {
		let heading = section_heading(entry);
		if current_section != Some(heading) {
			if current_section.is_some() {
				lines.push(Line::from(""));
			}
			let mut title = vec![Span::styled(heading.to_uppercase(), section)];
			if matches!(entry, OverlayEntry::Recent(_)) {
				title.push(Span::styled("  (Del removes)", theme.empty_style()));
			}
			lines.push(Line::from(title));
			current_section = Some(heading);
		}

		let is_selected = selected == Some(index);
		let base = if is_selected {
			theme.row_highlight_style()
		} else {
			Style::default()
		};
		let query = match entry {
			OverlayEntry::Suggestion(_) => overlay.query.as_str(),
			_ => "",
		};
		let marker = if is_selected { "▶ " } else { "  " };
		let mut line = highlight_line(entry.text(), query, Some(width.saturating_sub(4)), base, theme.highlight_style());
		line.spans.insert(0, Span::styled(format!("{marker}{} ", entry_icon(entry)), base));
		lines.push(line);
	}
	lines
}

fn section_heading(entry: &OverlayEntry) -> &'static str {
	match entry {
		OverlayEntry::Suggestion(_) => "Suggestions",
		OverlayEntry::Recent(_) => "Recent searches",
		OverlayEntry::Popular(_) => "Popular searches",
	}
}

fn entry_icon(entry: &OverlayEntry) -> &'static str {
	match entry {
		OverlayEntry::Suggestion(_) => "⌕",
		OverlayEntry::Recent(_) => "↺",
		OverlayEntry::Popular(_) => "↗",
	}
}
