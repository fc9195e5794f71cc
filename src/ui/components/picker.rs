use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::ui::theme::Theme;

/// One selectable row in a picker.
pub(crate) struct PickerOption {
	pub label: String,
	/// Group heading printed before the first option of each group.
	pub group: Option<&'static str>,
	/// Marks the value currently in effect.
	pub active: bool,
}

pub(crate) struct PickerContext<'a> {
	pub title: &'a str,
	pub options: &'a [PickerOption],
	pub selected: usize,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Render a bordered single-choice list at the top-left of `area`.
pub(crate) fn render_picker(frame: &mut Frame, context: PickerContext<'_>) {
	let PickerContext {
		title,
		options,
		selected,
		area,
		theme,
	} = context;

	let lines = picker_lines(options, selected, theme);
	let width = lines
		.iter()
		.map(|line| line.width() as u16)
		.max()
		.unwrap_or(0)
		.max(title.len() as u16)
		.saturating_add(4)
		.min(area.width);
	let height = (lines.len() as u16 + 2).min(area.height);
	if width < 6 || height < 3 {
		return;
	}
	let popup = Rect {
		width,
		height,
		..area
	};

	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.prompt_style())
		.title(format!(" {title} "));
	frame.render_widget(Clear, popup);
	frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn picker_lines<'a>(options: &[PickerOption], selected: usize, theme: &Theme) -> Vec<Line<'a>> {
	let heading = theme.empty_style().add_modifier(Modifier::BOLD);
	let mut lines = Vec::new();
	let mut current_group = None;
	for (index, option) in options.iter().enumerate() {
		if option.group.is_some() && option.group != current_group {
			if let Some(group) = option.group {
				lines.push(Line::from(Span::styled(group.to_uppercase(), heading)));
			}
			current_group = option.group;
		}

		let mut style = if index == selected {
			theme.row_highlight_style()
		} else {
			Style::default()
		};
		if option.active {
			style = style.add_modifier(Modifier::BOLD).patch(theme.prompt_style());
		}
		let marker = if index == selected { "▶ " } else { "  " };
		let check = if option.active { " ✓" } else { "" };
		lines.push(Line::from(Span::styled(format!("{marker}{}{check}", option.label), style)));
	}
	lines
}
