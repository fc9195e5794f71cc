use log::LevelFilter;
use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::widgets::Clear;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerSmartWidget, TuiWidgetEvent, TuiWidgetState};

use crate::ui::theme::Theme;

/// Scrollable view over the records captured by [`crate::logging::initialize`].
pub(crate) struct LogPane {
	widget: TuiWidgetState,
}

impl LogPane {
	pub(crate) fn new() -> Self {
		let widget = TuiWidgetState::new().set_default_display_level(LevelFilter::Debug);
		Self { widget }
	}

	/// Forward navigation keys to the widget. Returns `true` when consumed.
	pub(crate) fn handle_key(&self, key: KeyEvent) -> bool {
		let event = match key.code {
			KeyCode::PageUp => Some(TuiWidgetEvent::PrevPageKey),
			KeyCode::PageDown => Some(TuiWidgetEvent::NextPageKey),
			KeyCode::F(5) => Some(TuiWidgetEvent::HideKey),
			KeyCode::F(6) => Some(TuiWidgetEvent::FocusKey),
			_ => None,
		};

		if let Some(event) = event {
			self.widget.transition(event);
			return true;
		}
		false
	}

	pub(crate) fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
		frame.render_widget(Clear, area);
		if area.width == 0 || area.height == 0 {
			return;
		}

		let widget = TuiLoggerSmartWidget::default()
			.title_log("Runtime log")
			.title_target("Targets")
			.highlight_style(theme.highlight_style())
			.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
			.state(&self.widget);
		frame.render_widget(widget, area);
	}
}
