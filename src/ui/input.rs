use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::TextArea;

/// Single-line search box backed by `tui-textarea`.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: Self::blank(),
		};
		input.set_text(initial);
		input
	}

	fn blank() -> TextArea<'a> {
		let mut textarea = TextArea::default();
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text("Find patient");
		textarea
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea.lines().first().map(String::as_str).unwrap_or("")
	}

	/// Replace the contents and move the cursor to the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let text = text.into();
		let single_line = text.lines().next().unwrap_or("").to_string();
		self.textarea = Self::blank();
		self.textarea.insert_str(single_line);
	}

	/// Feed a key press to the text area. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let before = self.text().to_string();
		self.textarea.input(key);
		// newlines would break the single-line invariant
		if self.textarea.lines().len() > 1 {
			let joined = self.textarea.lines().concat();
			self.set_text(joined);
		}
		self.text() != before
	}

	pub fn render(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyCode, KeyModifiers};

	use super::*;

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = SearchInput::new("");
		assert!(input.input(key(KeyCode::Char('n'))));
		assert!(input.input(key(KeyCode::Char('e'))));
		assert_eq!(input.text(), "ne");
		assert!(input.input(key(KeyCode::Backspace)));
		assert_eq!(input.text(), "n");
	}

	#[test]
	fn cursor_moves_do_not_count_as_edits() {
		let mut input = SearchInput::new("abc");
		assert!(!input.input(key(KeyCode::Left)));
		assert_eq!(input.text(), "abc");
	}

	#[test]
	fn set_text_keeps_a_single_line() {
		let mut input = SearchInput::new("first\nsecond");
		assert_eq!(input.text(), "first");
		input.set_text("Neurology");
		assert_eq!(input.text(), "Neurology");
	}
}
