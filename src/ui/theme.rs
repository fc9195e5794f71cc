//! Colour schemes for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::records::AppointmentStatus;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub header: Style,
	pub row_highlight: Style,
	pub prompt: Style,
	pub empty: Style,
	pub highlight: Style,
	pub badge: Style,
	pub expanded: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn badge_style(&self) -> Style {
		self.badge
	}

	/// Tint applied to rows the user has expanded.
	#[must_use]
	pub fn expanded_style(&self) -> Style {
		self.expanded
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	/// Badge colour for an appointment status.
	#[must_use]
	pub fn status_style(&self, status: AppointmentStatus) -> Style {
		let fg = match status {
			AppointmentStatus::Processing => Color::Rgb(214, 171, 0),
			AppointmentStatus::NotArrived => Color::Red,
			AppointmentStatus::AwaitingVitals => Color::Magenta,
			AppointmentStatus::AwaitingDoctor => Color::Blue,
			AppointmentStatus::AdmittedToWard => Color::Rgb(217, 119, 6),
			AppointmentStatus::TransferredToAe => Color::LightMagenta,
			AppointmentStatus::SeenDoctor => Color::Green,
		};
		Style::new().fg(fg).add_modifier(Modifier::BOLD)
	}
}

pub const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(5, 20, 56))
		.bg(Color::Rgb(237, 240, 248)),
	row_highlight: Style::new()
		.bg(Color::Rgb(231, 231, 252))
		.fg(Color::Rgb(5, 20, 56)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.bg(Color::Rgb(254, 240, 138))
		.fg(Color::Rgb(17, 24, 39))
		.add_modifier(Modifier::BOLD),
	badge: Style::new()
		.fg(Color::Rgb(234, 88, 12))
		.add_modifier(Modifier::BOLD),
	expanded: Style::new().bg(Color::Rgb(239, 246, 255)),
};

pub const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	badge: Style::new()
		.fg(Color::LightRed)
		.add_modifier(Modifier::BOLD),
	expanded: Style::new().bg(Color::Rgb(23, 37, 84)),
};

const BUILT_IN: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// Names of the bundled themes, default first.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILT_IN.iter().map(|(name, _)| *name)
}

/// Look up a theme by name, ignoring case and surrounding whitespace.
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	BUILT_IN
		.iter()
		.find(|(candidate, _)| *candidate == wanted)
		.map(|(_, theme)| *theme)
}

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
