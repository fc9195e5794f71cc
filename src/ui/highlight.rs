use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

const ELLIPSIS: &str = "…";

/// Char indices in `text` covered by case-insensitive occurrences of `needle`.
///
/// Matching is done on a per-char lowercase fold so indices stay aligned with
/// the original string even when lowercasing changes byte lengths.
pub(crate) fn match_indices(text: &str, needle: &str) -> Vec<usize> {
	let needle: Vec<char> = needle.trim().chars().flat_map(char::to_lowercase).collect();
	if needle.is_empty() {
		return Vec::new();
	}
	let folded: Vec<char> = text
		.chars()
		.map(|ch| ch.to_lowercase().next().unwrap_or(ch))
		.collect();
	let mut indices = Vec::new();
	let mut start = 0;
	while start + needle.len() <= folded.len() {
		if folded[start..start + needle.len()] == needle[..] {
			indices.extend(start..start + needle.len());
			start += needle.len();
		} else {
			start += 1;
		}
	}
	indices
}

/// Build a line that highlights every occurrence of `query` within `text`.
pub(crate) fn highlight_line<'a>(
	text: &str,
	query: &str,
	max_width: Option<u16>,
	base: Style,
	highlight: Style,
) -> Line<'a> {
	let indices = match_indices(text, query);
	let (display_text, indices) = match max_width.map(usize::from) {
		Some(width) => truncate_with_highlight(text, indices, width),
		None => (text.to_string(), indices),
	};

	if indices.is_empty() {
		return Line::from(Span::styled(display_text, base));
	}
	let mut next = indices.into_iter().peekable();
	let mut buffer = String::new();
	let mut highlighted = false;
	let mut spans = Vec::new();

	for (idx, ch) in display_text.chars().enumerate() {
		let should_highlight = next.peek().copied() == Some(idx);
		if should_highlight {
			next.next();
		}
		if should_highlight != highlighted {
			if !buffer.is_empty() {
				let style = if highlighted { highlight } else { base };
				spans.push(Span::styled(mem::take(&mut buffer), style));
			}
			highlighted = should_highlight;
		}
		buffer.push(ch);
	}

	if !buffer.is_empty() {
		let style = if highlighted { highlight } else { base };
		spans.push(Span::styled(buffer, style));
	}

	Line::from(spans)
}

fn truncate_with_highlight(
	text: &str,
	indices: Vec<usize>,
	max_width: usize,
) -> (String, Vec<usize>) {
	if max_width == 0 {
		return (String::new(), Vec::new());
	}
	if text.width() <= max_width {
		return (text.to_string(), indices);
	}
	let ellipsis_width = ELLIPSIS.width();
	if max_width <= ellipsis_width {
		return (ELLIPSIS.to_string(), Vec::new());
	}

	let (slice, _) = text.unicode_truncate(max_width - ellipsis_width);
	let limit = slice.chars().count();
	let mut truncated = slice.to_string();
	truncated.push_str(ELLIPSIS);
	let indices = indices.into_iter().filter(|&idx| idx < limit).collect();
	(truncated, indices)
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Modifier};

	use super::*;

	#[test]
	fn finds_every_case_insensitive_occurrence() {
		assert_eq!(match_indices("Chinwe Azikiwe", "WE"), vec![4, 5, 12, 13]);
		assert_eq!(match_indices("Neurology", " neuro "), vec![0, 1, 2, 3, 4]);
		assert!(match_indices("Neurology", "").is_empty());
		assert!(match_indices("Neurology", "cardio").is_empty());
	}

	#[test]
	fn truncation_drops_hidden_indices() {
		let (text, indices) = truncate_with_highlight("abcdefgh", vec![1, 3, 6], 5);
		assert_eq!(text, "abcd…");
		assert_eq!(indices, vec![1, 3]);
	}

	#[test]
	fn highlighted_spans_cover_the_match() {
		let highlight = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
		let line = highlight_line("Arlie Mertz", "mer", None, Style::default(), highlight);
		let parts: Vec<(&str, Style)> = line
			.spans
			.iter()
			.map(|span| (span.content.as_ref(), span.style))
			.collect();
		assert_eq!(
			parts,
			vec![
				("Arlie ", Style::default()),
				("Mer", highlight),
				("tz", Style::default()),
			]
		);
	}
}
