/// Trim a user supplied string, treating blank values as absent.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

pub(super) fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_values_are_dropped() {
		assert_eq!(non_blank(Some("  slate ".into())), Some("slate".into()));
		assert_eq!(non_blank(Some("   ".into())), None);
		assert_eq!(non_blank(None), None);
	}

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}
}
