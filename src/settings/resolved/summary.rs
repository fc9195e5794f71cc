use medboard::pipeline::sort_label;

use super::super::util::bool_to_word;
use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec!["Effective configuration:".to_string()];
	match &config.data_file {
		Some(path) => lines.push(format!("  Data file: {}", path.display())),
		None => lines.push("  Data file: (built-in appointments)".to_string()),
	}
	lines.push(format!(
		"  Records: {} appointments, {} clinics",
		config.store.len(),
		config.store.clinics().len()
	));
	if let Some(title) = &config.title {
		lines.push(format!("  Title: {title}"));
	}
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.push(format!("  Debounce: {} ms", config.debounce_ms));
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	lines.push(format!("  Clinic: {}", config.clinic));
	lines.push(format!("  Sort: {}", sort_label(config.sort)));
	lines.push(format!(
		"  Recent searches saved: {}",
		bool_to_word(config.history_enabled)
	));
	lines
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn summary_lists_the_effective_values() {
		let config = ResolvedConfig {
			title: Some("Ward".into()),
			initial_query: "neuro".into(),
			theme: Some("light".into()),
			..ResolvedConfig::for_tests()
		};

		let lines = summary_lines(&config);
		assert_eq!(lines[0], "Effective configuration:");
		assert!(lines.contains(&"  Data file: (built-in appointments)".to_string()));
		assert!(lines.contains(&"  Records: 12 appointments, 5 clinics".to_string()));
		assert!(lines.contains(&"  Initial query: neuro".to_string()));
		assert!(lines.contains(&"  Sort: Sort by".to_string()));
		assert!(lines.contains(&"  Recent searches saved: no".to_string()));

		print_summary(&config);
	}
}
