use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::pipeline::{DEFAULT_DEBOUNCE, SortCriterion};
use crate::records::{ClinicSelection, RecordStore};
use crate::suggestions::{MemoryStore, SearchHistory, SuggestionEngine};
use crate::ui::App;
use crate::ui::state::Popup;

fn app_with_history(entries: &[&str]) -> (App<'static>, MemoryStore) {
	let store = MemoryStore::with_entries(entries.iter().copied());
	let history = SearchHistory::load(Box::new(store.clone()));
	let app = App::new(RecordStore::builtin(), SuggestionEngine::new(history));
	(app, store)
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App<'_>, code: KeyCode, now: Instant) {
	let outcome = app.handle_key(key(code), now).expect("key handled");
	assert!(outcome.is_none(), "unexpected outcome for {code:?}");
}

fn type_text(app: &mut App<'_>, text: &str, now: Instant) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch), now);
	}
}

#[test]
fn typing_opens_suggestions_and_waits_for_the_window() {
	let (mut app, _) = app_with_history(&[]);
	let start = Instant::now();
	type_text(&mut app, "neuro", start);

	assert_eq!(app.popup, Some(Popup::Suggestions { selected: None }));
	assert!(app.is_search_pending());
	assert_eq!(app.displayed_ids().len(), 12);

	app.tick(start + DEFAULT_DEBOUNCE - Duration::from_millis(1));
	assert_eq!(app.displayed_ids().len(), 12);
	app.tick(start + DEFAULT_DEBOUNCE);
	assert_eq!(app.displayed_ids(), vec![1, 3]);
	assert!(!app.is_search_pending());
}

#[test]
fn accepting_a_suggestion_applies_it_and_records_history() {
	let (mut app, store) = app_with_history(&[]);
	let now = Instant::now();
	type_text(&mut app, "arl", now);
	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Enter, now);

	assert_eq!(app.popup, None);
	assert_eq!(app.search_input.text(), "Arlie Mertz");
	assert_eq!(app.settled_query(), "Arlie Mertz");
	assert_eq!(app.displayed_ids(), vec![3]);
	assert_eq!(store.snapshot(), vec!["Arlie Mertz".to_string()]);
}

#[test]
fn enter_without_a_highlighted_entry_searches_anyway() {
	let (mut app, store) = app_with_history(&[]);
	let now = Instant::now();
	type_text(&mut app, "zzz", now);
	assert!(app.overlay().has_no_matches());

	press(&mut app, KeyCode::Enter, now);
	assert_eq!(app.popup, None);
	assert_eq!(app.settled_query(), "zzz");
	assert!(app.displayed_ids().is_empty());
	assert!(store.snapshot().is_empty());
}

#[test]
fn typed_queries_stay_out_of_recent_searches() {
	let (mut app, store) = app_with_history(&["neuro"]);
	let now = Instant::now();
	type_text(&mut app, "neuro ", now);
	press(&mut app, KeyCode::Enter, now);
	assert_eq!(app.settled_query(), "neuro ");
	assert_eq!(app.displayed_ids(), vec![1, 3]);
	assert_eq!(store.snapshot(), vec!["neuro".to_string()]);
	assert_eq!(app.engine.history().entries(), ["neuro".to_string()]);
}

#[test]
fn recent_entries_rerun_without_reordering_and_can_be_removed() {
	let (mut app, store) = app_with_history(&["Neurology", "Arlie"]);
	let now = Instant::now();
	app.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL), now)
		.expect("key handled");
	assert_eq!(app.popup, Some(Popup::Suggestions { selected: None }));

	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Enter, now);
	assert_eq!(app.settled_query(), "Arlie");
	assert_eq!(store.snapshot(), vec!["Neurology".to_string(), "Arlie".to_string()]);

	app.set_query("");
	app.handle_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL), now)
		.expect("key handled");
	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Delete, now);
	assert_eq!(store.snapshot(), vec!["Arlie".to_string()]);
	assert_eq!(app.popup, Some(Popup::Suggestions { selected: Some(0) }));
}

#[test]
fn escape_closes_then_clears_then_cancels() {
	let (mut app, _) = app_with_history(&[]);
	let now = Instant::now();
	type_text(&mut app, "ab", now);

	press(&mut app, KeyCode::Esc, now);
	assert_eq!(app.popup, None);
	assert_eq!(app.search_input.text(), "ab");

	press(&mut app, KeyCode::Esc, now);
	assert_eq!(app.search_input.text(), "");
	assert!(!app.is_search_pending());

	let outcome = app
		.handle_key(key(KeyCode::Esc), now)
		.expect("key handled")
		.expect("session ends");
	assert!(!outcome.accepted);
	assert!(outcome.selection.is_none());
}

#[test]
fn enter_on_the_table_returns_the_selected_row() {
	let (mut app, _) = app_with_history(&[]);
	let now = Instant::now();
	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Down, now);
	let outcome = app
		.handle_key(key(KeyCode::Enter), now)
		.expect("key handled")
		.expect("session ends");
	assert!(outcome.accepted);
	assert_eq!(outcome.selection.map(|record| record.id), Some(3));
}

#[test]
fn clinic_picker_applies_the_chosen_clinic() {
	let (mut app, _) = app_with_history(&[]);
	let now = Instant::now();
	press(&mut app, KeyCode::F(3), now);
	assert_eq!(app.popup, Some(Popup::Clinics { selected: 0 }));
	press(&mut app, KeyCode::Down, now);
	press(&mut app, KeyCode::Enter, now);

	assert_eq!(app.clinic, ClinicSelection::Named("Neurology".into()));
	assert_eq!(app.displayed_ids(), vec![1, 3]);
	assert_eq!(app.popup, None);
}

#[test]
fn sort_picker_toggles_the_active_criterion() {
	let (mut app, _) = app_with_history(&[]);
	let now = Instant::now();
	press(&mut app, KeyCode::F(4), now);
	press(&mut app, KeyCode::Enter, now);
	assert_eq!(app.sort, Some(SortCriterion::ALL[0]));

	press(&mut app, KeyCode::F(4), now);
	assert_eq!(app.popup, Some(Popup::Sort { selected: 0 }));
	press(&mut app, KeyCode::Enter, now);
	assert_eq!(app.sort, None);
}

#[test]
fn tab_toggles_the_selected_row() {
	let (mut app, _) = app_with_history(&[]);
	let now = Instant::now();
	press(&mut app, KeyCode::Tab, now);
	assert!(app.expanded.contains(&1));
	press(&mut app, KeyCode::Tab, now);
	assert!(app.expanded.is_empty());

	for _ in 0..11 {
		press(&mut app, KeyCode::Down, now);
	}
	assert_eq!(app.current_selection().map(|record| record.id), Some(12));
	press(&mut app, KeyCode::Tab, now);
	assert!(app.expanded.contains(&12));
}
