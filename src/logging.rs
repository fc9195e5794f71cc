//! Log capture for the terminal UI.
//!
//! Records emitted through the `log` macros are buffered by `tui-logger` so
//! they can be shown in the in-app log pane without corrupting the screen.

use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install the `tui-logger` sink. Safe to call repeatedly; only the first call
/// has an effect.
pub fn initialize() {
	INIT.call_once(|| {
		if tui_logger::init_logger(LevelFilter::Trace).is_ok() {
			tui_logger::set_default_level(LevelFilter::Debug);
		}
	});
}
