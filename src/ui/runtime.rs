use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use chrono::Local;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;
use super::outcome::DashboardOutcome;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL: Duration = Duration::from_millis(50);

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user confirms or backs out.
	pub fn run(&mut self) -> Result<DashboardOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = terminal.clear() {
			ratatui::restore();
			return Err(err.into());
		}

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<DashboardOutcome> = 'event_loop: loop {
			self.tick(Instant::now());
			self.clock.update(Local::now());
			if self.is_search_pending() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break 'event_loop Err(err.into());
			}

			if let Some(outcome) = self.process_pending(&mut pending_events) {
				break outcome;
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		if let Ok(outcome) = &result {
			log::info!(
				"session ended accepted={} query={:?} after {} recomputations",
				outcome.accepted,
				outcome.query,
				self.recomputations()
			);
		}
		result
	}

	/// Handle queued key presses until one ends the session or fails.
	///
	/// Events after the one that ended the session stay queued.
	fn process_pending(&mut self, pending: &mut VecDeque<Event>) -> Option<Result<DashboardOutcome>> {
		while let Some(event) = pending.pop_front() {
			let Event::Key(key) = event else {
				continue;
			};
			if key.kind != KeyEventKind::Press {
				continue;
			}
			match self.handle_key(key, Instant::now()) {
				Ok(None) => {}
				Ok(Some(outcome)) => return Some(Ok(outcome)),
				Err(err) => return Some(Err(err)),
			}
		}
		None
	}
}
