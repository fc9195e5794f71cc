use chrono::{DateTime, Local};

/// Wall clock shown in the header, refreshed once per second.
pub(crate) struct Clock {
	now: DateTime<Local>,
}

impl Clock {
	pub(crate) fn new() -> Self {
		Self::at(Local::now())
	}

	pub(crate) fn at(now: DateTime<Local>) -> Self {
		Self { now }
	}

	/// Advance to `now`. Returns `true` when the displayed second changed.
	pub(crate) fn update(&mut self, now: DateTime<Local>) -> bool {
		let changed = now.timestamp() != self.now.timestamp();
		self.now = now;
		changed
	}

	/// Day and month, e.g. `22 September`.
	pub(crate) fn date_label(&self) -> String {
		self.now.format("%d %B").to_string()
	}

	/// Twelve-hour time with seconds, e.g. `11:30:05 AM`.
	pub(crate) fn time_label(&self) -> String {
		self.now.format("%I:%M:%S %p").to_string()
	}
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	fn clock_at(h: u32, m: u32, s: u32) -> Clock {
		let now = Local
			.with_ymd_and_hms(2025, 9, 22, h, m, s)
			.single()
			.expect("unambiguous local time");
		Clock::at(now)
	}

	#[test]
	fn labels_use_day_month_and_twelve_hour_time() {
		let clock = clock_at(11, 30, 5);
		assert_eq!(clock.date_label(), "22 September");
		assert_eq!(clock.time_label(), "11:30:05 AM");
		assert_eq!(clock_at(15, 4, 0).time_label(), "03:04:00 PM");
	}

	#[test]
	fn update_reports_second_changes_only() {
		let mut clock = clock_at(11, 30, 5);
		let same = clock.now;
		assert!(!clock.update(same));
		let next = same + chrono::Duration::seconds(1);
		assert!(clock.update(next));
	}
}
