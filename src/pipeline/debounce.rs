use std::time::{Duration, Instant};

/// Quiet period used when no other delay is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

struct Pending<T> {
	value: T,
	deadline: Instant,
}

/// Holds back a rapidly changing value until it has been stable for `delay`.
///
/// The debouncer owns no timer of its own. The event loop reports the current
/// time through [`Debouncer::push`] and [`Debouncer::poll`], which keeps it
/// deterministic and lets tests drive it with synthetic instants.
pub struct Debouncer<T> {
	delay: Duration,
	settled: T,
	pending: Option<Pending<T>>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
	pub fn new(initial: T, delay: Duration) -> Self {
		Self {
			delay,
			settled: initial,
			pending: None,
		}
	}

	/// Record a new raw value, cancelling whatever was pending and restarting
	/// the quiet period from `now`.
	pub fn push(&mut self, value: T, now: Instant) {
		self.pending = Some(Pending {
			value,
			deadline: now + self.delay,
		});
	}

	/// Promote the pending value once its deadline has passed.
	///
	/// Returns `true` when the settled value changed. A pending value equal to
	/// the current settled one is discarded without reporting a change.
	pub fn poll(&mut self, now: Instant) -> bool {
		let Some(pending) = self.pending.take_if(|pending| now >= pending.deadline) else {
			return false;
		};
		if pending.value == self.settled {
			return false;
		}
		self.settled = pending.value;
		true
	}

	/// Settle the pending value immediately, ignoring the deadline.
	pub fn flush(&mut self) -> bool {
		let Some(pending) = self.pending.take() else {
			return false;
		};
		if pending.value == self.settled {
			return false;
		}
		self.settled = pending.value;
		true
	}

	/// Replace both the pending and settled value without waiting.
	pub fn reset(&mut self, value: T) -> bool {
		self.pending = None;
		if value == self.settled {
			return false;
		}
		self.settled = value;
		true
	}

	#[must_use]
	pub fn settled(&self) -> &T {
		&self.settled
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// When the pending value will settle, if any.
	#[must_use]
	pub fn deadline(&self) -> Option<Instant> {
		self.pending.as_ref().map(|pending| pending.deadline)
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ms(value: u64) -> Duration {
		Duration::from_millis(value)
	}

	#[test]
	fn value_settles_only_after_quiet_period() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(String::new(), ms(300));

		debouncer.push("n".into(), start);
		assert!(!debouncer.poll(start + ms(299)));
		assert_eq!(debouncer.settled(), "");
		assert!(debouncer.poll(start + ms(300)));
		assert_eq!(debouncer.settled(), "n");
		assert!(!debouncer.is_pending());
	}

	#[test]
	fn new_input_cancels_pending_value() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(String::new(), ms(300));

		debouncer.push("n".into(), start);
		debouncer.push("ne".into(), start + ms(200));
		debouncer.push("neu".into(), start + ms(400));
		// the first deadline has passed but was cancelled
		assert!(!debouncer.poll(start + ms(650)));
		assert!(debouncer.poll(start + ms(700)));
		assert_eq!(debouncer.settled(), "neu");
	}

	#[test]
	fn repeated_identical_input_changes_output_once() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(String::new(), ms(300));
		let mut changes = 0;

		for step in 0..10 {
			let now = start + ms(step * 20);
			debouncer.push("neuro".into(), now);
			if debouncer.poll(now) {
				changes += 1;
			}
		}
		for step in 0..20 {
			if debouncer.poll(start + ms(200 + step * 50)) {
				changes += 1;
			}
		}

		assert_eq!(changes, 1);
		assert_eq!(debouncer.settled(), "neuro");
	}

	#[test]
	fn settling_back_to_the_same_value_is_not_a_change() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new("a".to_string(), ms(100));
		debouncer.push("ab".into(), start);
		debouncer.push("a".into(), start + ms(50));
		assert!(!debouncer.poll(start + ms(500)));
		assert!(!debouncer.is_pending());
	}

	#[test]
	fn flush_and_reset_skip_the_deadline() {
		let start = Instant::now();
		let mut debouncer = Debouncer::new(String::new(), ms(300));
		debouncer.push("cardio".into(), start);
		assert_eq!(debouncer.deadline(), Some(start + ms(300)));
		assert!(debouncer.flush());
		assert_eq!(debouncer.settled(), "cardio");
		assert!(!debouncer.flush());

		debouncer.push("x".into(), start);
		assert!(debouncer.reset(String::new()));
		assert!(!debouncer.is_pending());
		assert_eq!(debouncer.settled(), "");
	}
}
