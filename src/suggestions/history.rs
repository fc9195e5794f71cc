use super::store::HistoryStore;

/// Maximum number of recent searches kept.
pub const HISTORY_LIMIT: usize = 5;

/// Most-recent-first list of accepted searches, written through to a
/// [`HistoryStore`] on every change.
pub struct SearchHistory {
	entries: Vec<String>,
	store: Box<dyn HistoryStore>,
}

impl SearchHistory {
	/// Load the persisted list. Duplicates and entries past the limit are
	/// dropped so a hand-edited file cannot break the invariants.
	pub fn load(store: Box<dyn HistoryStore>) -> Self {
		let mut entries: Vec<String> = Vec::with_capacity(HISTORY_LIMIT);
		for entry in store.load() {
			if !entries.contains(&entry) {
				entries.push(entry);
			}
		}
		entries.truncate(HISTORY_LIMIT);
		log::debug!("loaded {} recent searches", entries.len());
		Self { entries, store }
	}

	#[must_use]
	pub fn entries(&self) -> &[String] {
		&self.entries
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Move `query` to the front, dropping any earlier copy and anything past
	/// the limit. Blank queries are ignored.
	pub fn accept(&mut self, query: &str) {
		if query.trim().is_empty() {
			return;
		}
		self.entries.retain(|entry| entry != query);
		self.entries.insert(0, query.to_string());
		self.entries.truncate(HISTORY_LIMIT);
		self.persist();
	}

	/// Delete every entry equal to `query`.
	pub fn remove(&mut self, query: &str) {
		let before = self.entries.len();
		self.entries.retain(|entry| entry != query);
		if self.entries.len() != before {
			self.persist();
		}
	}

	fn persist(&self) {
		match self.store.save(&self.entries) {
			Ok(()) => log::info!("saved {} recent searches", self.entries.len()),
			Err(err) => log::warn!("failed to save recent searches: {err:#}"),
		}
	}
}
