use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};

/// Key under which the recent-search list is stored.
pub const HISTORY_KEY: &str = "recentSearches";

/// Durable storage for the recent-search list.
///
/// `load` never fails: a missing or unreadable value is an empty list.
pub trait HistoryStore {
	fn load(&self) -> Vec<String>;
	fn save(&self, entries: &[String]) -> Result<()>;
}

/// Keeps the list as a JSON array in `<dir>/recentSearches.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
	path: PathBuf,
}

impl JsonFileStore {
	/// Store the list inside `dir`, which is created on first save.
	pub fn in_dir(dir: impl AsRef<Path>) -> Self {
		Self {
			path: dir.as_ref().join(format!("{HISTORY_KEY}.json")),
		}
	}

	#[must_use]
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl HistoryStore for JsonFileStore {
	fn load(&self) -> Vec<String> {
		let contents = match fs::read_to_string(&self.path) {
			Ok(contents) => contents,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
			Err(err) => {
				log::warn!("ignoring unreadable search history {}: {err}", self.path.display());
				return Vec::new();
			}
		};
		match serde_json::from_str::<Vec<String>>(&contents) {
			Ok(entries) => entries,
			Err(err) => {
				log::warn!("ignoring malformed search history {}: {err}", self.path.display());
				Vec::new()
			}
		}
	}

	fn save(&self, entries: &[String]) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)
				.with_context(|| format!("failed to create {}", parent.display()))?;
		}
		let payload = serde_json::to_string(entries)?;
		let staging = self.path.with_extension("json.tmp");
		fs::write(&staging, payload)
			.with_context(|| format!("failed to write {}", staging.display()))?;
		fs::rename(&staging, &self.path)
			.with_context(|| format!("failed to replace {}", self.path.display()))?;
		Ok(())
	}
}

/// Process-local store. Clones share the same list, so a test can keep a
/// handle and inspect what the history saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	entries: Rc<RefCell<Vec<String>>>,
}

impl MemoryStore {
	pub fn with_entries<I, S>(entries: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			entries: Rc::new(RefCell::new(entries.into_iter().map(Into::into).collect())),
		}
	}

	#[must_use]
	pub fn snapshot(&self) -> Vec<String> {
		self.entries.borrow().clone()
	}
}

impl HistoryStore for MemoryStore {
	fn load(&self) -> Vec<String> {
		self.snapshot()
	}

	fn save(&self, entries: &[String]) -> Result<()> {
		*self.entries.borrow_mut() = entries.to_vec();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn missing_file_loads_as_empty() {
		let dir = tempdir().unwrap();
		let store = JsonFileStore::in_dir(dir.path());
		assert!(store.load().is_empty());
	}

	#[test]
	fn malformed_file_loads_as_empty() {
		let dir = tempdir().unwrap();
		let store = JsonFileStore::in_dir(dir.path());
		fs::write(store.path(), "{not an array").unwrap();
		assert!(store.load().is_empty());

		fs::write(store.path(), "[1, 2, 3]").unwrap();
		assert!(store.load().is_empty());
	}

	#[test]
	fn saved_list_is_a_json_array_under_the_fixed_key() {
		let dir = tempdir().unwrap();
		let store = JsonFileStore::in_dir(dir.path().join("nested"));
		store
			.save(&["Neurology".to_string(), "HOSP12345789".to_string()])
			.unwrap();

		assert!(store.path().ends_with("recentSearches.json"));
		let raw = fs::read_to_string(store.path()).unwrap();
		assert_eq!(raw, r#"["Neurology","HOSP12345789"]"#);
		assert_eq!(store.load(), vec!["Neurology", "HOSP12345789"]);
	}

	#[test]
	fn memory_store_clones_share_state() {
		let store = MemoryStore::with_entries(["a"]);
		let handle = store.clone();
		store.save(&["b".to_string()]).unwrap();
		assert_eq!(handle.snapshot(), vec!["b"]);
	}
}
