//! Durable key-value storage for the locale preference.
//!
//! The site persists exactly one value (the locale code) under a fixed key.
//! Backends:
//!
//! - [`MemoryStorage`]: process-local, used by tests and native hosts
//! - [`FileStorage`]: a JSON object on disk
//! - `BrowserStorage`: `window.localStorage` (wasm32 + `browser` feature)

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::I18nResult;

/// A string key-value store.
///
/// Methods take `&self`: backends live behind a shared `Rc` on the UI thread
/// and use interior mutability where they need it.
pub trait KeyValueStorage {
	/// Reads `key`, `None` when absent.
	fn get(&self, key: &str) -> I18nResult<Option<String>>;

	/// Writes `value` under `key`. Must be durable when it returns `Ok`.
	fn set(&self, key: &str, value: &str) -> I18nResult<()>;

	/// Deletes `key`. Deleting an absent key is not an error.
	fn remove(&self, key: &str) -> I18nResult<()>;
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
	entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
	pub fn new() -> Self {
		Self::default()
	}

	/// Storage pre-populated with one entry.
	pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
		let storage = Self::new();
		storage.entries.borrow_mut().insert(key.into(), value.into());
		storage
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.entries.borrow().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.borrow().is_empty()
	}
}

impl KeyValueStorage for MemoryStorage {
	fn get(&self, key: &str) -> I18nResult<Option<String>> {
		Ok(self.entries.borrow().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> I18nResult<()> {
		self.entries
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn remove(&self, key: &str) -> I18nResult<()> {
		self.entries.borrow_mut().remove(key);
		Ok(())
	}
}

/// Storage backed by a JSON object file.
///
/// Every write rewrites the whole file through a sibling temporary file that
/// is renamed over the target, so readers see either the old or the new
/// object and never a partial one. A file that no longer parses is replaced
/// by the next write.
#[derive(Debug, Clone)]
pub struct FileStorage {
	path: PathBuf,
}

impl FileStorage {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Location of the backing file.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_all(&self) -> I18nResult<BTreeMap<String, String>> {
		match fs::read_to_string(&self.path) {
			Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
			Ok(content) => Ok(serde_json::from_str(&content)?),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
			Err(e) => Err(e.into()),
		}
	}

	/// Entries to start a write from. Unparseable content is dropped.
	fn read_for_update(&self) -> I18nResult<BTreeMap<String, String>> {
		match self.read_all() {
			Err(crate::I18nError::Json(e)) => {
				tracing::warn!(
					path = %self.path.display(),
					error = %e,
					"discarding unparseable storage file"
				);
				Ok(BTreeMap::new())
			}
			other => other,
		}
	}

	fn write_all(&self, entries: &BTreeMap<String, String>) -> I18nResult<()> {
		let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
			Some(parent) => {
				fs::create_dir_all(parent)?;
				parent
			}
			None => Path::new("."),
		};
		let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
		tmp.write_all(serde_json::to_string_pretty(entries)?.as_bytes())?;
		tmp.as_file().sync_all()?;
		tmp.persist(&self.path).map_err(|e| e.error)?;
		Ok(())
	}
}

impl KeyValueStorage for FileStorage {
	fn get(&self, key: &str) -> I18nResult<Option<String>> {
		Ok(self.read_all()?.remove(key))
	}

	fn set(&self, key: &str, value: &str) -> I18nResult<()> {
		let mut entries = self.read_for_update()?;
		entries.insert(key.to_string(), value.to_string());
		self.write_all(&entries)
	}

	fn remove(&self, key: &str) -> I18nResult<()> {
		let mut entries = self.read_for_update()?;
		if entries.remove(key).is_some() {
			self.write_all(&entries)?;
		}
		Ok(())
	}
}

/// `window.localStorage`.
#[cfg(all(target_arch = "wasm32", feature = "browser"))]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
impl BrowserStorage {
	fn local_storage() -> I18nResult<web_sys::Storage> {
		use crate::I18nError;

		let window =
			web_sys::window().ok_or_else(|| I18nError::Storage("window unavailable".into()))?;
		window
			.local_storage()
			.map_err(|e| I18nError::Storage(format!("{e:?}")))?
			.ok_or_else(|| I18nError::Storage("localStorage unavailable".into()))
	}
}

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
impl KeyValueStorage for BrowserStorage {
	fn get(&self, key: &str) -> I18nResult<Option<String>> {
		Self::local_storage()?
			.get_item(key)
			.map_err(|e| crate::I18nError::Storage(format!("{e:?}")))
	}

	fn set(&self, key: &str, value: &str) -> I18nResult<()> {
		Self::local_storage()?
			.set_item(key, value)
			.map_err(|e| crate::I18nError::Storage(format!("{e:?}")))
	}

	fn remove(&self, key: &str) -> I18nResult<()> {
		Self::local_storage()?
			.remove_item(key)
			.map_err(|e| crate::I18nError::Storage(format!("{e:?}")))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tempfile::TempDir;

	#[rstest]
	fn test_memory_roundtrip() {
		let storage = MemoryStorage::new();
		assert_eq!(storage.get("k").unwrap(), None);

		storage.set("k", "sq").unwrap();
		assert_eq!(storage.get("k").unwrap().as_deref(), Some("sq"));

		storage.remove("k").unwrap();
		assert!(storage.is_empty());
	}

	#[rstest]
	fn test_file_storage_missing_file_reads_none() {
		let dir = TempDir::new().unwrap();
		let storage = FileStorage::new(dir.path().join("prefs.json"));
		assert_eq!(storage.get("i18nextLng").unwrap(), None);
	}

	#[rstest]
	fn test_file_storage_persists_across_instances() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("nested").join("prefs.json");

		FileStorage::new(&path).set("i18nextLng", "sq").unwrap();

		let reopened = FileStorage::new(&path);
		assert_eq!(reopened.get("i18nextLng").unwrap().as_deref(), Some("sq"));
	}

	#[rstest]
	fn test_file_storage_keeps_other_keys() {
		let dir = TempDir::new().unwrap();
		let storage = FileStorage::new(dir.path().join("prefs.json"));

		storage.set("a", "1").unwrap();
		storage.set("b", "2").unwrap();
		storage.remove("a").unwrap();

		assert_eq!(storage.get("a").unwrap(), None);
		assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
	}

	#[rstest]
	fn test_file_storage_corrupt_file_is_error() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("prefs.json");
		fs::write(&path, "not json").unwrap();

		assert!(FileStorage::new(&path).get("i18nextLng").is_err());
	}

	#[rstest]
	#[case::torn_object(r#"{"i18nextLng": "sq""#)]
	#[case::garbage("not json")]
	fn test_file_storage_write_replaces_unparseable_file(#[case] content: &str) {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("prefs.json");
		fs::write(&path, content).unwrap();
		let storage = FileStorage::new(&path);

		storage.set("i18nextLng", "en").unwrap();

		assert_eq!(storage.get("i18nextLng").unwrap().as_deref(), Some("en"));
		let names: Vec<_> = fs::read_dir(dir.path())
			.unwrap()
			.map(|e| e.unwrap().file_name())
			.collect();
		assert_eq!(names, vec![std::ffi::OsString::from("prefs.json")]);
	}
}
