//! History primitives.
//!
//! [`History`] abstracts the platform navigation stack. [`MemoryHistory`] keeps
//! entries in a vector and is what native builds and tests use;
//! `BrowserHistory` drives `window.history` on wasm32 with the `browser`
//! feature.

use std::cell::RefCell;

use crate::navigation::NavigationError;

/// The platform navigation stack.
pub trait History {
	/// Pushes a new entry for `path`.
	fn push(&self, path: &str) -> Result<(), NavigationError>;

	/// Replaces the current entry with `path`.
	fn replace(&self, path: &str) -> Result<(), NavigationError>;

	/// Path of the current entry.
	fn current(&self) -> String;

	/// Number of entries in the stack.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// In-memory history stack.
#[derive(Debug)]
pub struct MemoryHistory {
	entries: RefCell<Vec<String>>,
}

impl MemoryHistory {
	/// A stack holding one entry for `initial`.
	pub fn new(initial: impl Into<String>) -> Self {
		Self {
			entries: RefCell::new(vec![initial.into()]),
		}
	}

	/// Snapshot of all entries, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.entries.borrow().clone()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl History for MemoryHistory {
	fn push(&self, path: &str) -> Result<(), NavigationError> {
		self.entries.borrow_mut().push(path.to_string());
		Ok(())
	}

	fn replace(&self, path: &str) -> Result<(), NavigationError> {
		let mut entries = self.entries.borrow_mut();
		match entries.last_mut() {
			Some(last) => *last = path.to_string(),
			None => entries.push(path.to_string()),
		}
		Ok(())
	}

	fn current(&self) -> String {
		self.entries
			.borrow()
			.last()
			.cloned()
			.unwrap_or_else(|| "/".to_string())
	}

	fn len(&self) -> usize {
		self.entries.borrow().len()
	}
}

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
pub use browser::BrowserHistory;

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
mod browser {
	use wasm_bindgen::JsValue;

	use super::History;
	use crate::navigation::NavigationError;

	/// `window.history` backed stack.
	#[derive(Debug, Default, Clone, Copy)]
	pub struct BrowserHistory;

	impl BrowserHistory {
		fn history() -> Result<web_sys::History, NavigationError> {
			web_sys::window()
				.ok_or(NavigationError::HistoryUnavailable)?
				.history()
				.map_err(|_| NavigationError::HistoryUnavailable)
		}
	}

	impl History for BrowserHistory {
		fn push(&self, path: &str) -> Result<(), NavigationError> {
			Self::history()?
				.push_state_with_url(&JsValue::NULL, "", Some(path))
				.map_err(|e| NavigationError::push_failed(path, format!("{e:?}")))
		}

		fn replace(&self, path: &str) -> Result<(), NavigationError> {
			Self::history()?
				.replace_state_with_url(&JsValue::NULL, "", Some(path))
				.map_err(|e| NavigationError::push_failed(path, format!("{e:?}")))
		}

		fn current(&self) -> String {
			web_sys::window()
				.and_then(|w| w.location().pathname().ok())
				.unwrap_or_else(|| "/".to_string())
		}

		fn len(&self) -> usize {
			Self::history()
				.and_then(|h| h.length().map_err(|_| NavigationError::HistoryUnavailable))
				.map(|n| n as usize)
				.unwrap_or(0)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_push_appends() {
		let history = MemoryHistory::default();
		history.push("/services").unwrap();
		history.push("/services").unwrap();

		assert_eq!(history.len(), 3);
		assert_eq!(history.current(), "/services");
		assert_eq!(history.entries(), vec!["/", "/services", "/services"]);
	}

	#[rstest]
	fn test_replace_keeps_length() {
		let history = MemoryHistory::new("/contact");
		history.replace("/").unwrap();

		assert_eq!(history.len(), 1);
		assert_eq!(history.current(), "/");
	}
}
