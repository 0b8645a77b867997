//! Navigation intents.
//!
//! [`NavigationDispatcher::go`] is the single way pages and chrome change the
//! location. One call performs, in order:
//!
//! 1. a history push for the target path;
//! 2. a scroll reset to `(0, 0)`;
//! 3. a [`ViewGeneration`] increment together with the location update.
//!
//! [`NavigationDispatcher::replace`] does the same with a history replace
//! instead of a push.
//!
//! Step 3 is a single signal write, so subscribers never observe a new
//! location paired with a stale generation. Repeated calls are not coalesced:
//! every call pushes its own history entry.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use hojeza_core::reactive::{Signal, Subscription};

use crate::router::{History, normalize_path};

/// Remount key for the page transition container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewGeneration(u64);

impl ViewGeneration {
	pub const fn new(value: u64) -> Self {
		Self(value)
	}

	pub const fn value(self) -> u64 {
		self.0
	}

	/// The following generation.
	pub const fn next(self) -> Self {
		Self(self.0.wrapping_add(1))
	}
}

impl fmt::Display for ViewGeneration {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// Location and generation, updated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
	/// Normalized current path.
	pub location: String,
	pub generation: ViewGeneration,
}

/// Errors raised by navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
	/// No history object is reachable.
	#[error("history API unavailable")]
	HistoryUnavailable,
	/// The platform refused the new entry.
	#[error("failed to push history entry for {path}: {reason}")]
	PushFailed { path: String, reason: String },
}

impl NavigationError {
	pub fn push_failed(path: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::PushFailed {
			path: path.into(),
			reason: reason.into(),
		}
	}
}

/// Something that can be scrolled to an absolute offset.
pub trait ScrollSurface {
	fn scroll_to(&self, x: f64, y: f64);

	/// Current `(x, y)` offset.
	fn offset(&self) -> (f64, f64);
}

/// Scroll position held in memory.
#[derive(Debug, Default)]
pub struct MemoryScroll {
	offset: Cell<(f64, f64)>,
}

impl MemoryScroll {
	pub fn new() -> Self {
		Self::default()
	}
}

impl ScrollSurface for MemoryScroll {
	fn scroll_to(&self, x: f64, y: f64) {
		self.offset.set((x, y));
	}

	fn offset(&self) -> (f64, f64) {
		self.offset.get()
	}
}

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
pub use browser::BrowserScroll;

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
mod browser {
	use super::ScrollSurface;

	/// The browser window.
	#[derive(Debug, Default, Clone, Copy)]
	pub struct BrowserScroll;

	impl ScrollSurface for BrowserScroll {
		fn scroll_to(&self, x: f64, y: f64) {
			if let Some(window) = web_sys::window() {
				window.scroll_to_with_x_and_y(x, y);
			}
		}

		fn offset(&self) -> (f64, f64) {
			web_sys::window()
				.map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
				.unwrap_or((0.0, 0.0))
		}
	}
}

/// Owns the view generation and funnels every navigation intent.
pub struct NavigationDispatcher {
	history: Rc<dyn History>,
	scroll: Rc<dyn ScrollSurface>,
	state: Signal<NavigationState>,
}

impl fmt::Debug for NavigationDispatcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NavigationDispatcher")
			.field("state", &self.state.get())
			.field("history_len", &self.history.len())
			.finish()
	}
}

impl NavigationDispatcher {
	/// Starts at the history's current entry with generation zero.
	pub fn new(history: Rc<dyn History>, scroll: Rc<dyn ScrollSurface>) -> Self {
		let location = normalize_path(&history.current());
		Self {
			history,
			scroll,
			state: Signal::new(NavigationState {
				location,
				generation: ViewGeneration::default(),
			}),
		}
	}

	/// Navigates to `path`.
	///
	/// On a failed push nothing else happens: scroll and generation keep
	/// their values.
	pub fn go(&self, path: &str) -> Result<ViewGeneration, NavigationError> {
		self.history.push(path)?;
		self.scroll.scroll_to(0.0, 0.0);

		let generation = self.generation().next();
		let location = normalize_path(path);
		tracing::debug!(%location, %generation, "navigated");

		self.state.set(NavigationState {
			location,
			generation,
		});
		Ok(generation)
	}

	/// Navigates to `path` in place of the current history entry.
	///
	/// Scroll and generation behave as in [`go`](Self::go); only the history
	/// length differs. Used for redirects that must not leave the source
	/// location reachable through back.
	pub fn replace(&self, path: &str) -> Result<ViewGeneration, NavigationError> {
		self.history.replace(path)?;
		self.scroll.scroll_to(0.0, 0.0);

		let generation = self.generation().next();
		let location = normalize_path(path);
		tracing::debug!(%location, %generation, "navigated in place");

		self.state.set(NavigationState {
			location,
			generation,
		});
		Ok(generation)
	}

	/// Records a location change that did not come from [`go`](Self::go),
	/// such as a back button. No history entry is pushed and the generation
	/// is kept.
	pub fn location_changed(&self, path: &str) {
		let location = normalize_path(path);
		let generation = self.generation();
		tracing::debug!(%location, "location changed externally");
		self.state.set_if_changed(NavigationState {
			location,
			generation,
		});
	}

	pub fn state(&self) -> NavigationState {
		self.state.get()
	}

	pub fn location(&self) -> String {
		self.state.with(|s| s.location.clone())
	}

	pub fn generation(&self) -> ViewGeneration {
		self.state.with(|s| s.generation)
	}

	/// Registers a listener called after every navigation.
	pub fn subscribe(&self, callback: impl Fn(&NavigationState) + 'static) -> Subscription {
		self.state.subscribe(callback)
	}

	pub fn history(&self) -> &Rc<dyn History> {
		&self.history
	}

	pub fn scroll(&self) -> &Rc<dyn ScrollSurface> {
		&self.scroll
	}
}
