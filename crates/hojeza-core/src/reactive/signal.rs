//! Signal - observable value with synchronous change notification
//!
//! `Signal<T>` holds a value and a list of subscribers. Every write
//! (`set`, `update`, a changing `set_if_changed`) finishes mutating the
//! value and then calls each subscriber in registration order before
//! returning. There is no batching and no scheduler.
//!
//! ## Example
//!
//! ```
//! use hojeza_core::reactive::Signal;
//!
//! let width = Signal::new(1280_u32);
//! width.set(640);
//! assert_eq!(width.get(), 640);
//!
//! width.update(|w| *w += 1);
//! assert_eq!(width.get(), 641);
//! ```

use core::cell::RefCell;
use core::fmt;
use std::rc::Rc;

use super::subscription::Subscription;

type Callback<T> = Rc<dyn Fn(&T) + 'static>;

struct Subscribers<T: 'static> {
	next_id: u64,
	entries: Vec<(u64, Callback<T>)>,
}

impl<T: 'static> Default for Subscribers<T> {
	fn default() -> Self {
		Self {
			next_id: 0,
			entries: Vec::new(),
		}
	}
}

/// A shared, observable value.
///
/// Clones share the same value and the same subscriber list.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	subscribers: Rc<RefCell<Subscribers<T>>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: Clone + 'static> Signal<T> {
	/// Create a new signal holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			subscribers: Rc::new(RefCell::new(Subscribers::default())),
		}
	}

	/// Returns a copy of the current value.
	pub fn get(&self) -> T {
		self.value.borrow().clone()
	}

	/// Reads the current value through a closure without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Replaces the value and notifies every subscriber.
	pub fn set(&self, value: T) {
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Mutates the value in place and notifies every subscriber once.
	pub fn update(&self, f: impl FnOnce(&mut T)) {
		f(&mut self.value.borrow_mut());
		self.notify();
	}

	/// Registers `callback` to run after every write.
	///
	/// The callback is removed when the returned [`Subscription`] is dropped.
	pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
		let id = {
			let mut subscribers = self.subscribers.borrow_mut();
			let id = subscribers.next_id;
			subscribers.next_id += 1;
			subscribers.entries.push((id, Rc::new(callback)));
			id
		};

		let weak = Rc::downgrade(&self.subscribers);
		Subscription::new(move || {
			if let Some(subscribers) = weak.upgrade() {
				subscribers
					.borrow_mut()
					.entries
					.retain(|(entry_id, _)| *entry_id != id);
			}
		})
	}

	/// Number of live subscribers.
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.borrow().entries.len()
	}

	fn notify(&self) {
		// Snapshot both the value and the callback list so subscribers may
		// read, write or (un)subscribe on this signal from inside a callback.
		let snapshot = self.get();
		let callbacks: Vec<Callback<T>> = self
			.subscribers
			.borrow()
			.entries
			.iter()
			.map(|(_, cb)| Rc::clone(cb))
			.collect();

		tracing::trace!(subscribers = callbacks.len(), "signal notify");
		for callback in callbacks {
			callback(&snapshot);
		}
	}
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
	/// Writes `value` only when it differs from the current one.
	///
	/// Returns `true` if the value changed and subscribers were notified.
	pub fn set_if_changed(&self, value: T) -> bool {
		if *self.value.borrow() == value {
			return false;
		}
		self.set(value);
		true
	}
}

impl<T: Clone + Default + 'static> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscribers.borrow().entries.len())
			.finish()
	}
}
