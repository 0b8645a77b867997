use core::fmt;

/// Handle to a registered listener.
///
/// Dropping the handle deregisters the listener. Components keep their
/// subscriptions as fields so teardown and deregistration happen together.
#[must_use = "dropping a Subscription immediately deregisters the listener"]
pub struct Subscription {
	cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Wraps a deregistration closure.
	pub fn new(cancel: impl FnOnce() + 'static) -> Self {
		Self {
			cancel: Some(Box::new(cancel)),
		}
	}

	/// A subscription that owns no listener.
	pub fn empty() -> Self {
		Self { cancel: None }
	}

	/// Deregisters now instead of on drop.
	pub fn cancel(mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}

	/// Keeps the listener registered for the lifetime of its source.
	pub fn detach(mut self) {
		self.cancel = None;
	}

	/// Whether this handle still owns a registration.
	pub fn is_active(&self) -> bool {
		self.cancel.is_some()
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.is_active())
			.finish()
	}
}
