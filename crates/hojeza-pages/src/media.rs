//! Viewport width and derived media queries.
//!
//! [`Viewport`] holds the current width and emits on every resize event, even
//! when the width is unchanged. [`MediaQuery`] derives a boolean from it.

use std::fmt;

use hojeza_core::reactive::{Signal, Subscription};

/// Breakpoint under which the layout switches to the narrow (mobile) variant.
pub const DEFAULT_NARROW_BREAKPOINT_PX: u32 = 768;

/// The window's inner width, updated by resize events.
#[derive(Clone, Default)]
pub struct Viewport {
	width: Signal<u32>,
}

impl fmt::Debug for Viewport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Viewport")
			.field("width", &self.width.get())
			.field("observers", &self.width.subscriber_count())
			.finish()
	}
}

impl Viewport {
	pub fn new(width: u32) -> Self {
		Self {
			width: Signal::new(width),
		}
	}

	pub fn width(&self) -> u32 {
		self.width.get()
	}

	/// Feeds a resize event.
	pub fn resize(&self, width: u32) {
		tracing::trace!(width, "viewport resized");
		self.width.set(width);
	}

	/// Runs `callback` with the new width after every resize event.
	pub fn subscribe_resize(&self, callback: impl Fn(u32) + 'static) -> Subscription {
		self.width.subscribe(move |w| callback(*w))
	}

	/// `width <= breakpoint_px`, re-evaluated on every resize.
	pub fn observe(&self, breakpoint_px: u32) -> MediaQuery {
		let matches = Signal::new(self.width() <= breakpoint_px);
		let link = self.width.subscribe({
			let matches = matches.clone();
			move |w| {
				matches.set_if_changed(*w <= breakpoint_px);
			}
		});

		MediaQuery {
			breakpoint_px,
			matches,
			_link: link,
		}
	}

	/// Feeds this viewport from `window` resize events until the returned
	/// listener is dropped.
	#[cfg(all(target_arch = "wasm32", feature = "browser"))]
	pub fn attach_window(&self) -> Option<browser::WindowResizeListener> {
		browser::WindowResizeListener::attach(self.clone())
	}
}

/// A `max-width` media query bound to a [`Viewport`].
///
/// Dropping it detaches it from the viewport.
pub struct MediaQuery {
	breakpoint_px: u32,
	matches: Signal<bool>,
	_link: Subscription,
}

impl fmt::Debug for MediaQuery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MediaQuery")
			.field("breakpoint_px", &self.breakpoint_px)
			.field("matches", &self.matches.get())
			.finish()
	}
}

impl MediaQuery {
	pub fn matches(&self) -> bool {
		self.matches.get()
	}

	pub fn breakpoint_px(&self) -> u32 {
		self.breakpoint_px
	}

	/// Runs `callback` whenever the result flips.
	pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> Subscription {
		self.matches.subscribe(move |m| callback(*m))
	}
}

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
pub mod browser {
	use wasm_bindgen::JsCast;
	use wasm_bindgen::closure::Closure;

	use super::Viewport;

	fn inner_width(window: &web_sys::Window) -> u32 {
		window
			.inner_width()
			.ok()
			.and_then(|w| w.as_f64())
			.map(|w| w.max(0.0) as u32)
			.unwrap_or(0)
	}

	/// Registered `resize` listener; removed on drop.
	pub struct WindowResizeListener {
		window: web_sys::Window,
		callback: Closure<dyn FnMut()>,
	}

	impl WindowResizeListener {
		pub(super) fn attach(viewport: Viewport) -> Option<Self> {
			let window = web_sys::window()?;
			viewport.resize(inner_width(&window));

			let callback = Closure::<dyn FnMut()>::new({
				let window = window.clone();
				move || viewport.resize(inner_width(&window))
			});
			window
				.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
				.ok()?;

			Some(Self { window, callback })
		}
	}

	impl Drop for WindowResizeListener {
		fn drop(&mut self) {
			let _ = self.window.remove_event_listener_with_callback(
				"resize",
				self.callback.as_ref().unchecked_ref(),
			);
		}
	}
}
