//! Page shell and enter transition.

use std::fmt;
use std::rc::Rc;

use crate::component::{Component, IntoView, Layout, RenderContext, View};
use crate::navigation::ViewGeneration;

/// Default duration of the enter fade.
pub const DEFAULT_FADE_DURATION_MS: u64 = 500;

/// Attribute carrying the transition key on the page container.
pub const VIEW_KEY_ATTR: &str = "data-view-key";

/// Phase of a [`FadeIn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
	Entering { started_at: u64 },
	Visible,
}

/// Opacity fade that restarts whenever its key changes.
///
/// The fade never gates input: content is interactive while entering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeIn {
	key: ViewGeneration,
	phase: FadePhase,
	duration_ms: u64,
}

impl FadeIn {
	/// Starts entering at `now_ms` for `key`.
	pub fn new(key: ViewGeneration, duration_ms: u64, now_ms: u64) -> Self {
		let mut fade = Self {
			key,
			phase: FadePhase::Entering { started_at: now_ms },
			duration_ms,
		};
		fade.tick(now_ms);
		fade
	}

	pub fn key(&self) -> ViewGeneration {
		self.key
	}

	pub fn phase(&self) -> FadePhase {
		self.phase
	}

	pub fn duration_ms(&self) -> u64 {
		self.duration_ms
	}

	/// Restarts the fade if `key` differs from the current one.
	pub fn rekey(&mut self, key: ViewGeneration, now_ms: u64) -> bool {
		if key == self.key {
			return false;
		}
		*self = Self::new(key, self.duration_ms, now_ms);
		true
	}

	/// Advances the clock.
	pub fn tick(&mut self, now_ms: u64) -> FadePhase {
		if let FadePhase::Entering { started_at } = self.phase {
			if now_ms.saturating_sub(started_at) >= self.duration_ms {
				self.phase = FadePhase::Visible;
			}
		}
		self.phase
	}

	/// Linear opacity in `[0, 1]` at `now_ms`.
	pub fn opacity(&self, now_ms: u64) -> f64 {
		match self.phase {
			FadePhase::Visible => 1.0,
			FadePhase::Entering { .. } if self.duration_ms == 0 => 1.0,
			FadePhase::Entering { started_at } => {
				let elapsed = now_ms.saturating_sub(started_at) as f64;
				(elapsed / self.duration_ms as f64).clamp(0.0, 1.0)
			}
		}
	}

	pub fn is_visible(&self) -> bool {
		self.phase == FadePhase::Visible
	}

	/// Always `true`.
	pub fn interactive(&self) -> bool {
		true
	}
}

/// Navbar, keyed page container, footer.
#[derive(Clone)]
pub struct PageShell {
	navbar: Rc<dyn Component>,
	footer: Rc<dyn Component>,
	fade_duration_ms: u64,
}

impl fmt::Debug for PageShell {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PageShell")
			.field("navbar", &self.navbar.name())
			.field("footer", &self.footer.name())
			.field("fade_duration_ms", &self.fade_duration_ms)
			.finish()
	}
}

impl PageShell {
	pub fn new(navbar: impl Component + 'static, footer: impl Component + 'static) -> Self {
		Self {
			navbar: Rc::new(navbar),
			footer: Rc::new(footer),
			fade_duration_ms: DEFAULT_FADE_DURATION_MS,
		}
	}

	pub fn with_fade_duration(mut self, ms: u64) -> Self {
		self.fade_duration_ms = ms;
		self
	}

	pub fn fade_duration_ms(&self) -> u64 {
		self.fade_duration_ms
	}

	fn transition_container(&self, generation: ViewGeneration, content: View) -> View {
		View::element("main")
			.class("page-transition")
			.attr(VIEW_KEY_ATTR, generation.to_string())
			.attr(
				"style",
				format!("animation: fade-in {}ms ease-in-out both", self.fade_duration_ms),
			)
			.child(content)
			.into_view()
	}
}

impl Layout for PageShell {
	fn render(&self, ctx: &RenderContext<'_>, content: View) -> View {
		View::element("div")
			.class("page-shell")
			.child(self.navbar.render(ctx))
			.child(self.transition_container(ctx.generation, content))
			.child(self.footer.render(ctx))
			.into_view()
	}
}
