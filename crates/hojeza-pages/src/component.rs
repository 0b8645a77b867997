//! Component system.
//!
//! Pages, the page shell and the chrome around it are all [`Component`]s: they
//! receive a [`RenderContext`] snapshot and return a [`View`]. Components take
//! no props from the router; anything they need is read from the context.

mod view;

pub use view::{ElementView, IntoView, View};

use hojeza_i18n::{Locale, LocaleStore};

use crate::navbar::NavMenuState;
use crate::navigation::ViewGeneration;

/// Everything a component may read while rendering.
pub struct RenderContext<'a> {
	/// Locale preference and translations.
	pub i18n: &'a LocaleStore,
	/// Normalized path being rendered.
	pub path: &'a str,
	/// Current view generation (transition key).
	pub generation: ViewGeneration,
	/// Whether the viewport is at or below the narrow breakpoint.
	pub narrow: bool,
	/// Snapshot of the navbar menu.
	pub menu: NavMenuState,
}

impl<'a> RenderContext<'a> {
	/// A context with closed menus, generation zero and a wide viewport.
	pub fn new(i18n: &'a LocaleStore, path: &'a str) -> Self {
		Self {
			i18n,
			path,
			generation: ViewGeneration::default(),
			narrow: false,
			menu: NavMenuState::default(),
		}
	}

	/// Translates `key` with the active bundle.
	pub fn t(&self, key: &str) -> String {
		self.i18n.translate(key)
	}

	/// Active locale.
	pub fn locale(&self) -> Locale {
		self.i18n.locale()
	}
}

impl std::fmt::Debug for RenderContext<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RenderContext")
			.field("path", &self.path)
			.field("generation", &self.generation)
			.field("narrow", &self.narrow)
			.field("menu", &self.menu)
			.finish()
	}
}

/// Trait for renderable units: pages, navbar, footer.
pub trait Component {
	/// Renders the component.
	fn render(&self, ctx: &RenderContext<'_>) -> View;

	/// Name used in logs and debug output.
	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}
}

impl<F> Component for F
where
	F: Fn(&RenderContext<'_>) -> View,
{
	fn render(&self, ctx: &RenderContext<'_>) -> View {
		self(ctx)
	}

	fn name(&self) -> &str {
		"fn"
	}
}

/// Wraps routed page content in persistent chrome.
pub trait Layout {
	fn render(&self, ctx: &RenderContext<'_>, content: View) -> View;
}
