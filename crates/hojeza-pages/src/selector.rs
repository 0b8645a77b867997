//! Language selector dropdown.

use std::rc::Rc;

use hojeza_core::reactive::{Signal, Subscription};
use hojeza_i18n::{Locale, LocaleStore};

use crate::component::{IntoView, View};

/// Open/closed dropdown bound to the shared [`LocaleStore`].
#[derive(Debug, Clone)]
pub struct LanguageSelector {
	store: Rc<LocaleStore>,
	open: Signal<bool>,
}

impl LanguageSelector {
	pub fn new(store: Rc<LocaleStore>) -> Self {
		Self {
			store,
			open: Signal::new(false),
		}
	}

	pub fn is_open(&self) -> bool {
		self.open.get()
	}

	pub fn toggle(&self) {
		self.open.update(|open| *open = !*open);
	}

	pub fn close(&self) {
		self.open.set_if_changed(false);
	}

	/// Switches the language and closes the dropdown.
	pub fn choose(&self, locale: Locale) {
		self.store.set(locale.code());
		self.close();
	}

	pub fn current(&self) -> Locale {
		self.store.locale()
	}

	pub fn subscribe(&self, callback: impl Fn(bool) + 'static) -> Subscription {
		self.open.subscribe(move |open| callback(*open))
	}

	/// Trigger button plus, when open, one option per locale.
	pub fn render(&self) -> View {
		let current = self.current();
		let trigger = View::element("button")
			.class("language-trigger")
			.attr("aria-expanded", self.is_open().to_string())
			.child(View::element("span").child(current.flag()))
			.child(View::element("span").child(current.label()));

		let options = self.is_open().then(|| {
			View::element("ul").class("language-options").children(Locale::ALL.iter().map(|l| {
				let item = View::element("li")
					.attr("data-locale", l.code())
					.child(View::element("span").child(l.flag()))
					.child(View::element("span").child(l.label()));
				if *l == current {
					item.class("selected")
				} else {
					item
				}
			}))
		});

		View::element("div")
			.class("language-selector")
			.child(trigger)
			.child(options)
			.into_view()
	}
}
