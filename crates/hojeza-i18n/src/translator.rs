//! Translation resource collaborator.
//!
//! Holds one [`MessageCatalog`] per supported locale and the currently
//! active bundle. Missing keys translate to the raw key text.

use std::cell::Cell;
use std::collections::HashMap;

use crate::{I18nError, I18nResult, Locale, MessageCatalog, bundles};

#[derive(Debug)]
pub struct Translator {
	catalogs: HashMap<Locale, MessageCatalog>,
	active: Cell<Locale>,
}

impl Translator {
	/// Builds a translator from catalogs. Every supported locale needs one.
	pub fn new(catalogs: impl IntoIterator<Item = MessageCatalog>) -> I18nResult<Self> {
		let catalogs: HashMap<Locale, MessageCatalog> = catalogs
			.into_iter()
			.map(|catalog| (catalog.locale(), catalog))
			.collect();

		if let Some(missing) = Locale::ALL.iter().find(|l| !catalogs.contains_key(*l)) {
			return Err(I18nError::MissingCatalog(missing.code().to_string()));
		}

		Ok(Self {
			catalogs,
			active: Cell::new(Locale::default()),
		})
	}

	/// Translator over the bundles shipped in `locales/`.
	pub fn builtin() -> I18nResult<Self> {
		Self::new(bundles::load_all()?)
	}

	/// Switches the active bundle.
	pub fn change_language(&self, locale: Locale) {
		let previous = self.active.replace(locale);
		if previous != locale {
			tracing::debug!(from = %previous, to = %locale, "translation bundle switched");
		}
	}

	/// The active locale.
	pub fn language(&self) -> Locale {
		self.active.get()
	}

	/// Translates `key` with the active bundle.
	pub fn translate(&self, key: &str) -> String {
		self.translate_in(self.active.get(), key)
	}

	/// Translates `key` with a specific bundle.
	pub fn translate_in(&self, locale: Locale, key: &str) -> String {
		match self.catalogs.get(&locale) {
			Some(catalog) => catalog.translate(key),
			None => key.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_builtin_defaults_to_english() {
		let translator = Translator::builtin().unwrap();
		assert_eq!(translator.language(), Locale::En);
		assert_eq!(translator.translate("Home"), "Home");
	}

	#[rstest]
	fn test_change_language() {
		let translator = Translator::builtin().unwrap();
		translator.change_language(Locale::Sq);
		assert_eq!(translator.translate("Contact Us"), "Na Kontaktoni");
	}

	#[rstest]
	fn test_unknown_key_returns_key() {
		let translator = Translator::builtin().unwrap();
		translator.change_language(Locale::Sq);
		assert_eq!(translator.translate("no such key"), "no such key");
	}

	#[rstest]
	fn test_new_requires_every_locale() {
		let err = Translator::new([MessageCatalog::new(Locale::En)]).unwrap_err();
		assert!(matches!(err, I18nError::MissingCatalog(code) if code == "sq"));
	}
}
