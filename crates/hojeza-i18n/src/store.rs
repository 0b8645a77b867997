//! Locale preference store.
//!
//! The store is the single entry point for reading and changing the UI
//! language. It is created once at startup and shared by reference with every
//! component that renders text.
//!
//! # Ordering
//!
//! A successful [`LocaleStore::set`] runs, in order:
//!
//! 1. the storage write under [`LOCALE_STORAGE_KEY`];
//! 2. the translation bundle switch;
//! 3. the preference signal update, which notifies subscribers synchronously.
//!
//! A subscriber that re-reads storage from its callback therefore always sees
//! the new code.

use std::rc::Rc;

use hojeza_core::reactive::{Signal, Subscription};

use crate::{
	I18nError, I18nResult, KeyValueStorage, Locale, LocalePreference, Translator,
};

/// Storage key holding the locale code.
pub const LOCALE_STORAGE_KEY: &str = "i18nextLng";

/// Shared locale preference context.
pub struct LocaleStore {
	storage: Rc<dyn KeyValueStorage>,
	translator: Translator,
	preference: Signal<LocalePreference>,
}

impl std::fmt::Debug for LocaleStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LocaleStore")
			.field("preference", &self.preference.get())
			.field("subscribers", &self.preference.subscriber_count())
			.finish()
	}
}

impl LocaleStore {
	/// Reads the stored preference once and activates the matching bundle.
	///
	/// An absent, unreadable or unrecognised value yields the default locale
	/// with [`crate::LocaleSource::Default`].
	pub fn load(storage: Rc<dyn KeyValueStorage>, translator: Translator) -> Self {
		let preference = match storage.get(LOCALE_STORAGE_KEY) {
			Ok(Some(code)) => match Locale::from_code(&code) {
				Some(locale) => LocalePreference::stored(locale),
				None => {
					tracing::debug!(code = %code, "ignoring unrecognised stored locale");
					LocalePreference::fallback()
				}
			},
			Ok(None) => LocalePreference::fallback(),
			Err(e) => {
				tracing::warn!(error = %e, "failed to read stored locale");
				LocalePreference::fallback()
			}
		};

		translator.change_language(preference.code);
		tracing::info!(locale = %preference.code, source = ?preference.source, "locale loaded");

		Self {
			storage,
			translator,
			preference: Signal::new(preference),
		}
	}

	/// Current preference. No side effects.
	pub fn get(&self) -> LocalePreference {
		self.preference.get()
	}

	/// Active locale.
	pub fn locale(&self) -> Locale {
		self.preference.with(|p| p.code)
	}

	/// Changes the language.
	///
	/// Unsupported codes are ignored and the previous state is kept. A failed
	/// storage write is logged and also leaves the previous state in place.
	pub fn set(&self, code: &str) {
		match self.try_set(code) {
			Ok(_) => {}
			Err(I18nError::UnsupportedLocale(code)) => {
				tracing::debug!(code = %code, "ignoring unsupported locale");
			}
			Err(e) => {
				tracing::warn!(error = %e, "failed to persist locale");
			}
		}
	}

	/// Like [`set`](Self::set) but reports why nothing changed.
	pub fn try_set(&self, code: &str) -> I18nResult<LocalePreference> {
		let locale: Locale = code.parse()?;
		self.set_locale(locale)
	}

	/// Typed variant of [`try_set`](Self::try_set).
	pub fn set_locale(&self, locale: Locale) -> I18nResult<LocalePreference> {
		self.storage.set(LOCALE_STORAGE_KEY, locale.code())?;
		self.translator.change_language(locale);

		let preference = LocalePreference::stored(locale);
		tracing::info!(locale = %locale, "locale changed");
		self.preference.set(preference);
		Ok(preference)
	}

	/// Registers a listener called after every successful change.
	pub fn subscribe(&self, callback: impl Fn(&LocalePreference) + 'static) -> Subscription {
		self.preference.subscribe(callback)
	}

	/// Translates `key` with the active bundle, falling back to the key.
	pub fn translate(&self, key: &str) -> String {
		self.translator.translate(key)
	}

	/// The translation collaborator.
	pub fn translator(&self) -> &Translator {
		&self.translator
	}

	/// The backing storage.
	pub fn storage(&self) -> &Rc<dyn KeyValueStorage> {
		&self.storage
	}
}
