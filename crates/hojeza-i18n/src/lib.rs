//! Hojeza I18n
//!
//! Locale preference and translation support for the Hojeza site.
//!
//! ## Overview
//!
//! - [`Locale`]: the supported display languages (`en`, `sq`)
//! - [`MessageCatalog`]: key → localized string table for one locale
//! - [`Translator`]: holds one catalog per locale and the active bundle
//! - [`KeyValueStorage`]: durable key-value storage for the preference
//! - [`LocaleStore`]: the locale preference context shared by components
//!
//! ## Example
//!
//! ```
//! use hojeza_i18n::{Locale, LocaleSource, LocaleStore, MemoryStorage, Translator};
//! use std::rc::Rc;
//!
//! let storage = Rc::new(MemoryStorage::new());
//! let store = LocaleStore::load(storage.clone(), Translator::builtin().unwrap());
//! assert_eq!(store.get().source, LocaleSource::Default);
//!
//! store.set("sq");
//! assert_eq!(store.get().code, Locale::Sq);
//! assert_eq!(store.translate("Home"), "Kreu");
//! ```

pub mod bundles;
pub mod catalog;
pub mod locale;
pub mod storage;
pub mod store;
pub mod translator;

pub use catalog::MessageCatalog;
pub use locale::{Locale, LocalePreference, LocaleSource};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{LOCALE_STORAGE_KEY, LocaleStore};
pub use translator::Translator;

#[cfg(all(target_arch = "wasm32", feature = "browser"))]
pub use storage::BrowserStorage;

/// Errors raised by locale parsing, catalogs and storage backends.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	/// The code is not one of the supported locales.
	#[error("Unsupported locale: {0}")]
	UnsupportedLocale(String),
	/// No catalog is loaded for the locale.
	#[error("Missing catalog for locale: {0}")]
	MissingCatalog(String),
	/// Two bundles that must share a key set do not.
	#[error("Catalog '{locale}' is missing {missing} key(s) present in '{reference}'")]
	CatalogMismatch {
		locale: String,
		reference: String,
		missing: usize,
	},
	/// The storage backend rejected the operation.
	#[error("Storage error: {0}")]
	Storage(String),
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result alias used across this crate.
pub type I18nResult<T> = Result<T, I18nError>;
