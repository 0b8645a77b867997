//! Message catalog for storing translations

use std::collections::HashMap;

use crate::{I18nResult, Locale};

/// A message catalog containing translations for a single locale.
///
/// Keys are the source (English) strings, as in the site's resource bundles.
///
/// # Example
/// ```
/// use hojeza_i18n::{Locale, MessageCatalog};
///
/// let mut catalog = MessageCatalog::new(Locale::Sq);
/// catalog.add("Home", "Kreu");
///
/// assert_eq!(catalog.get("Home"), Some("Kreu"));
/// assert_eq!(catalog.translate("Portfolio"), "Portfolio");
/// ```
#[derive(Debug, Clone)]
pub struct MessageCatalog {
	locale: Locale,
	messages: HashMap<String, String>,
}

impl MessageCatalog {
	/// Create an empty catalog for the given locale
	pub fn new(locale: Locale) -> Self {
		Self {
			locale,
			messages: HashMap::new(),
		}
	}

	/// Build a catalog from a flat JSON object of `key: translation` pairs
	pub fn from_json(locale: Locale, json: &str) -> I18nResult<Self> {
		let messages: HashMap<String, String> = serde_json::from_str(json)?;
		Ok(Self { locale, messages })
	}

	/// Get the locale for this catalog
	pub fn locale(&self) -> Locale {
		self.locale
	}

	/// Add a translation
	pub fn add(&mut self, message: impl Into<String>, translation: impl Into<String>) {
		self.messages.insert(message.into(), translation.into());
	}

	/// Get a translation
	pub fn get(&self, message: &str) -> Option<&str> {
		self.messages.get(message).map(String::as_str)
	}

	/// Get a translation, falling back to the key itself
	pub fn translate(&self, message: &str) -> String {
		self.get(message).unwrap_or(message).to_string()
	}

	/// Whether the catalog has a translation for `message`
	pub fn contains(&self, message: &str) -> bool {
		self.messages.contains_key(message)
	}

	/// Iterate over all keys
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.messages.keys().map(String::as_str)
	}

	/// Number of translations
	pub fn len(&self) -> usize {
		self.messages.len()
	}

	/// Whether the catalog is empty
	pub fn is_empty(&self) -> bool {
		self.messages.is_empty()
	}

	/// Keys present in `other` but missing here
	pub fn missing_from(&self, other: &MessageCatalog) -> Vec<String> {
		let mut missing: Vec<String> = other
			.keys()
			.filter(|key| !self.contains(key))
			.map(str::to_string)
			.collect();
		missing.sort();
		missing
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_from_json() {
		let catalog = MessageCatalog::from_json(Locale::Sq, r#"{"Home": "Kreu"}"#).unwrap();
		assert_eq!(catalog.locale(), Locale::Sq);
		assert_eq!(catalog.get("Home"), Some("Kreu"));
		assert_eq!(catalog.len(), 1);
	}

	#[rstest]
	fn test_from_json_rejects_non_object() {
		assert!(MessageCatalog::from_json(Locale::En, "[1, 2]").is_err());
	}

	#[rstest]
	fn test_missing_key_falls_back_to_key() {
		let catalog = MessageCatalog::new(Locale::Sq);
		assert_eq!(catalog.translate("Go Back Home"), "Go Back Home");
	}

	#[rstest]
	fn test_missing_from() {
		let mut en = MessageCatalog::new(Locale::En);
		en.add("Home", "Home");
		en.add("About", "About");
		let mut sq = MessageCatalog::new(Locale::Sq);
		sq.add("Home", "Kreu");

		assert_eq!(sq.missing_from(&en), vec!["About".to_string()]);
		assert!(en.missing_from(&sq).is_empty());
	}
}
