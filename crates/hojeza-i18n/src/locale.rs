//! Supported locales and the locale preference value.

use std::fmt;
use std::str::FromStr;

use crate::I18nError;

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
	/// English (default).
	#[default]
	En,
	/// Albanian.
	Sq,
}

impl Locale {
	/// Every supported locale, in selector order.
	pub const ALL: [Locale; 2] = [Locale::En, Locale::Sq];

	/// The stored and catalog code (`"en"`, `"sq"`).
	pub fn code(self) -> &'static str {
		match self {
			Locale::En => "en",
			Locale::Sq => "sq",
		}
	}

	/// Parses a locale code. Only the exact supported codes are accepted.
	pub fn from_code(code: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|locale| locale.code() == code)
	}

	/// Short label shown by the language selector.
	pub fn label(self) -> &'static str {
		match self {
			Locale::En => "EN",
			Locale::Sq => "AL",
		}
	}

	/// Flag shown next to the label.
	pub fn flag(self) -> &'static str {
		match self {
			Locale::En => "\u{1F1FA}\u{1F1F8}",
			Locale::Sq => "\u{1F1E6}\u{1F1F1}",
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for Locale {
	type Err = I18nError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_code(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
	}
}

/// Where the active locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleSource {
	/// Read from storage at startup or written by an explicit `set`.
	Stored,
	/// Nothing usable was stored; the default locale is active.
	Default,
}

/// The active locale together with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalePreference {
	pub code: Locale,
	pub source: LocaleSource,
}

impl LocalePreference {
	/// The preference used when storage holds nothing usable.
	pub fn fallback() -> Self {
		Self {
			code: Locale::default(),
			source: LocaleSource::Default,
		}
	}

	/// A preference that was stored explicitly.
	pub fn stored(code: Locale) -> Self {
		Self {
			code,
			source: LocaleSource::Stored,
		}
	}
}

impl Default for LocalePreference {
	fn default() -> Self {
		Self::fallback()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("en", Some(Locale::En))]
	#[case("sq", Some(Locale::Sq))]
	#[case("SQ", None)]
	#[case(" en ", None)]
	#[case("En", None)]
	#[case("en-US", None)]
	#[case("fr", None)]
	#[case("", None)]
	fn test_from_code(#[case] input: &str, #[case] expected: Option<Locale>) {
		assert_eq!(Locale::from_code(input), expected);
	}

	#[rstest]
	fn test_from_str_error() {
		let err = "de".parse::<Locale>().unwrap_err();
		assert!(matches!(err, I18nError::UnsupportedLocale(code) if code == "de"));
	}

	#[rstest]
	fn test_labels() {
		assert_eq!(Locale::En.label(), "EN");
		assert_eq!(Locale::Sq.label(), "AL");
	}

	#[rstest]
	fn test_fallback_preference() {
		let pref = LocalePreference::default();
		assert_eq!(pref.code, Locale::En);
		assert_eq!(pref.source, LocaleSource::Default);
	}
}
