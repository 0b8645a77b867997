//! Built-in resource bundles shipped with the crate.

use crate::{I18nError, I18nResult, Locale, MessageCatalog};

const EN_JSON: &str = include_str!("../locales/en.json");
const SQ_JSON: &str = include_str!("../locales/sq.json");

/// Raw JSON source of the built-in bundle for `locale`.
pub fn source(locale: Locale) -> &'static str {
	match locale {
		Locale::En => EN_JSON,
		Locale::Sq => SQ_JSON,
	}
}

/// Parses every built-in bundle and checks that all of them carry the
/// same key set as the English one.
pub fn load_all() -> I18nResult<Vec<MessageCatalog>> {
	let catalogs = Locale::ALL
		.into_iter()
		.map(|locale| MessageCatalog::from_json(locale, source(locale)))
		.collect::<I18nResult<Vec<_>>>()?;

	ensure_complete(&catalogs)?;
	Ok(catalogs)
}

/// Fails when any catalog lacks a key another catalog has.
pub fn ensure_complete(catalogs: &[MessageCatalog]) -> I18nResult<()> {
	for catalog in catalogs {
		for reference in catalogs {
			let missing = catalog.missing_from(reference);
			if !missing.is_empty() {
				return Err(I18nError::CatalogMismatch {
					locale: catalog.locale().code().to_string(),
					reference: reference.locale().code().to_string(),
					missing: missing.len(),
				});
			}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_builtin_bundles_are_complete() {
		let catalogs = load_all().unwrap();
		assert_eq!(catalogs.len(), Locale::ALL.len());
		assert!(catalogs.iter().all(|c| !c.is_empty()));
	}

	#[rstest]
	fn test_english_bundle_is_identity() {
		let catalogs = load_all().unwrap();
		let en = catalogs.iter().find(|c| c.locale() == Locale::En).unwrap();
		assert!(en.keys().all(|key| en.get(key) == Some(key)));
	}

	#[rstest]
	fn test_mismatch_detected() {
		let mut en = MessageCatalog::new(Locale::En);
		en.add("Home", "Home");
		let sq = MessageCatalog::new(Locale::Sq);

		let err = ensure_complete(&[en, sq]).unwrap_err();
		assert!(matches!(err, I18nError::CatalogMismatch { missing: 1, .. }));
	}
}
