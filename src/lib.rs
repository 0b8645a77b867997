//! # Hojeza
//!
//! Navigation, locale and layout core of the Hojeza agency website.
//!
//! The site is a set of statically routed pages inside a persistent shell
//! (navbar, keyed page container, footer). This crate assembles it from the
//! member crates:
//!
//! - [`reactive`] (`hojeza-core`): the single-threaded `Signal<T>`
//! - [`i18n`] (`hojeza-i18n`): locales, translation bundles and the
//!   persisted locale preference
//! - [`pages`] (`hojeza-pages`): router, navigation dispatcher, media query,
//!   page shell and the navbar state machine
//!
//! and adds the site content ([`site`]), settings ([`conf`]) and the
//! application context ([`SiteApp`]).
//!
//! ## Feature Flags
//!
//! - `browser`: persist the locale in `window.localStorage` and drive the
//!   browser History API (wasm32 only)
//!
//! ## Example
//!
//! ```
//! use hojeza::{SiteApp, SiteSettings};
//!
//! let app = SiteApp::new(SiteSettings::default()).unwrap();
//! app.go("/services").unwrap();
//!
//! let view = app.render().unwrap();
//! assert!(view.text_content().contains("Our Services"));
//! assert_eq!(app.navigation().generation().value(), 1);
//! ```

pub mod app;
pub mod conf;
pub mod site;

pub use hojeza_core::reactive;
pub use hojeza_i18n as i18n;
pub use hojeza_pages as pages;

pub use app::{SiteApp, SiteAppBuilder};
pub use conf::{ConfigError, SiteSettings};

use hojeza_i18n::I18nError;
use hojeza_pages::api::ApiError;
use hojeza_pages::navigation::NavigationError;
use hojeza_pages::router::RouterError;

/// Errors surfaced by [`SiteApp`].
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
	#[error(transparent)]
	I18n(#[from] I18nError),
	#[error(transparent)]
	Router(#[from] RouterError),
	#[error(transparent)]
	Navigation(#[from] NavigationError),
	#[error(transparent)]
	Api(#[from] ApiError),
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Result alias for site operations.
pub type SiteResult<T> = Result<T, SiteError>;
