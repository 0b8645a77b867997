//! Site settings
//!
//! Settings are read from a TOML file. Every field has a default, so an empty
//! file (or no file at all) yields [`SiteSettings::default`]. A few values can
//! be overridden from the environment with [`SiteSettings::apply_env`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use hojeza_pages::api::DEFAULT_API_BASE_URL;
use hojeza_pages::carousel::{DEFAULT_AUTOPLAY_MS, DEFAULT_SPEED_MS};
use hojeza_pages::layout::DEFAULT_FADE_DURATION_MS;
use hojeza_pages::media::DEFAULT_NARROW_BREAKPOINT_PX;
use hojeza_pages::navbar::DEFAULT_SUBMENU_SWITCH_DELAY_MS;

/// Errors raised while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("failed to read {path}: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("invalid setting {key}: {reason}")]
	Invalid { key: &'static str, reason: String },
}

/// Site-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	/// Brand name shown in the navbar and footer
	pub site_name: String,

	/// Widths at or below this are "narrow"
	pub narrow_breakpoint_px: u32,

	/// Page enter fade
	pub fade_duration_ms: u64,

	/// Exit delay when switching navbar submenus
	pub submenu_switch_delay_ms: u64,

	pub carousel_autoplay_ms: u64,
	pub carousel_speed_ms: u64,

	/// Root for the user service
	pub api_base_url: String,

	/// Where to persist the locale preference. In memory when unset.
	pub locale_storage_path: Option<PathBuf>,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			site_name: "Hojeza".to_string(),
			narrow_breakpoint_px: DEFAULT_NARROW_BREAKPOINT_PX,
			fade_duration_ms: DEFAULT_FADE_DURATION_MS,
			submenu_switch_delay_ms: DEFAULT_SUBMENU_SWITCH_DELAY_MS,
			carousel_autoplay_ms: DEFAULT_AUTOPLAY_MS,
			carousel_speed_ms: DEFAULT_SPEED_MS,
			api_base_url: DEFAULT_API_BASE_URL.to_string(),
			locale_storage_path: None,
		}
	}
}

impl SiteSettings {
	/// Parses settings from TOML source.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Loads settings from a TOML file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading site settings");
		Self::from_toml_str(&contents)
	}

	/// Applies `HOJEZA_API_BASE_URL` and `HOJEZA_LOCALE_STORAGE_PATH` when set.
	pub fn apply_env(mut self) -> Self {
		if let Ok(url) = std::env::var("HOJEZA_API_BASE_URL") {
			self.api_base_url = url;
		}
		if let Ok(path) = std::env::var("HOJEZA_LOCALE_STORAGE_PATH") {
			self.locale_storage_path = Some(PathBuf::from(path));
		}
		self
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.site_name.trim().is_empty() {
			return Err(ConfigError::Invalid {
				key: "site_name",
				reason: "must not be empty".to_string(),
			});
		}
		if self.narrow_breakpoint_px == 0 {
			return Err(ConfigError::Invalid {
				key: "narrow_breakpoint_px",
				reason: "must be positive".to_string(),
			});
		}
		Ok(())
	}
}
