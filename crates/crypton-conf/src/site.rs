//! Layout-level settings

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document language. Not configurable.
pub const LANG: &str = "fa";
/// Text direction. Not configurable.
pub const DIR: &str = "rtl";
/// Prefix of environment variables read by [`SiteSettings::apply_env`].
pub const ENV_PREFIX: &str = "CRYPTON_";

/// Decorative image shown next to the auth forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroImage {
	pub src: String,
	pub alt: String,
	pub width: u32,
	pub height: u32,
}

impl Default for HeroImage {
	fn default() -> Self {
		Self {
			src: "/assets/images/black-crypto.jpg".to_string(),
			alt: "crypto currency".to_string(),
			width: 884,
			height: 772,
		}
	}
}

/// Settings consumed by the page layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
	pub title: String,
	pub description: String,
	pub hero_image: HeroImage,
}

impl Default for SiteSettings {
	fn default() -> Self {
		Self {
			title: "Crypton".to_string(),
			description: "a crypto currency app".to_string(),
			hero_image: HeroImage::default(),
		}
	}
}

impl SiteSettings {
	/// Parse settings from a TOML document, filling omitted keys with defaults
	///
	/// # Examples
	///
	/// ```
	/// use crypton_conf::SiteSettings;
	///
	/// let settings = SiteSettings::from_toml_str(
	///     r#"
	///     [hero_image]
	///     width = 640
	///     "#,
	/// )
	/// .unwrap();
	/// assert_eq!(settings.hero_image.width, 640);
	/// assert_eq!(settings.hero_image.height, 772);
	/// ```
	pub fn from_toml_str(source: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Read and parse a TOML settings file.
	pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "site settings loaded");
		Ok(settings)
	}

	/// Override values from `CRYPTON_*` environment variables.
	pub fn apply_env(&mut self) -> SettingsResult<()> {
		self.apply_overrides(|key| std::env::var(key).ok())
	}

	/// Override values from a key lookup using the `CRYPTON_*` names
	///
	/// Recognised keys: `CRYPTON_SITE_TITLE`, `CRYPTON_SITE_DESCRIPTION`,
	/// `CRYPTON_HERO_SRC` and `CRYPTON_HERO_ALT`.
	pub fn apply_overrides<F>(&mut self, lookup: F) -> SettingsResult<()>
	where
		F: Fn(&str) -> Option<String>,
	{
		let var = |suffix: &str| lookup(&format!("{ENV_PREFIX}{suffix}"));

		if let Some(title) = var("SITE_TITLE") {
			self.title = title;
		}
		if let Some(description) = var("SITE_DESCRIPTION") {
			self.description = description;
		}
		if let Some(src) = var("HERO_SRC") {
			self.hero_image.src = src;
		}
		if let Some(alt) = var("HERO_ALT") {
			self.hero_image.alt = alt;
		}
		self.validate()
	}

	pub fn validate(&self) -> SettingsResult<()> {
		if self.title.trim().is_empty() {
			return Err(SettingsError::Validation(
				"site title must not be empty".to_string(),
			));
		}
		if self.hero_image.width == 0 || self.hero_image.height == 0 {
			return Err(SettingsError::Validation(format!(
				"hero image dimensions must be positive, got {}x{}",
				self.hero_image.width, self.hero_image.height
			)));
		}
		Ok(())
	}
}
