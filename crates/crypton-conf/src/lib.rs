//! Site settings for Crypton
//!
//! Everything the layout shows that is not part of a page: the document
//! title, the meta description and the hero image. Defaults reproduce the
//! production site; a TOML document or environment variables may override
//! any subset.
//!
//! ```
//! use crypton_conf::SiteSettings;
//!
//! let settings = SiteSettings::from_toml_str(r#"title = "Crypton Staging""#).unwrap();
//! assert_eq!(settings.title, "Crypton Staging");
//! assert_eq!(settings.description, "a crypto currency app");
//! ```

pub mod error;
pub mod site;

pub use error::{SettingsError, SettingsResult};
pub use site::{DIR, ENV_PREFIX, HeroImage, LANG, SiteSettings};
