use std::path::PathBuf;

/// Failure to load or validate site settings.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Failed to read settings file {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Validation error: {0}")]
	Validation(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
