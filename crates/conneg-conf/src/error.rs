//! Settings errors

use std::path::PathBuf;

/// Error raised while loading or validating negotiation settings
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error reading {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid settings: {0}")]
	Invalid(String),

	#[error("Invalid environment variable {key}: {message}")]
	Env { key: String, message: String },
}

/// Result alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
