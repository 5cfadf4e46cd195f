//! Negotiation settings and their loaders

use crate::error::{SettingsError, SettingsResult};
use conneg_negotiation::WildcardWeights;
use conneg_typemap::WhitelistMap;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

/// Prefix used by [`NegotiationSettings::with_env_overrides`] callers by default
pub const DEFAULT_ENV_PREFIX: &str = "CONNEG_";

const ENCODING_WHITELIST: &str = "ENCODING_WHITELIST";
const TYPE_WHITELIST: &str = "TYPE_WHITELIST";
const WILDCARD_WEIGHT_FULL: &str = "WILDCARD_WEIGHT_FULL";
const WILDCARD_WEIGHT_SUBTYPE: &str = "WILDCARD_WEIGHT_SUBTYPE";

/// Server-side negotiation knobs
///
/// Every field is optional in TOML; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NegotiationSettings {
	/// Codings offered when the client sends no `Accept-Encoding`
	pub encoding_whitelist: Option<Vec<String>>,
	/// Media types that may be served through a wildcard range
	pub type_whitelist: Option<Vec<String>>,
	/// Typemap whitelists keyed by variant header name
	pub typemap_whitelist: BTreeMap<String, Vec<String>>,
	/// Implicit weights of `*/*` and `type/*`
	pub wildcard_weights: WildcardWeights,
}

impl NegotiationSettings {
	/// Parses and validates settings from TOML text
	pub fn from_toml_str(text: &str) -> SettingsResult<Self> {
		let settings: Self = toml::from_str(text)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> SettingsResult<Self> {
		let path = path.as_ref();
		let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let settings = Self::from_toml_str(&text)?;
		tracing::debug!(path = %path.display(), "loaded negotiation settings");
		Ok(settings)
	}

	/// Checks weights and whitelist keys
	///
	/// Wildcard weights must lie in `(0, 1]`. Typemap whitelist keys must be
	/// non-empty header names.
	pub fn validate(&self) -> SettingsResult<()> {
		for (name, weight) in [
			("full", self.wildcard_weights.full),
			("subtype", self.wildcard_weights.subtype),
		] {
			if !(weight > 0.0 && weight <= 1.0) {
				return Err(SettingsError::Invalid(format!(
					"wildcard_weights.{} must be in (0, 1], got {}",
					name, weight
				)));
			}
		}

		if let Some(key) = self.typemap_whitelist.keys().find(|k| k.trim().is_empty()) {
			return Err(SettingsError::Invalid(format!(
				"typemap_whitelist key {:?} is not a header name",
				key
			)));
		}
		Ok(())
	}

	/// Applies overrides from the process environment
	///
	/// Recognized variables, each prefixed with `prefix`:
	/// `ENCODING_WHITELIST` and `TYPE_WHITELIST` (comma-separated lists),
	/// `WILDCARD_WEIGHT_FULL` and `WILDCARD_WEIGHT_SUBTYPE` (numbers).
	pub fn with_env_overrides(self, prefix: &str) -> SettingsResult<Self> {
		self.with_overrides_from(prefix, std::env::vars())
	}

	/// Applies overrides from an explicit set of variables
	///
	/// # Examples
	///
	/// ```
	/// use conneg_conf::NegotiationSettings;
	///
	/// let vars = vec![
	///     ("APP_ENCODING_WHITELIST".to_string(), "gzip, br".to_string()),
	///     ("APP_WILDCARD_WEIGHT_FULL".to_string(), "0.1".to_string()),
	/// ];
	/// let settings = NegotiationSettings::default()
	///     .with_overrides_from("APP_", vars)
	///     .unwrap();
	///
	/// assert_eq!(settings.encoding_whitelist, Some(vec!["gzip".to_string(), "br".to_string()]));
	/// assert_eq!(settings.wildcard_weights.full, 0.1);
	/// ```
	pub fn with_overrides_from<I>(mut self, prefix: &str, vars: I) -> SettingsResult<Self>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		for (key, value) in vars {
			let Some(name) = key.strip_prefix(prefix) else {
				continue;
			};
			match name {
				ENCODING_WHITELIST => self.encoding_whitelist = Some(split_list(&value)),
				TYPE_WHITELIST => self.type_whitelist = Some(split_list(&value)),
				WILDCARD_WEIGHT_FULL => self.wildcard_weights.full = parse_weight(&key, &value)?,
				WILDCARD_WEIGHT_SUBTYPE => {
					self.wildcard_weights.subtype = parse_weight(&key, &value)?
				}
				_ => continue,
			}
			tracing::debug!(%key, "negotiation setting overridden from environment");
		}

		self.validate()?;
		Ok(self)
	}

	pub fn encoding_whitelist_set(&self) -> Option<HashSet<String>> {
		self.encoding_whitelist
			.as_ref()
			.map(|values| values.iter().cloned().collect())
	}

	pub fn type_whitelist_set(&self) -> Option<HashSet<String>> {
		self.type_whitelist
			.as_ref()
			.map(|values| values.iter().cloned().collect())
	}

	/// Typemap whitelists with lower-cased header names
	pub fn typemap_whitelist_map(&self) -> WhitelistMap {
		self.typemap_whitelist
			.iter()
			.map(|(name, values)| {
				(
					name.trim().to_lowercase(),
					values.iter().cloned().collect(),
				)
			})
			.collect()
	}
}

/// Splits a comma-separated list, dropping empty items
fn split_list(value: &str) -> Vec<String> {
	value
		.split(',')
		.map(str::trim)
		.filter(|item| !item.is_empty())
		.map(str::to_string)
		.collect()
}

fn parse_weight(key: &str, value: &str) -> SettingsResult<f32> {
	value.trim().parse::<f32>().map_err(|e| SettingsError::Env {
		key: key.to_string(),
		message: e.to_string(),
	})
}
