//! # Conneg Conf
//!
//! Negotiation settings: encoding and media type whitelists, per-header
//! typemap whitelists, and the implicit wildcard weights.
//!
//! Settings load from TOML and can be overridden through environment
//! variables. Every loader validates the result.
//!
//! ```
//! use conneg_conf::NegotiationSettings;
//!
//! let settings = NegotiationSettings::from_toml_str(r#"
//! encoding_whitelist = ["gzip", "br"]
//!
//! [wildcard_weights]
//! full = 0.05
//!
//! [typemap_whitelist]
//! content-type = ["image/webp"]
//! "#).unwrap();
//!
//! assert!(settings.encoding_whitelist_set().unwrap().contains("br"));
//! assert_eq!(settings.wildcard_weights.full, 0.05);
//! assert_eq!(settings.wildcard_weights.subtype, 0.02);
//! ```

pub mod error;
pub mod settings;

pub use error::{SettingsError, SettingsResult};
pub use settings::{DEFAULT_ENV_PREFIX, NegotiationSettings};
