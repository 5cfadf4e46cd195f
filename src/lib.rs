//! # Conneg
//!
//! HTTP content negotiation: picks the representation to send from what the
//! server can produce and what the client's `Accept`, `Accept-Encoding` and
//! `Accept-Language` headers ask for, following the weighted (`q`-value)
//! rules of RFC 7231 §5.3.
//!
//! ## Crates
//!
//! - `conneg-negotiation`: value tuples, header tokenizing, match strategies,
//!   the ranking engine and the encoding / media type / language negotiators
//! - `conneg-typemap`: Apache-style typemap files and variant selection
//! - `conneg-conf`: whitelists and wildcard weights loaded from TOML or the
//!   environment
//!
//! ## Feature Flags
//!
//! - `typemap` - Typemap parsing and negotiation
//! - `conf` - Settings and the [`ContentNegotiator`] (implies `typemap`)
//! - `full` (default) - Everything
//!
//! ## Quick Example
//!
//! ```rust
//! use conneg::prelude::*;
//!
//! let negotiator = ContentNegotiator::new();
//! let offers = vec![ValueTuple::new("application/json"), ValueTuple::new("text/html")];
//!
//! let chosen = negotiator.negotiate_type(Some("text/html;q=0.8, application/*"), &offers);
//! assert_eq!(chosen.unwrap().value, "application/json");
//!
//! // No Accept-Encoding header: identity is always acceptable
//! let codings = vec![ValueTuple::new("identity")];
//! assert_eq!(negotiator.negotiate_encoding(None, &codings).unwrap().value, "identity");
//! ```

#[cfg(feature = "conf")]
pub mod conf;
pub mod negotiation;
#[cfg(feature = "conf")]
pub mod negotiator;
#[cfg(feature = "typemap")]
pub mod typemap;

// Re-export the core negotiation types
pub use conneg_negotiation::{
	MatchStrategy, RankedMatch, Strategy, ValueTuple, WildcardWeights, parse_header,
	perform_encoding_negotiation, perform_language_negotiation, perform_negotiation,
	perform_type_negotiation,
};

// Re-export typemap types
#[cfg(feature = "typemap")]
pub use conneg_typemap::{
	ClientHeaders, TypeMapEntry, Typemap, TypemapError, WhitelistMap, parse_typemap,
	perform_typemap_negotiation,
};

// Re-export settings
#[cfg(feature = "conf")]
pub use conneg_conf::{NegotiationSettings, SettingsError};

#[cfg(feature = "conf")]
pub use negotiator::ContentNegotiator;

/// Commonly used types, for glob import
pub mod prelude {
	pub use crate::{
		MatchStrategy, Strategy, ValueTuple, parse_header, perform_encoding_negotiation,
		perform_language_negotiation, perform_negotiation, perform_type_negotiation,
	};

	#[cfg(feature = "typemap")]
	pub use crate::{TypeMapEntry, Typemap, perform_typemap_negotiation};

	#[cfg(feature = "conf")]
	pub use crate::{ContentNegotiator, NegotiationSettings};
}
