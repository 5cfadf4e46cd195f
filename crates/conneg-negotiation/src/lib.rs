//! # Conneg Negotiation
//!
//! Weighted (`q`-value) content negotiation for `Accept`-style HTTP headers,
//! following RFC 7231 §5.3.
//!
//! Negotiation runs over two lists of [`ValueTuple`]s for a single header
//! dimension: the client's preferences and the server's offers. A
//! [`MatchStrategy`] decides which client preferences accept an offer and
//! which of them is most specific; the engine scores every offer as
//! `client q * server q` and ranks the acceptable ones.
//!
//! ## Strategies
//!
//! - [`Strategy::Exact`]: verbatim values
//! - [`Strategy::Wildcard`]: verbatim values or a client `*` (`Accept-Encoding`, `Accept-Language`)
//! - [`Strategy::MediaRange`]: `type/subtype` with per-component wildcards (`Accept`)
//!
//! ## Examples
//!
//! ```
//! use conneg_negotiation::header::parse_header;
//! use conneg_negotiation::{ValueTuple, perform_encoding_negotiation, perform_type_negotiation};
//!
//! let accept = parse_header("text/html, application/json;q=0.9, */*;q=0.1");
//! let offers = vec![ValueTuple::new("application/json"), ValueTuple::new("text/html")];
//! let chosen = perform_type_negotiation(&accept, &offers, None).unwrap();
//! assert_eq!(chosen.value, "text/html");
//!
//! let accept_encoding = parse_header("gzip, br;q=0.9");
//! let codings = vec![ValueTuple::new("br"), ValueTuple::new("gzip")];
//! let chosen = perform_encoding_negotiation(&accept_encoding, &codings, None).unwrap();
//! assert_eq!(chosen.value, "gzip");
//! ```

pub mod encoding;
pub mod engine;
pub mod header;
pub mod language;
pub mod media_type;
pub mod parameters;
pub mod strategy;
pub mod value_tuple;

pub use encoding::{IDENTITY, perform_encoding_negotiation, with_implicit_identity};
pub use engine::{RankedMatch, perform_negotiation, rank_matches};
pub use header::{HeaderRecord, parse_header, parse_value_tuple, split_header_value};
pub use language::perform_language_negotiation;
pub use media_type::{
	ANY_MEDIA_RANGE, WildcardWeights, perform_type_negotiation, perform_type_negotiation_with,
};
pub use parameters::{parameter_compare, parameter_match};
pub use strategy::{MatchStrategy, Strategy, WILDCARD};
pub use value_tuple::{ParamValue, Properties, ValueTuple};
