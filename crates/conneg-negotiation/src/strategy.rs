//! Value matching strategies
//!
//! Each strategy pairs a match predicate with a comparator that ranks client
//! candidates already known to match the same server offer. The comparator
//! returns [`Ordering::Less`] when `a` is preferred over `b`.

use crate::parameters::{parameter_compare, parameter_match};
use crate::value_tuple::ValueTuple;
use std::cmp::Ordering;

/// Client-side wildcard token
pub const WILDCARD: &str = "*";

/// Match predicate and comparator used by the negotiation engine
pub trait MatchStrategy {
	/// Whether `client` accepts the server offer
	fn matches(&self, server: &ValueTuple, client: &ValueTuple) -> bool;

	/// Ranks two matching client candidates for `server`
	fn compare(&self, server: &ValueTuple, a: &ValueTuple, b: &ValueTuple) -> Ordering;
}

/// Built-in strategies, one per header family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Verbatim value equality, no wildcards
	Exact,
	/// Verbatim equality or a client `*` (`Accept-Encoding`, `Accept-Language`)
	Wildcard,
	/// `type/subtype` ranges with per-component wildcards (`Accept`)
	MediaRange,
}

impl MatchStrategy for Strategy {
	fn matches(&self, server: &ValueTuple, client: &ValueTuple) -> bool {
		match self {
			Strategy::Exact => exact_value_match(server, client),
			Strategy::Wildcard => wildcard_value_match(server, client),
			Strategy::MediaRange => media_range_value_match(server, client),
		}
	}

	fn compare(&self, server: &ValueTuple, a: &ValueTuple, b: &ValueTuple) -> Ordering {
		match self {
			Strategy::Exact => exact_value_compare(server, a, b),
			Strategy::Wildcard => wildcard_value_compare(server, a, b),
			Strategy::MediaRange => media_range_value_compare(server, a, b),
		}
	}
}

/// Literal server value, or a literal `*` supplied by the client
fn literal_or_wildcard(server: &str, client: &str) -> bool {
	server == client || client == WILDCARD
}

/// Literal values outrank `*`
fn wildcard_rank(a: &str, b: &str) -> Ordering {
	match (a == WILDCARD, b == WILDCARD) {
		(false, true) => Ordering::Less,
		(true, false) => Ordering::Greater,
		_ => Ordering::Equal,
	}
}

/// Splits `type/subtype`; a value without `/` has an empty subtype
pub fn split_media_range(value: &str) -> (&str, &str) {
	value.split_once('/').unwrap_or((value, ""))
}

pub fn exact_value_match(server: &ValueTuple, client: &ValueTuple) -> bool {
	server.value == client.value && parameter_match(server, client)
}

pub fn exact_value_compare(server: &ValueTuple, a: &ValueTuple, b: &ValueTuple) -> Ordering {
	parameter_compare(server, a, b)
}

/// Matches a literal value or a client `*`
///
/// The relation is asymmetric: a server `*` is only accepted by a client `*`.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::ValueTuple;
/// use conneg_negotiation::strategy::wildcard_value_match;
///
/// assert!(wildcard_value_match(&ValueTuple::new("a"), &ValueTuple::new("*")));
/// assert!(!wildcard_value_match(&ValueTuple::new("*"), &ValueTuple::new("a")));
/// ```
pub fn wildcard_value_match(server: &ValueTuple, client: &ValueTuple) -> bool {
	literal_or_wildcard(&server.value, &client.value) && parameter_match(server, client)
}

pub fn wildcard_value_compare(server: &ValueTuple, a: &ValueTuple, b: &ValueTuple) -> Ordering {
	wildcard_rank(&a.value, &b.value).then_with(|| parameter_compare(server, a, b))
}

/// Matches `type/subtype` media ranges component by component
///
/// # Examples
///
/// ```
/// use conneg_negotiation::ValueTuple;
/// use conneg_negotiation::strategy::media_range_value_match;
///
/// let html = ValueTuple::new("text/html");
/// assert!(media_range_value_match(&html, &ValueTuple::new("text/*")));
/// assert!(media_range_value_match(&html, &ValueTuple::new("*/*")));
/// assert!(!media_range_value_match(&html, &ValueTuple::new("image/*")));
/// ```
pub fn media_range_value_match(server: &ValueTuple, client: &ValueTuple) -> bool {
	let (server_type, server_subtype) = split_media_range(&server.value);
	let (client_type, client_subtype) = split_media_range(&client.value);

	literal_or_wildcard(server_type, client_type)
		&& literal_or_wildcard(server_subtype, client_subtype)
		&& parameter_match(server, client)
}

/// Orders media ranges: exact/exact, exact/*, */exact, */*
///
/// Parameter specificity and then `q` break ties within the same pattern class.
pub fn media_range_value_compare(server: &ValueTuple, a: &ValueTuple, b: &ValueTuple) -> Ordering {
	let (a_type, a_subtype) = split_media_range(&a.value);
	let (b_type, b_subtype) = split_media_range(&b.value);

	wildcard_rank(a_type, b_type)
		.then_with(|| wildcard_rank(a_subtype, b_subtype))
		.then_with(|| parameter_compare(server, a, b))
}
