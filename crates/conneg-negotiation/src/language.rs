//! `Accept-Language` negotiation (RFC 7231 §5.3.5)
//!
//! Language tags are compared verbatim; callers that want case-insensitive
//! tags should normalize both sides first.

use crate::engine::{best_offer_by_quality, perform_negotiation};
use crate::strategy::Strategy;
use crate::value_tuple::ValueTuple;

/// Selects the content language to respond with
///
/// An empty `client_values` means the header was absent and the server's
/// highest-`q` offer wins. Otherwise `*` in the header accepts any offered
/// language.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::header::parse_header;
/// use conneg_negotiation::ValueTuple;
/// use conneg_negotiation::language::perform_language_negotiation;
///
/// let available = vec![ValueTuple::new("en"), ValueTuple::new("fr"), ValueTuple::new("ja")];
///
/// let client = parse_header("ja;q=0.5, fr;q=0.8, en;q=1.0");
/// let chosen = perform_language_negotiation(&client, &available).unwrap();
/// assert_eq!(chosen.value, "en");
///
/// let client = parse_header("de");
/// assert!(perform_language_negotiation(&client, &available).is_none());
/// ```
pub fn perform_language_negotiation(
	client_values: &[ValueTuple],
	server_values: &[ValueTuple],
) -> Option<ValueTuple> {
	if client_values.is_empty() {
		return best_offer_by_quality(server_values);
	}

	perform_negotiation(client_values, server_values, &Strategy::Wildcard)
		.into_iter()
		.next()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::header::parse_header;
	use rstest::rstest;

	fn available() -> Vec<ValueTuple> {
		vec![
			ValueTuple::new("en"),
			ValueTuple::new("fr"),
			ValueTuple::new("ja"),
		]
	}

	#[rstest]
	#[case("fr", "fr")]
	#[case("fr;q=0.5, en;q=0.9", "en")]
	#[case("de, *;q=0.1", "en")]
	#[case("*, en;q=0.2", "fr")]
	fn test_negotiate(#[case] header: &str, #[case] expected: &str) {
		let chosen = perform_language_negotiation(&parse_header(header), &available()).unwrap();
		assert_eq!(chosen.value, expected);
	}

	#[rstest]
	fn test_absent_header_uses_server_preference() {
		let server = vec![ValueTuple::with_quality("en", 0.9), ValueTuple::new("fr")];
		let chosen = perform_language_negotiation(&[], &server).unwrap();
		assert_eq!(chosen.value, "fr");
	}

	#[rstest]
	fn test_no_match() {
		assert!(perform_language_negotiation(&parse_header("de, es"), &available()).is_none());
	}
}
