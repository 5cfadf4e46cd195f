//! Parameter matching and specificity ranking
//!
//! The `q` parameter is ignored here; it only takes part as the final
//! tie-breaker in [`parameter_compare`].

use crate::value_tuple::{QUALITY_PARAM, ValueTuple};
use std::cmp::Ordering;

fn is_quality(name: &str) -> bool {
	name == QUALITY_PARAM
}

/// Checks whether a server offer's parameters satisfy a client preference
///
/// Every parameter the server declares must carry the same value on the
/// client, unless the client omits it. Every parameter the client declares
/// must also be declared by the server.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::ValueTuple;
/// use conneg_negotiation::parameters::parameter_match;
///
/// let server = ValueTuple::new("text/html").param("level", "1");
///
/// assert!(parameter_match(&server, &ValueTuple::new("text/html")));
/// assert!(parameter_match(&server, &ValueTuple::new("text/html").param("level", "1")));
/// assert!(!parameter_match(&server, &ValueTuple::new("text/html").param("level", "2")));
/// assert!(!parameter_match(&server, &ValueTuple::new("text/html").param("charset", "utf-8")));
/// ```
pub fn parameter_match(server: &ValueTuple, client: &ValueTuple) -> bool {
	let server_satisfied = server
		.properties
		.iter()
		.filter(|(name, _)| !is_quality(name))
		.all(|(name, value)| client.properties.get(name).is_none_or(|c| c == value));

	let client_declared = client
		.properties
		.keys()
		.filter(|name| !is_quality(name))
		.all(|name| server.properties.contains_key(name));

	server_satisfied && client_declared
}

/// Ranks two client candidates that both matched `server`
///
/// The candidate sharing more (non-`q`) parameter names with the server sorts
/// first; ties go to the higher `q`. [`Ordering::Less`] means `a` is preferred.
pub fn parameter_compare(server: &ValueTuple, a: &ValueTuple, b: &ValueTuple) -> Ordering {
	let shared = |candidate: &ValueTuple| {
		candidate
			.properties
			.keys()
			.filter(|name| !is_quality(name) && server.properties.contains_key(*name))
			.count()
	};

	shared(b)
		.cmp(&shared(a))
		.then_with(|| b.q().total_cmp(&a.q()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_quality_is_ignored() {
		let server = ValueTuple::with_quality("a", 0.1);
		let client = ValueTuple::with_quality("a", 0.9);
		assert!(parameter_match(&server, &client));
	}

	#[rstest]
	fn test_client_omission_accepts() {
		let server = ValueTuple::new("a").param("x", "1").param("y", "2");
		assert!(parameter_match(&server, &ValueTuple::new("a")));
		assert!(parameter_match(&server, &ValueTuple::new("a").param("y", "2")));
	}

	#[rstest]
	fn test_client_extra_key_rejects() {
		let server = ValueTuple::new("a");
		let client = ValueTuple::new("a").param("x", "1");
		assert!(!parameter_match(&server, &client));
	}

	#[rstest]
	fn test_more_specific_wins() {
		let server = ValueTuple::new("a").param("x", "1").param("y", "2");
		let specific = ValueTuple::with_quality("a", 0.1).param("x", "1");
		let general = ValueTuple::new("a");

		assert_eq!(parameter_compare(&server, &specific, &general), Ordering::Less);
		assert_eq!(parameter_compare(&server, &general, &specific), Ordering::Greater);
	}

	#[rstest]
	#[case(0.9, 0.5, Ordering::Less)]
	#[case(0.5, 0.9, Ordering::Greater)]
	#[case(0.7, 0.7, Ordering::Equal)]
	fn test_quality_breaks_ties(#[case] qa: f32, #[case] qb: f32, #[case] expected: Ordering) {
		let server = ValueTuple::new("a");
		let a = ValueTuple::with_quality("a", qa);
		let b = ValueTuple::with_quality("a", qb);
		assert_eq!(parameter_compare(&server, &a, &b), expected);
	}
}
