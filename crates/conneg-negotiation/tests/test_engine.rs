use conneg_negotiation::{
	MatchStrategy, Strategy, ValueTuple, parameter_match, perform_negotiation,
};
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn test_ranked_by_score() {
	let client = vec![
		ValueTuple::with_quality("a", 1.0),
		ValueTuple::with_quality("b", 1.0),
		ValueTuple::with_quality("c", 0.8),
	];
	let server = vec![ValueTuple::with_quality("b", 0.9), ValueTuple::with_quality("c", 1.0)];

	let ranked = perform_negotiation(&client, &server, &Strategy::Wildcard);
	let summary: Vec<(&str, Option<f32>)> = ranked
		.iter()
		.map(|t| (t.value.as_str(), t.score))
		.collect();
	assert_eq!(summary, vec![("b", Some(0.9)), ("c", Some(0.8))]);
}

#[test]
fn test_results_copy_server_properties() {
	let client = vec![ValueTuple::new("*")];
	let server = vec![ValueTuple::with_quality("gzip", 0.7).param("level", "9")];

	let ranked = perform_negotiation(&client, &server, &Strategy::Wildcard);
	assert_eq!(ranked[0].properties, server[0].properties);
	assert_eq!(server[0].score, None);
}

/// Prefers shorter values; accepts any client value sharing the first byte
struct FirstLetter;

impl MatchStrategy for FirstLetter {
	fn matches(&self, server: &ValueTuple, client: &ValueTuple) -> bool {
		server.value.bytes().next() == client.value.bytes().next()
	}

	fn compare(&self, _server: &ValueTuple, a: &ValueTuple, b: &ValueTuple) -> Ordering {
		a.value.len().cmp(&b.value.len())
	}
}

#[test]
fn test_custom_strategy() {
	let client = vec![
		ValueTuple::with_quality("apple", 0.2),
		ValueTuple::with_quality("ax", 0.6),
	];
	let server = vec![ValueTuple::new("avocado"), ValueTuple::new("banana")];

	let ranked = perform_negotiation(&client, &server, &FirstLetter);
	assert_eq!(ranked.len(), 1);
	assert_eq!(ranked[0].value, "avocado");
	assert_eq!(ranked[0].score, Some(0.6));
}

fn params() -> impl proptest::strategy::Strategy<Value = Vec<(String, String)>> {
	prop::collection::vec(("[abc]", "[12]"), 0..3)
}

fn tuple_with(value: &str, params: &[(String, String)]) -> ValueTuple {
	params
		.iter()
		.fold(ValueTuple::new(value), |tuple, (k, v)| tuple.param(k.clone(), v.clone()))
}

fn token() -> impl proptest::strategy::Strategy<Value = String> {
	prop_oneof![Just("*".to_string()), "[xyz]"]
}

proptest! {
	#[test]
	fn prop_parameter_match_characterization(server in params(), client in params()) {
		let s = tuple_with("v", &server);
		let c = tuple_with("v", &client);

		let server_ok = s.properties.iter().all(|(k, v)| c.properties.get(k).is_none_or(|cv| cv == v));
		let client_ok = c.properties.keys().all(|k| s.properties.contains_key(k));
		prop_assert_eq!(parameter_match(&s, &c), server_ok && client_ok);
	}

	#[test]
	fn prop_negotiation_is_idempotent(
		client in prop::collection::vec((token(), 0u8..=10), 0..5),
		server in prop::collection::vec((token(), 0u8..=10), 0..5),
	) {
		let client: Vec<_> = client.iter().map(|(v, q)| ValueTuple::with_quality(v.clone(), f32::from(*q) / 10.0)).collect();
		let server: Vec<_> = server.iter().map(|(v, q)| ValueTuple::with_quality(v.clone(), f32::from(*q) / 10.0)).collect();

		let first = perform_negotiation(&client, &server, &Strategy::Wildcard);
		let second = perform_negotiation(&client, &server, &Strategy::Wildcard);
		prop_assert_eq!(&first, &second);

		for pair in first.windows(2) {
			prop_assert!(pair[0].score() >= pair[1].score());
		}
		for result in &first {
			prop_assert!(result.score() > 0.0);
		}
	}
}
