//! `Accept` negotiation over media ranges (RFC 7231 §5.3.2)
//!
//! Wildcard ranges without an explicit weight are demoted so that concrete
//! media types win, following Apache's negotiation heuristic.

use crate::engine::{RankedMatch, rank_matches};
use crate::strategy::{Strategy, WILDCARD, split_media_range};
use crate::value_tuple::ValueTuple;
use std::borrow::Cow;
use std::collections::HashSet;

/// Range matching every media type
pub const ANY_MEDIA_RANGE: &str = "*/*";

/// Implicit weights for wildcard ranges that carry no `q`
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WildcardWeights {
	/// Weight of `*/*`
	pub full: f32,
	/// Weight of `type/*`
	pub subtype: f32,
}

impl Default for WildcardWeights {
	fn default() -> Self {
		Self {
			full: 0.01,
			subtype: 0.02,
		}
	}
}

/// Applies implicit wildcard weights when no client range states a `q`
///
/// The input is never modified; reweighted ranges are copies. As soon as any
/// range in the list has an explicit `q`, the list is returned as given.
pub fn apply_wildcard_weights(
	client_values: &[ValueTuple],
	weights: WildcardWeights,
) -> Cow<'_, [ValueTuple]> {
	if client_values.iter().any(ValueTuple::has_explicit_quality) {
		return Cow::Borrowed(client_values);
	}

	let weighted = client_values
		.iter()
		.map(|range| match split_media_range(&range.value) {
			(WILDCARD, WILDCARD) => range.reweighted(weights.full),
			(_, WILDCARD) => range.reweighted(weights.subtype),
			_ => range.clone(),
		})
		.collect();

	tracing::debug!(?weights, "applied implicit wildcard weights");
	Cow::Owned(weighted)
}

/// Whether the client range accepted the offer through a type or subtype wildcard
fn reached_by_wildcard(ranked: &RankedMatch<'_>) -> bool {
	let (range_type, range_subtype) = split_media_range(&ranked.accepted_by.value);
	range_type == WILDCARD || range_subtype == WILDCARD
}

/// Selects the media type to respond with, using the default wildcard weights
///
/// # Examples
///
/// ```
/// use conneg_negotiation::ValueTuple;
/// use conneg_negotiation::media_type::perform_type_negotiation;
///
/// let client = vec![ValueTuple::new("text/plain"), ValueTuple::new("*/*")];
/// let server = vec![
///     ValueTuple::with_quality("text/plain", 0.009),
///     ValueTuple::new("text/html"),
/// ];
///
/// let chosen = perform_type_negotiation(&client, &server, None).unwrap();
/// assert_eq!(chosen.value, "text/html");
/// ```
pub fn perform_type_negotiation(
	client_values: &[ValueTuple],
	server_values: &[ValueTuple],
	whitelist: Option<&HashSet<String>>,
) -> Option<ValueTuple> {
	perform_type_negotiation_with(
		client_values,
		server_values,
		whitelist,
		WildcardWeights::default(),
	)
}

/// Selects the media type to respond with
///
/// An empty `client_values` is read as `*/*`. With a `whitelist`, offers that
/// were only accepted through a wildcard range must be whitelisted; rejected
/// offers fall through to the next-ranked candidate.
pub fn perform_type_negotiation_with(
	client_values: &[ValueTuple],
	server_values: &[ValueTuple],
	whitelist: Option<&HashSet<String>>,
	weights: WildcardWeights,
) -> Option<ValueTuple> {
	let any = [ValueTuple::new(ANY_MEDIA_RANGE)];
	let client_values = if client_values.is_empty() {
		&any[..]
	} else {
		client_values
	};

	let weighted = apply_wildcard_weights(client_values, weights);
	rank_matches(&weighted, server_values, &Strategy::MediaRange)
		.into_iter()
		.find(|ranked| match whitelist {
			Some(allowed) if reached_by_wildcard(ranked) => {
				let permitted = allowed.contains(&ranked.offer.value);
				if !permitted {
					tracing::debug!(offer = %ranked.offer, "wildcard match not whitelisted");
				}
				permitted
			}
			_ => true,
		})
		.map(|ranked| ranked.offer)
}
