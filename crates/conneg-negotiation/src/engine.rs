//! Generic negotiation engine
//!
//! Iterates server offers, picks the best accepting client preference for
//! each, and ranks the scored offers. Results are always server-declared
//! values, never a client wildcard.

use crate::strategy::MatchStrategy;
use crate::value_tuple::ValueTuple;

/// A scored server offer together with the client preference that accepted it
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch<'c> {
	/// Copy of the server offer, annotated with its score
	pub offer: ValueTuple,
	/// Best client preference for this offer
	pub accepted_by: &'c ValueTuple,
	/// `accepted_by.q() * offer.q()`
	pub score: f32,
}

/// Scores every server offer and ranks the acceptable ones
///
/// Offers with no matching client preference, or whose score is not
/// positive, are left out. The ranking is a stable sort by descending score,
/// so equal scores keep server order.
pub fn rank_matches<'c, S>(
	client_values: &'c [ValueTuple],
	server_values: &[ValueTuple],
	strategy: &S,
) -> Vec<RankedMatch<'c>>
where
	S: MatchStrategy + ?Sized,
{
	let mut ranked = Vec::new();

	for offer in server_values {
		// min_by keeps the first of equally ranked candidates
		let Some(best) = client_values
			.iter()
			.filter(|candidate| strategy.matches(offer, candidate))
			.min_by(|a, b| strategy.compare(offer, a, b))
		else {
			continue;
		};

		let score = best.q() * offer.q();
		if score.is_nan() || score <= 0.0 {
			tracing::debug!(offer = %offer, accepted_by = %best, score, "offer rejected");
			continue;
		}

		tracing::trace!(offer = %offer, accepted_by = %best, score, "offer accepted");
		ranked.push(RankedMatch {
			offer: offer.scored(score),
			accepted_by: best,
			score,
		});
	}

	ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
	ranked
}

/// Negotiates one header dimension and returns every acceptable offer, best first
///
/// An empty result means nothing the server offers is acceptable.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::{Strategy, ValueTuple, perform_negotiation};
///
/// let client = vec![
///     ValueTuple::new("a"),
///     ValueTuple::new("b"),
///     ValueTuple::with_quality("c", 0.8),
/// ];
/// let server = vec![ValueTuple::with_quality("b", 0.9), ValueTuple::new("c")];
///
/// let ranked = perform_negotiation(&client, &server, &Strategy::Wildcard);
/// assert_eq!(ranked.len(), 2);
/// assert_eq!(ranked[0].value, "b");
/// assert_eq!(ranked[0].score, Some(0.9));
/// assert_eq!(ranked[1].value, "c");
/// ```
pub fn perform_negotiation<S>(
	client_values: &[ValueTuple],
	server_values: &[ValueTuple],
	strategy: &S,
) -> Vec<ValueTuple>
where
	S: MatchStrategy + ?Sized,
{
	rank_matches(client_values, server_values, strategy)
		.into_iter()
		.map(|ranked| ranked.offer)
		.collect()
}

/// Picks the highest-`q` offer when the client stated no preference
///
/// The first offer wins among equal weights. Offers with a non-positive
/// weight are never picked.
pub(crate) fn best_offer_by_quality<'a, I>(offers: I) -> Option<ValueTuple>
where
	I: IntoIterator<Item = &'a ValueTuple>,
{
	let best = offers.into_iter().fold(None::<&ValueTuple>, |best, offer| match best {
		Some(current) if current.q() >= offer.q() => Some(current),
		_ => Some(offer),
	})?;

	let q = best.q();
	(q > 0.0).then(|| best.scored(q))
}
