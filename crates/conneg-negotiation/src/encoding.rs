//! `Accept-Encoding` negotiation (RFC 7231 §5.3.4)

use crate::engine::{best_offer_by_quality, perform_negotiation};
use crate::strategy::{Strategy, wildcard_value_match};
use crate::value_tuple::ValueTuple;
use std::borrow::Cow;
use std::collections::HashSet;

/// The "no transformation" content coding
pub const IDENTITY: &str = "identity";

/// Adds an implicit `identity;q=1` preference unless the client already covers it
///
/// A client list that mentions `identity` or `*` (with any weight, including
/// `q=0`) is returned unchanged, so explicit overrides keep full control.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::ValueTuple;
/// use conneg_negotiation::encoding::with_implicit_identity;
///
/// let client = vec![ValueTuple::new("gzip")];
/// let augmented = with_implicit_identity(&client);
/// assert_eq!(augmented.len(), 2);
/// assert_eq!(augmented[0].value, "identity");
///
/// let suppressed = vec![ValueTuple::with_quality("*", 0.0)];
/// assert_eq!(with_implicit_identity(&suppressed).len(), 1);
/// ```
pub fn with_implicit_identity(client_values: &[ValueTuple]) -> Cow<'_, [ValueTuple]> {
	let identity = ValueTuple::with_quality(IDENTITY, 1.0);
	if client_values
		.iter()
		.any(|candidate| wildcard_value_match(&identity, candidate))
	{
		return Cow::Borrowed(client_values);
	}

	tracing::debug!("adding implicit identity preference");
	let mut augmented = Vec::with_capacity(client_values.len() + 1);
	augmented.push(identity);
	augmented.extend_from_slice(client_values);
	Cow::Owned(augmented)
}

/// Selects the content coding to respond with
///
/// * An empty `client_values` means the header was absent: the server's
///   highest-`q` offer wins. When a `whitelist` is given, only whitelisted
///   offers (and `identity`) are eligible in that case.
/// * Otherwise the client list is augmented with an implicit `identity` and
///   negotiated with the wildcard strategy.
///
/// Returns `None` when nothing is acceptable.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::ValueTuple;
/// use conneg_negotiation::encoding::perform_encoding_negotiation;
///
/// let server = vec![ValueTuple::new("identity"), ValueTuple::new("gzip")];
///
/// let client = vec![ValueTuple::with_quality("gzip", 0.5)];
/// let chosen = perform_encoding_negotiation(&client, &server, None).unwrap();
/// assert_eq!(chosen.value, "identity");
///
/// let client = vec![
///     ValueTuple::with_quality("gzip", 0.5),
///     ValueTuple::with_quality("identity", 0.0),
/// ];
/// let chosen = perform_encoding_negotiation(&client, &server, None).unwrap();
/// assert_eq!(chosen.value, "gzip");
/// ```
pub fn perform_encoding_negotiation(
	client_values: &[ValueTuple],
	server_values: &[ValueTuple],
	whitelist: Option<&HashSet<String>>,
) -> Option<ValueTuple> {
	if client_values.is_empty() {
		let eligible = server_values.iter().filter(|offer| {
			offer.value == IDENTITY || whitelist.is_none_or(|allowed| allowed.contains(&offer.value))
		});
		return best_offer_by_quality(eligible);
	}

	let client_values = with_implicit_identity(client_values);
	perform_negotiation(&client_values, server_values, &Strategy::Wildcard)
		.into_iter()
		.next()
}
