//! Settings-driven negotiation over raw header values

use conneg_conf::NegotiationSettings;
use conneg_negotiation::header::{header_tuples, parse_header};
use conneg_negotiation::{
	ValueTuple, perform_encoding_negotiation, perform_language_negotiation,
	perform_type_negotiation_with,
};
use conneg_typemap::{TypeMapEntry, WhitelistMap, client_headers, perform_typemap_negotiation};
use http::HeaderMap;
use http::header::{ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE};
use std::collections::HashSet;

/// Negotiator that applies one set of [`NegotiationSettings`] to every request
///
/// Header arguments are the raw header text; `None` means the client did not
/// send the header, which is not the same as sending it empty.
///
/// # Examples
///
/// ```
/// use conneg::{ContentNegotiator, NegotiationSettings, ValueTuple};
///
/// let settings = NegotiationSettings::from_toml_str(r#"type_whitelist = ["text/html"]"#).unwrap();
/// let negotiator = ContentNegotiator::with_settings(settings);
/// let offers = vec![ValueTuple::new("application/json"), ValueTuple::new("text/html")];
///
/// // application/json is only reachable through */* and is not whitelisted
/// let chosen = negotiator.negotiate_type(Some("*/*"), &offers).unwrap();
/// assert_eq!(chosen.value, "text/html");
/// ```
#[derive(Debug, Clone)]
pub struct ContentNegotiator {
	settings: NegotiationSettings,
	encoding_whitelist: Option<HashSet<String>>,
	type_whitelist: Option<HashSet<String>>,
	typemap_whitelist: WhitelistMap,
}

impl ContentNegotiator {
	/// Creates a negotiator with default settings: no whitelists, default weights
	pub fn new() -> Self {
		Self::with_settings(NegotiationSettings::default())
	}

	pub fn with_settings(settings: NegotiationSettings) -> Self {
		Self {
			encoding_whitelist: settings.encoding_whitelist_set(),
			type_whitelist: settings.type_whitelist_set(),
			typemap_whitelist: settings.typemap_whitelist_map(),
			settings,
		}
	}

	pub fn settings(&self) -> &NegotiationSettings {
		&self.settings
	}

	/// Selects a content coding from an `Accept-Encoding` value
	pub fn negotiate_encoding(
		&self,
		accept_encoding: Option<&str>,
		available: &[ValueTuple],
	) -> Option<ValueTuple> {
		perform_encoding_negotiation(
			&client_values(accept_encoding),
			available,
			self.encoding_whitelist.as_ref(),
		)
	}

	/// Selects a media type from an `Accept` value
	pub fn negotiate_type(
		&self,
		accept: Option<&str>,
		available: &[ValueTuple],
	) -> Option<ValueTuple> {
		perform_type_negotiation_with(
			&client_values(accept),
			available,
			self.type_whitelist.as_ref(),
			self.settings.wildcard_weights,
		)
	}

	/// Selects a language from an `Accept-Language` value
	pub fn negotiate_language(
		&self,
		accept_language: Option<&str>,
		available: &[ValueTuple],
	) -> Option<ValueTuple> {
		perform_language_negotiation(&client_values(accept_language), available)
	}

	/// Selects a typemap variant for a request
	pub fn negotiate_typemap<'a>(
		&self,
		headers: &HeaderMap,
		typemap: &'a [TypeMapEntry],
	) -> Option<&'a TypeMapEntry> {
		perform_typemap_negotiation(&client_headers(headers), typemap, &self.typemap_whitelist)
	}

	/// [`negotiate_encoding`](Self::negotiate_encoding) over request headers
	pub fn encoding_for(&self, headers: &HeaderMap, available: &[ValueTuple]) -> Option<ValueTuple> {
		perform_encoding_negotiation(
			&header_tuples(headers, ACCEPT_ENCODING.as_str()),
			available,
			self.encoding_whitelist.as_ref(),
		)
	}

	/// [`negotiate_type`](Self::negotiate_type) over request headers
	pub fn type_for(&self, headers: &HeaderMap, available: &[ValueTuple]) -> Option<ValueTuple> {
		perform_type_negotiation_with(
			&header_tuples(headers, ACCEPT.as_str()),
			available,
			self.type_whitelist.as_ref(),
			self.settings.wildcard_weights,
		)
	}

	/// [`negotiate_language`](Self::negotiate_language) over request headers
	pub fn language_for(&self, headers: &HeaderMap, available: &[ValueTuple]) -> Option<ValueTuple> {
		perform_language_negotiation(&header_tuples(headers, ACCEPT_LANGUAGE.as_str()), available)
	}
}

impl Default for ContentNegotiator {
	fn default() -> Self {
		Self::new()
	}
}

fn client_values(header: Option<&str>) -> Vec<ValueTuple> {
	header.map(parse_header).unwrap_or_default()
}
