//! Variant selection over a typemap

use crate::entry::{CONTENT_TYPE, TypeMapEntry};
use crate::parser::Typemap;
use conneg_negotiation::ValueTuple;
use conneg_negotiation::header::header_tuples;
use conneg_negotiation::media_type::perform_type_negotiation;
use http::HeaderMap;
use std::collections::{HashMap, HashSet};

/// Client header carrying media range preferences
pub const ACCEPT: &str = "accept";

/// Client headers keyed by lower-cased name
pub type ClientHeaders = HashMap<String, Vec<ValueTuple>>;

/// Whitelists keyed by lower-cased variant header name (e.g. `content-type`)
pub type WhitelistMap = HashMap<String, HashSet<String>>;

/// Parses the negotiation-relevant request headers out of an [`http::HeaderMap`]
///
/// Only headers that are present end up in the map.
pub fn client_headers(headers: &HeaderMap) -> ClientHeaders {
	let mut client = ClientHeaders::new();
	for name in headers.keys() {
		let key = name.as_str();
		if key.starts_with("accept") {
			client.insert(key.to_string(), header_tuples(headers, key));
		}
	}
	client
}

/// Returns the first variant whose `content-type` is acceptable to the client
///
/// Each entry's `content-type` values are negotiated against the client's
/// `accept` values, using the whitelist stored under `content-type`. Entries
/// are tried in declaration order; `None` means no variant is acceptable.
///
/// # Examples
///
/// ```
/// use conneg_typemap::{ClientHeaders, WhitelistMap, parse_typemap, perform_typemap_negotiation};
/// use conneg_negotiation::header::parse_header;
///
/// let typemap = parse_typemap(
///     "URI: foo.html\nContent-Type: text/html\n\nURI: foo.json\nContent-Type: application/json\n",
/// );
/// let mut client = ClientHeaders::new();
/// client.insert("accept".to_string(), parse_header("application/json"));
///
/// let chosen = perform_typemap_negotiation(&client, &typemap, &WhitelistMap::new()).unwrap();
/// assert_eq!(chosen.uri, "foo.json");
/// ```
pub fn perform_typemap_negotiation<'a>(
	client_headers: &ClientHeaders,
	server_typemap: &'a [TypeMapEntry],
	whitelist_map: &WhitelistMap,
) -> Option<&'a TypeMapEntry> {
	let accept = client_headers
		.get(ACCEPT)
		.map(Vec::as_slice)
		.unwrap_or_default();
	let whitelist = whitelist_map.get(CONTENT_TYPE);

	let chosen = server_typemap
		.iter()
		.find(|entry| perform_type_negotiation(accept, entry.content_type(), whitelist).is_some());

	match chosen {
		Some(entry) => tracing::debug!(uri = %entry.uri, "typemap variant selected"),
		None => tracing::debug!(variants = server_typemap.len(), "no acceptable typemap variant"),
	}
	chosen
}

impl Typemap {
	/// Selects a variant; see [`perform_typemap_negotiation`]
	pub fn negotiate(
		&self,
		client_headers: &ClientHeaders,
		whitelist_map: &WhitelistMap,
	) -> Option<&TypeMapEntry> {
		perform_typemap_negotiation(client_headers, self.entries(), whitelist_map)
	}
}
