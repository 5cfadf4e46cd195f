//! Header tokenizing
//!
//! Turns raw header text such as `gzip;q=0.8, br` into [`ValueTuple`]s.
//! Multi-instance headers are merged by flattening each occurrence in order.

use crate::value_tuple::{ParamValue, Properties, QUALITY_PARAM, ValueTuple};
use http::HeaderMap;

/// Splits a comma-delimited header value into tokens
///
/// All whitespace is removed before splitting, so `/` and `*` inside tokens
/// are never treated as separators. An empty header yields a single empty token.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::header::split_header_value;
///
/// assert_eq!(split_header_value("a, b, c"), vec!["a", "b", "c"]);
/// assert_eq!(split_header_value("text/*;q=0.5,*/*"), vec!["text/*;q=0.5", "*/*"]);
/// ```
pub fn split_header_value(header: &str) -> Vec<String> {
	let compact: String = header.chars().filter(|c| !c.is_whitespace()).collect();
	compact.split(',').map(str::to_string).collect()
}

/// Parses a `name;param=value;...` token into a [`ValueTuple`]
///
/// The first `;`-separated segment is the value. `q` parameters are parsed as
/// floats; every other parameter is kept as raw text. A segment without `=`
/// is stored with an empty value, and a `q` that is not a finite number is
/// dropped so the tuple falls back to the default weight.
///
/// # Examples
///
/// ```
/// use conneg_negotiation::header::parse_value_tuple;
///
/// let tuple = parse_value_tuple("foo;a=1;b=2");
/// assert_eq!(tuple.value, "foo");
/// assert_eq!(tuple.text_param("a"), Some("1"));
/// assert_eq!(tuple.text_param("b"), Some("2"));
/// assert_eq!(tuple.q(), 1.0);
/// ```
pub fn parse_value_tuple(token: &str) -> ValueTuple {
	let mut segments = token.split(';');
	let value = segments.next().unwrap_or_default().trim();
	let mut properties = Properties::new();

	for segment in segments {
		let (name, raw) = segment.split_once('=').unwrap_or((segment, ""));
		let (name, raw) = (name.trim(), raw.trim());

		if name == QUALITY_PARAM {
			match raw.parse::<f32>() {
				Ok(q) if q.is_finite() => {
					properties.insert(name.to_string(), ParamValue::Quality(q));
				}
				_ => tracing::debug!(token, raw, "ignoring unparsable q parameter"),
			}
		} else {
			properties.insert(name.to_string(), ParamValue::Text(raw.to_string()));
		}
	}

	ValueTuple::with_properties(value, properties)
}

/// Tokenizes and parses a whole header value
///
/// # Examples
///
/// ```
/// use conneg_negotiation::header::parse_header;
///
/// let tuples = parse_header("gzip;q=0.8, br");
/// assert_eq!(tuples.len(), 2);
/// assert_eq!(tuples[0].q(), 0.8);
/// assert_eq!(tuples[1].value, "br");
/// ```
pub fn parse_header(header: &str) -> Vec<ValueTuple> {
	split_header_value(header)
		.iter()
		.map(|token| parse_value_tuple(token))
		.collect()
}

/// Flattens several occurrences of one header into a single token sequence
///
/// # Examples
///
/// ```
/// use conneg_negotiation::header::flatten_header_values;
///
/// let tokens = flatten_header_values(["gzip, deflate", "br"]);
/// assert_eq!(tokens, vec!["gzip", "deflate", "br"]);
/// ```
pub fn flatten_header_values<I, S>(values: I) -> Vec<String>
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	values
		.into_iter()
		.flat_map(|value| split_header_value(value.as_ref()))
		.collect()
}

/// One raw header occurrence as delivered by a transport layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
	pub key: String,
	pub value: String,
}

impl HeaderRecord {
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

/// Flattens every record whose key names `name` (ASCII case-insensitive)
///
/// # Examples
///
/// ```
/// use conneg_negotiation::header::{HeaderRecord, flatten_header_records};
///
/// let records = vec![
///     HeaderRecord::new("Accept-Encoding", "gzip"),
///     HeaderRecord::new("Accept", "text/html"),
///     HeaderRecord::new("accept-encoding", "br, identity"),
/// ];
/// let tokens = flatten_header_records(&records, "accept-encoding");
/// assert_eq!(tokens, vec!["gzip", "br", "identity"]);
/// ```
pub fn flatten_header_records(records: &[HeaderRecord], name: &str) -> Vec<String> {
	flatten_header_values(
		records
			.iter()
			.filter(|record| record.key.eq_ignore_ascii_case(name))
			.map(|record| record.value.as_str()),
	)
}

/// Collects all occurrences of `name` from an [`http::HeaderMap`] as tokens
///
/// Values that are not visible ASCII are skipped. An absent header yields an
/// empty sequence.
pub fn header_values(headers: &HeaderMap, name: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	for value in headers.get_all(name) {
		match value.to_str() {
			Ok(text) => tokens.extend(split_header_value(text)),
			Err(_) => tracing::debug!(header = name, "skipping non-ASCII header value"),
		}
	}
	tokens
}

/// Parses all occurrences of `name` from an [`http::HeaderMap`] into tuples
pub fn header_tuples(headers: &HeaderMap, name: &str) -> Vec<ValueTuple> {
	header_values(headers, name)
		.iter()
		.map(|token| parse_value_tuple(token))
		.collect()
}
