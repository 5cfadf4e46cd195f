//! Value tuples: a header token together with its parameters

use indexmap::IndexMap;
use std::fmt;

/// Name of the quality parameter
pub const QUALITY_PARAM: &str = "q";

/// A single parameter value attached to a [`ValueTuple`]
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	/// Raw parameter text, compared verbatim
	Text(String),
	/// A parsed `q` weight
	Quality(f32),
}

impl ParamValue {
	/// Returns the raw text, if this is a text parameter
	pub fn as_text(&self) -> Option<&str> {
		match self {
			ParamValue::Text(text) => Some(text),
			ParamValue::Quality(_) => None,
		}
	}

	/// Returns the weight, if this is a quality parameter
	pub fn as_quality(&self) -> Option<f32> {
		match self {
			ParamValue::Quality(q) => Some(*q),
			ParamValue::Text(_) => None,
		}
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParamValue::Text(text) => f.write_str(text),
			ParamValue::Quality(q) => write!(f, "{}", q),
		}
	}
}

/// Ordered parameter set of a [`ValueTuple`]
///
/// Iteration follows insertion order; equality ignores it.
pub type Properties = IndexMap<String, ParamValue>;

/// The unit of negotiation: a value such as `gzip` or `text/html` plus its parameters
///
/// The `q` weight lives in `properties` like any other parameter and is read
/// through [`ValueTuple::q`], which defaults to `1.0` when it is absent.
/// `score` is only set on tuples produced by negotiation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueTuple {
	/// Token value, case preserved
	pub value: String,
	/// Parameters keyed by name
	pub properties: Properties,
	/// Computed match weight, present on negotiation results only
	pub score: Option<f32>,
}

impl ValueTuple {
	/// Creates a tuple without parameters
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::ValueTuple;
	///
	/// let gzip = ValueTuple::new("gzip");
	/// assert_eq!(gzip.value, "gzip");
	/// assert_eq!(gzip.q(), 1.0);
	/// assert!(gzip.properties.is_empty());
	/// ```
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			properties: Properties::new(),
			score: None,
		}
	}

	/// Creates a tuple carrying an explicit `q` parameter
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::ValueTuple;
	///
	/// let br = ValueTuple::with_quality("br", 0.5);
	/// assert_eq!(br.q(), 0.5);
	/// assert!(br.has_explicit_quality());
	/// ```
	pub fn with_quality(value: impl Into<String>, q: f32) -> Self {
		Self::new(value).param_quality(q)
	}

	/// Creates a tuple from a value and an existing parameter set
	pub fn with_properties(value: impl Into<String>, properties: Properties) -> Self {
		Self {
			value: value.into(),
			properties,
			score: None,
		}
	}

	/// Adds a text parameter
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::ValueTuple;
	///
	/// let html = ValueTuple::new("text/html").param("charset", "utf-8");
	/// assert_eq!(html.to_string(), "text/html;charset=utf-8");
	/// ```
	pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.properties
			.insert(name.into(), ParamValue::Text(value.into()));
		self
	}

	/// Sets the `q` parameter
	pub fn param_quality(mut self, q: f32) -> Self {
		self.properties
			.insert(QUALITY_PARAM.to_string(), ParamValue::Quality(q));
		self
	}

	/// Parses a `name;param=value;...` token
	///
	/// See [`crate::header::parse_value_tuple`].
	///
	/// # Examples
	///
	/// ```
	/// use conneg_negotiation::ValueTuple;
	///
	/// let tuple = ValueTuple::parse("text/html;level=1;q=0.25");
	/// assert_eq!(tuple.value, "text/html");
	/// assert_eq!(tuple.q(), 0.25);
	/// assert_eq!(tuple.text_param("level"), Some("1"));
	/// ```
	pub fn parse(token: &str) -> Self {
		crate::header::parse_value_tuple(token)
	}

	/// Quality weight, `1.0` when no `q` parameter is present
	pub fn q(&self) -> f32 {
		self.properties
			.get(QUALITY_PARAM)
			.and_then(ParamValue::as_quality)
			.unwrap_or(1.0)
	}

	/// Whether the tuple carries its own `q` parameter
	pub fn has_explicit_quality(&self) -> bool {
		self.properties.contains_key(QUALITY_PARAM)
	}

	/// Returns a text parameter by name
	pub fn text_param(&self, name: &str) -> Option<&str> {
		self.properties.get(name).and_then(ParamValue::as_text)
	}

	/// Computed negotiation score, or `0.0` for tuples that were never scored
	pub fn score(&self) -> f32 {
		self.score.unwrap_or(0.0)
	}

	/// Returns a copy annotated with `score`
	pub fn scored(&self, score: f32) -> Self {
		Self {
			value: self.value.clone(),
			properties: self.properties.clone(),
			score: Some(score),
		}
	}

	/// Returns a copy whose `q` parameter is replaced, leaving `self` untouched
	pub fn reweighted(&self, q: f32) -> Self {
		Self::with_properties(self.value.clone(), self.properties.clone()).param_quality(q)
	}
}

impl From<&str> for ValueTuple {
	fn from(token: &str) -> Self {
		Self::parse(token)
	}
}

impl fmt::Display for ValueTuple {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.value)?;
		for (name, value) in &self.properties {
			match value {
				ParamValue::Text(text) if text.is_empty() => write!(f, ";{}", name)?,
				_ => write!(f, ";{}={}", name, value)?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_quality() {
		let tuple = ValueTuple::new("gzip");
		assert_eq!(tuple.q(), 1.0);
		assert!(!tuple.has_explicit_quality());
		assert_eq!(tuple.score, None);
	}

	#[rstest]
	fn test_reweighted_leaves_original() {
		let original = ValueTuple::new("*/*").param("level", "1");
		let weighted = original.reweighted(0.01);

		assert_eq!(weighted.q(), 0.01);
		assert_eq!(weighted.text_param("level"), Some("1"));
		assert!(!original.has_explicit_quality());
	}

	#[rstest]
	fn test_scored_copies_properties() {
		let offer = ValueTuple::with_quality("br", 0.5).param("x", "y");
		let result = offer.scored(0.25);

		assert_eq!(result.score, Some(0.25));
		assert_eq!(result.properties, offer.properties);
		assert_eq!(offer.score, None);
	}

	#[rstest]
	fn test_equality_ignores_parameter_order() {
		let a = ValueTuple::new("a").param("x", "1").param("y", "2");
		let b = ValueTuple::new("a").param("y", "2").param("x", "1");
		assert_eq!(a, b);
	}

	#[rstest]
	#[case(ValueTuple::new("gzip"), "gzip")]
	#[case(ValueTuple::with_quality("br", 0.5), "br;q=0.5")]
	#[case(ValueTuple::new("text/html").param("level", "1").param_quality(1.0), "text/html;level=1;q=1")]
	#[case(ValueTuple::new("a").param("flag", ""), "a;flag")]
	fn test_display(#[case] tuple: ValueTuple, #[case] expected: &str) {
		assert_eq!(tuple.to_string(), expected);
	}
}
