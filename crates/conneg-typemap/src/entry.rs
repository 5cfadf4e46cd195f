//! Typemap entries: one representation variant each

use conneg_negotiation::ValueTuple;
use indexmap::IndexMap;
use std::fmt;

/// Header carrying a variant's media type
pub const CONTENT_TYPE: &str = "content-type";

/// Header carrying a variant's content coding
pub const CONTENT_ENCODING: &str = "content-encoding";

/// Header carrying a variant's language
pub const CONTENT_LANGUAGE: &str = "content-language";

/// A representation variant described by a typemap
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeMapEntry {
	/// Identifier or file name of the variant
	pub uri: String,
	/// Variant headers keyed by lower-cased name
	pub headers: IndexMap<String, Vec<ValueTuple>>,
}

impl TypeMapEntry {
	/// Creates an entry without headers
	///
	/// # Examples
	///
	/// ```
	/// use conneg_typemap::TypeMapEntry;
	/// use conneg_negotiation::ValueTuple;
	///
	/// let entry = TypeMapEntry::new("index.en.html")
	///     .with_header("Content-Type", vec![ValueTuple::new("text/html")]);
	/// assert_eq!(entry.content_type()[0].value, "text/html");
	/// ```
	pub fn new(uri: impl Into<String>) -> Self {
		Self {
			uri: uri.into(),
			headers: IndexMap::new(),
		}
	}

	/// Adds a header; the name is lower-cased
	pub fn with_header(mut self, name: &str, values: Vec<ValueTuple>) -> Self {
		self.headers.insert(name.to_lowercase(), values);
		self
	}

	/// Values of a header, empty when the entry does not declare it
	pub fn header(&self, name: &str) -> &[ValueTuple] {
		self.headers
			.get(&name.to_lowercase())
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	pub fn content_type(&self) -> &[ValueTuple] {
		self.header(CONTENT_TYPE)
	}

	pub fn content_encoding(&self) -> &[ValueTuple] {
		self.header(CONTENT_ENCODING)
	}

	pub fn content_language(&self) -> &[ValueTuple] {
		self.header(CONTENT_LANGUAGE)
	}
}

/// Writes the entry in typemap record form, without the trailing blank line
impl fmt::Display for TypeMapEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "URI: {}", self.uri)?;
		for (name, values) in &self.headers {
			write!(f, "{}: ", name)?;
			for (i, value) in values.iter().enumerate() {
				if i > 0 {
					f.write_str(", ")?;
				}
				write!(f, "{}", value)?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_header_lookup_is_case_insensitive() {
		let entry = TypeMapEntry::new("a").with_header("Content-Language", vec![ValueTuple::new("en")]);
		assert_eq!(entry.header("CONTENT-LANGUAGE").len(), 1);
		assert_eq!(entry.content_language()[0].value, "en");
		assert!(entry.content_encoding().is_empty());
	}

	#[rstest]
	fn test_display() {
		let entry = TypeMapEntry::new("foo.fr.html")
			.with_header(
				"Content-Type",
				vec![ValueTuple::new("text/html").param("charset", "iso-8859-2")],
			)
			.with_header(
				"Content-Language",
				vec![ValueTuple::new("fr"), ValueTuple::with_quality("de", 0.5)],
			);

		assert_eq!(
			entry.to_string(),
			"URI: foo.fr.html\ncontent-type: text/html;charset=iso-8859-2\ncontent-language: fr, de;q=0.5\n"
		);
	}
}
