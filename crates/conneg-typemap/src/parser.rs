//! Typemap text parser
//!
//! ```text
//! URI: foo
//!
//! URI: foo.en.html
//! Content-Type: text/html
//! Content-Language: en
//!
//! URI: foo.fr.html
//! Content-Type: text/html;charset=iso-8859-2
//! Content-Language: fr
//! ```
//!
//! A blank line (or the end of input) closes an entry. Lines starting with
//! `#` are comments. Header names are lower-cased; values other than `URI`
//! are tokenized into value tuples.

use crate::entry::TypeMapEntry;
use crate::error::{TypemapError, TypemapResult};
use conneg_negotiation::ValueTuple;
use conneg_negotiation::header::parse_header;
use indexmap::IndexMap;
use std::fmt;
use std::io::Read;

const URI_KEY: &str = "uri";

/// Entry being assembled while lines are read
#[derive(Debug, Default)]
struct PendingEntry {
	uri: Option<String>,
	headers: IndexMap<String, Vec<ValueTuple>>,
	malformed: bool,
}

impl PendingEntry {
	fn is_blank(&self) -> bool {
		self.uri.is_none() && self.headers.is_empty() && !self.malformed
	}

	/// Closes the entry; malformed or URI-less entries are dropped
	fn finish(self) -> Option<TypeMapEntry> {
		if self.is_blank() {
			return None;
		}
		if self.malformed {
			tracing::debug!(uri = ?self.uri, "dropping malformed typemap entry");
			return None;
		}
		match self.uri {
			Some(uri) if !uri.is_empty() => Some(TypeMapEntry {
				uri,
				headers: self.headers,
			}),
			_ => {
				tracing::debug!("dropping typemap entry without URI");
				None
			}
		}
	}
}

fn parse_entries(text: &str, strict: bool) -> TypemapResult<Vec<TypeMapEntry>> {
	let mut entries = Vec::new();
	let mut pending = PendingEntry::default();

	for (index, line) in text.lines().enumerate() {
		let trimmed = line.trim();

		if trimmed.is_empty() {
			entries.extend(std::mem::take(&mut pending).finish());
			continue;
		}
		if trimmed.starts_with('#') {
			continue;
		}

		let Some((name, value)) = trimmed.split_once(':') else {
			if strict {
				return Err(TypemapError::MalformedLine {
					line: index + 1,
					content: trimmed.to_string(),
				});
			}
			pending.malformed = true;
			continue;
		};

		let name = name.trim().to_lowercase();
		let value = value.trim();
		if name == URI_KEY {
			pending.uri = Some(value.to_string());
		} else {
			pending.headers.insert(name, parse_header(value));
		}
	}

	entries.extend(pending.finish());
	Ok(entries)
}

/// A parsed typemap: the variants of one resource, in declaration order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Typemap {
	entries: Vec<TypeMapEntry>,
}

impl Typemap {
	/// Parses typemap text, silently dropping malformed entries
	///
	/// # Examples
	///
	/// ```
	/// use conneg_typemap::Typemap;
	///
	/// let typemap = Typemap::parse(
	///     "URI: foo.en.html\nContent-Type: text/html\n\nURI: foo.json\nContent-Type: application/json\n",
	/// );
	/// assert_eq!(typemap.len(), 2);
	/// assert_eq!(typemap.entries()[1].uri, "foo.json");
	/// ```
	pub fn parse(text: &str) -> Self {
		// The lenient pass has no error paths
		let entries = parse_entries(text, false).unwrap_or_default();
		Self { entries }
	}

	/// Parses typemap text, failing on the first malformed line
	///
	/// # Examples
	///
	/// ```
	/// use conneg_typemap::{Typemap, TypemapError};
	///
	/// let err = Typemap::parse_strict("URI: a\nnot a header\n").unwrap_err();
	/// assert!(matches!(err, TypemapError::MalformedLine { line: 2, .. }));
	/// ```
	pub fn parse_strict(text: &str) -> TypemapResult<Self> {
		Ok(Self {
			entries: parse_entries(text, true)?,
		})
	}

	/// Reads and leniently parses a typemap from any reader
	pub fn from_reader<R: Read>(mut reader: R) -> TypemapResult<Self> {
		let mut text = String::new();
		reader.read_to_string(&mut text)?;
		Ok(Self::parse(&text))
	}

	pub fn entries(&self) -> &[TypeMapEntry] {
		&self.entries
	}

	pub fn into_entries(self) -> Vec<TypeMapEntry> {
		self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, TypeMapEntry> {
		self.entries.iter()
	}
}

impl From<Vec<TypeMapEntry>> for Typemap {
	fn from(entries: Vec<TypeMapEntry>) -> Self {
		Self { entries }
	}
}

impl<'a> IntoIterator for &'a Typemap {
	type Item = &'a TypeMapEntry;
	type IntoIter = std::slice::Iter<'a, TypeMapEntry>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}

/// Writes entries separated by blank lines, so the output parses back
impl fmt::Display for Typemap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for entry in &self.entries {
			writeln!(f, "{}", entry)?;
		}
		Ok(())
	}
}

/// Parses typemap text into entries, dropping malformed ones
pub fn parse_typemap(text: &str) -> Vec<TypeMapEntry> {
	Typemap::parse(text).into_entries()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_blank_line_flushes_entry() {
		let entries = parse_typemap("URI: a\nContent-Type: text/html\n\nURI: b\nContent-Type: text/plain");
		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].uri, "a");
		assert_eq!(entries[1].content_type()[0].value, "text/plain");
	}

	#[rstest]
	fn test_header_names_are_lowercased() {
		let entries = parse_typemap("uRi: a\nCONTENT-Type: Text/HTML\n");
		assert_eq!(entries[0].uri, "a");
		assert!(entries[0].headers.contains_key("content-type"));
		// values keep their case
		assert_eq!(entries[0].content_type()[0].value, "Text/HTML");
	}

	#[rstest]
	fn test_comments_are_skipped() {
		let entries = parse_typemap("# variants\nURI: a\n  # inline comment\nContent-Type: text/html\n");
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].headers.len(), 1);
	}

	#[rstest]
	fn test_malformed_line_taints_entry() {
		let text = "URI: a\nbroken line\nContent-Type: text/html\n\nURI: b\nContent-Type: text/plain\n";
		let entries = parse_typemap(text);
		assert_eq!(entries.len(), 1);
		assert_eq!(entries[0].uri, "b");
	}

	#[rstest]
	fn test_entry_without_uri_is_dropped() {
		let entries = parse_typemap("Content-Type: text/html\n\nURI: \nContent-Type: text/plain\n");
		assert!(entries.is_empty());
	}

	#[rstest]
	fn test_uri_only_entry_is_kept() {
		let entries = parse_typemap("URI: foo\n\nURI: foo.html\nContent-Type: text/html\n");
		assert_eq!(entries.len(), 2);
		assert!(entries[0].headers.is_empty());
	}

	#[rstest]
	fn test_multiple_values_and_parameters() {
		let entries = parse_typemap("URI: a\nContent-Language: fr, de;q=0.5\n");
		let languages = entries[0].content_language();
		assert_eq!(languages.len(), 2);
		assert_eq!(languages[1].value, "de");
		assert_eq!(languages[1].q(), 0.5);
	}

	#[rstest]
	fn test_value_may_contain_colon() {
		let entries = parse_typemap("URI: http://example.com/a\nDescription: x:y\n");
		assert_eq!(entries[0].uri, "http://example.com/a");
		assert_eq!(entries[0].header("description")[0].value, "x:y");
	}

	#[rstest]
	fn test_crlf_line_endings() {
		let entries = parse_typemap("URI: a\r\nContent-Type: text/html\r\n\r\nURI: b\r\n");
		assert_eq!(entries.len(), 2);
	}

	#[rstest]
	fn test_strict_accepts_well_formed_input() {
		let typemap = Typemap::parse_strict("URI: a\nContent-Type: text/html\n").unwrap();
		assert_eq!(typemap.len(), 1);
	}

	#[rstest]
	fn test_from_reader() {
		let typemap = Typemap::from_reader("URI: a\nContent-Type: text/html\n".as_bytes()).unwrap();
		assert_eq!(typemap.entries()[0].uri, "a");
	}
}
