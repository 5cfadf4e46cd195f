//! Error types for typemap parsing

use thiserror::Error;

/// Errors reported by the strict and reader-based typemap parsers
///
/// The lenient parser never fails; it drops malformed entries instead.
#[derive(Debug, Error)]
pub enum TypemapError {
	/// A non-blank, non-comment line without a `:` separator
	#[error("Malformed typemap line {line}: {content}")]
	MalformedLine {
		/// One-based line number
		line: usize,
		/// The offending line, trimmed
		content: String,
	},

	/// Reading the typemap source failed
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for typemap operations
pub type TypemapResult<T> = Result<T, TypemapError>;
