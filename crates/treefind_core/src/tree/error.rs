use thiserror::Error;

use crate::tree::{Shape, ValueKind};

/// Path expression text that does not follow the dot/bracket grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathSyntaxError {
	/// Empty segment, unbalanced brackets, or stray characters.
	#[error("malformed path segment {segment:?} at byte {position}")]
	Malformed {
		/// Byte offset where the offending segment starts.
		position: usize,
		/// Offending segment text.
		segment: String,
	},
	/// Bracket content that is not a base-10 non-negative integer.
	#[error("invalid array index {token:?} at byte {position}")]
	InvalidIndex {
		/// Byte offset of the bracket content.
		position: usize,
		/// Bracket content as written.
		token: String,
	},
}

/// Traversal failure while walking path steps over a value.
///
/// `step` is the zero-based index of the failing step and `prefix` renders the
/// steps that were consumed before it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
	/// Key step applied to a non-object node.
	#[error("cannot look up key {at:?} in {found} at {}", display_prefix(.prefix))]
	NotAnObject {
		/// Requested key.
		at: String,
		/// Variant actually found.
		found: ValueKind,
		/// Failing step index.
		step: usize,
		/// Path consumed before the failing step.
		prefix: String,
	},
	/// Object does not contain the requested key.
	#[error("key {key:?} not found at {}", display_prefix(.prefix))]
	KeyNotFound {
		/// Missing key.
		key: String,
		/// Failing step index.
		step: usize,
		/// Path consumed before the failing step.
		prefix: String,
	},
	/// Index step applied to a non-array node.
	#[error("cannot index [{at}] into {found} at {}", display_prefix(.prefix))]
	NotAnArray {
		/// Requested index.
		at: usize,
		/// Variant actually found.
		found: ValueKind,
		/// Failing step index.
		step: usize,
		/// Path consumed before the failing step.
		prefix: String,
	},
	/// Index past the end of an array.
	#[error("index {index} out of range for array of length {length} at {}", display_prefix(.prefix))]
	IndexOutOfRange {
		/// Requested index.
		index: usize,
		/// Array length.
		length: usize,
		/// Failing step index.
		step: usize,
		/// Path consumed before the failing step.
		prefix: String,
	},
}

impl ResolveError {
	/// Zero-based index of the step that failed.
	pub fn step(&self) -> usize {
		match self {
			Self::NotAnObject { step, .. } | Self::KeyNotFound { step, .. } | Self::NotAnArray { step, .. } | Self::IndexOutOfRange { step, .. } => *step,
		}
	}

	/// Rendered path of the steps consumed before the failure.
	pub fn prefix(&self) -> &str {
		match self {
			Self::NotAnObject { prefix, .. } | Self::KeyNotFound { prefix, .. } | Self::NotAnArray { prefix, .. } | Self::IndexOutOfRange { prefix, .. } => {
				prefix
			}
		}
	}

	/// Whether traversal hit a node of the wrong kind mid-path rather than a missing entry.
	pub fn is_not_navigable(&self) -> bool {
		matches!(self, Self::NotAnObject { .. } | Self::NotAnArray { .. })
	}
}

fn display_prefix(prefix: &str) -> &str {
	if prefix.is_empty() { "<root>" } else { prefix }
}

/// Failure returned by the typed accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
	/// Path text did not parse.
	#[error("path syntax: {0}")]
	Syntax(#[from] PathSyntaxError),
	/// Path did not lead to a value.
	#[error("not found: {0}")]
	NotFound(#[from] ResolveError),
	/// Path resolved to a value of the wrong shape.
	#[error("type mismatch: wanted {wanted}, found {found}")]
	TypeMismatch {
		/// Requested shape.
		wanted: Shape,
		/// Variant actually found.
		found: ValueKind,
	},
}

/// Numeric conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConversionError {
	/// Float has a fractional part, is non-finite, or lies outside `i64`.
	#[error("{value} is not representable as an integer")]
	NotIntegral {
		/// Source float.
		value: f64,
	},
}
