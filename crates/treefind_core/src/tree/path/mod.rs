use std::fmt;
use std::str::FromStr;

use crate::tree::{PathSyntaxError, ResolveError, Value, resolve};

/// One parsed operation in a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathStep {
	/// Descend into an object by key.
	Key(String),
	/// Descend into an array by zero-based position.
	Index(usize),
}

/// Parsed path expression.
///
/// Grammar: `.`-separated segments, each a bare key optionally followed by
/// `[n]` suffixes, for example `user.addresses[0].city`. Only the first segment
/// may omit the key (`[2].name` indexes a root array). The empty string is the
/// root path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TreePath {
	steps: Vec<PathStep>,
}

impl TreePath {
	/// Path addressing the root value itself.
	pub fn root() -> Self {
		Self::default()
	}

	/// Parse dotted key syntax with optional `[index]` selectors.
	pub fn parse(input: &str) -> Result<Self, PathSyntaxError> {
		let mut steps = Vec::new();
		if input.is_empty() {
			return Ok(Self { steps });
		}

		let mut position = 0_usize;
		for (segment_index, segment) in input.split('.').enumerate() {
			parse_segment(segment, position, segment_index == 0, &mut steps)?;
			position += segment.len() + 1;
		}

		Ok(Self { steps })
	}

	/// Ordered steps of this path.
	pub fn steps(&self) -> &[PathStep] {
		&self.steps
	}

	/// Consume the path into its steps.
	pub fn into_steps(self) -> Vec<PathStep> {
		self.steps
	}

	/// Number of steps, which bounds the navigation work of a resolve.
	pub fn len(&self) -> usize {
		self.steps.len()
	}

	/// Whether this is the root path.
	pub fn is_empty(&self) -> bool {
		self.steps.is_empty()
	}

	/// Walk this path over `root`.
	pub fn resolve<'v>(&self, root: &'v Value) -> Result<&'v Value, ResolveError> {
		resolve(root, &self.steps)
	}
}

/// Parse `input` straight into its step sequence.
pub fn parse_path(input: &str) -> Result<Vec<PathStep>, PathSyntaxError> {
	TreePath::parse(input).map(TreePath::into_steps)
}

impl FromStr for TreePath {
	type Err = PathSyntaxError;

	fn from_str(input: &str) -> Result<Self, Self::Err> {
		Self::parse(input)
	}
}

impl fmt::Display for TreePath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_steps(f, &self.steps)
	}
}

/// Canonical text for a step slice, as used in error prefixes.
pub(crate) fn render_steps(steps: &[PathStep]) -> String {
	let mut out = String::new();
	let _ = write_steps(&mut out, steps);
	out
}

fn write_steps(out: &mut impl fmt::Write, steps: &[PathStep]) -> fmt::Result {
	for (idx, step) in steps.iter().enumerate() {
		match step {
			PathStep::Key(key) => {
				if idx > 0 {
					out.write_char('.')?;
				}
				out.write_str(key)?;
			}
			PathStep::Index(index) => write!(out, "[{index}]")?,
		}
	}
	Ok(())
}

fn parse_segment(segment: &str, position: usize, first: bool, steps: &mut Vec<PathStep>) -> Result<(), PathSyntaxError> {
	let malformed = || PathSyntaxError::Malformed {
		position,
		segment: segment.to_owned(),
	};

	if segment.is_empty() {
		return Err(malformed());
	}

	let key_end = segment.find(['[', ']']).unwrap_or(segment.len());
	if key_end > 0 {
		steps.push(PathStep::Key(segment[..key_end].to_owned()));
	} else if !first {
		return Err(malformed());
	}

	let bytes = segment.as_bytes();
	let mut idx = key_end;
	while idx < bytes.len() {
		if bytes[idx] != b'[' {
			return Err(malformed());
		}

		let token_start = idx + 1;
		let Some(close) = segment[token_start..].find(']') else {
			return Err(malformed());
		};
		let token_end = token_start + close;
		let token = &segment[token_start..token_end];
		if token.contains('[') {
			return Err(malformed());
		}

		steps.push(PathStep::Index(parse_index(token, position + token_start)?));
		idx = token_end + 1;
	}

	Ok(())
}

fn parse_index(token: &str, position: usize) -> Result<usize, PathSyntaxError> {
	let invalid = || PathSyntaxError::InvalidIndex {
		position,
		token: token.to_owned(),
	};

	if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
		return Err(invalid());
	}
	token.parse::<usize>().map_err(|_| invalid())
}
