use thiserror::Error;
use treefind::tree::{AccessError, PathSyntaxError};

/// Path evaluation command.
pub mod find;
/// Path step listing command.
pub mod steps;
mod util;

/// Result alias for command handlers.
pub type Result<T> = std::result::Result<T, CliError>;

/// Failures surfaced by command handlers.
#[derive(Debug, Error)]
pub enum CliError {
	/// Input document could not be read.
	#[error("read {input}: {source}")]
	Read {
		/// Input path as given.
		input: String,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Input document is not valid JSON.
	#[error("decode {input}: {source}")]
	Decode {
		/// Input path as given.
		input: String,
		/// Decoder failure.
		source: serde_json::Error,
	},
	/// Path did not parse.
	#[error(transparent)]
	Syntax(#[from] PathSyntaxError),
	/// Path lookup failed.
	#[error(transparent)]
	Access(#[from] AccessError),
	/// JSON output could not be rendered.
	#[error("encode output: {0}")]
	Encode(#[from] serde_json::Error),
}
