use http::StatusCode;
use thiserror::Error;

use crate::api::{Response, TransportError};
use crate::tree::AccessError;

/// Result alias for the HTTP helpers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Errors produced while building, issuing, or interpreting JSON requests.
#[derive(Debug, Error)]
pub enum ApiError {
	/// Request method is not a valid HTTP token.
	#[error("invalid http method: {method}")]
	InvalidMethod {
		/// Method text as supplied.
		method: String,
	},
	/// Request URL did not parse.
	#[error("invalid url {url:?}: {source}")]
	InvalidUrl {
		/// URL text as supplied.
		url: String,
		/// Parser failure.
		source: url::ParseError,
	},
	/// Request payload could not be serialized.
	#[error("encode request body: {0}")]
	Encode(#[source] serde_json::Error),
	/// Request assembly failed.
	#[error("build request: {0}")]
	Http(#[from] http::Error),
	/// Transport failed to produce a response.
	#[error("transport: {0}")]
	Transport(#[source] TransportError),
	/// Response body exceeded the configured limit.
	///
	/// Raised after the transport has already buffered the body; the limit
	/// rejects the payload but does not bound transport memory.
	#[error("response body of {len} bytes exceeds limit {limit} (status {})", .status.as_u16())]
	BodyTooLarge {
		/// Response status.
		status: StatusCode,
		/// Received body length.
		len: usize,
		/// Configured maximum.
		limit: usize,
	},
	/// Server answered with a failure status; the parsed response is attached.
	#[error("{url} returned {}: {message}", .status.as_u16())]
	BadResponseCode {
		/// Request URL.
		url: String,
		/// Response status.
		status: StatusCode,
		/// Response body text.
		message: String,
		/// Full response, including any decoded JSON error payload.
		response: Box<Response>,
	},
	/// Successful status but the body was not valid JSON; the raw response is attached.
	#[error("decode response body from {}: {source}", .response.url)]
	InvalidJson {
		/// Decoder failure.
		source: serde_json::Error,
		/// Response with `data` left as null.
		response: Box<Response>,
	},
	/// Path lookup on a response payload failed.
	#[error(transparent)]
	Access(#[from] AccessError),
}

impl ApiError {
	/// Response attached to a status or decode failure.
	pub fn response(&self) -> Option<&Response> {
		match self {
			Self::BadResponseCode { response, .. } | Self::InvalidJson { response, .. } => Some(response.as_ref()),
			_ => None,
		}
	}
}
