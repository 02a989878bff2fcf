use http::{HeaderMap, StatusCode};

use crate::api::{ApiError, Result};
use crate::tree::{self, AccessError, Number, ObjectMap, Value};

/// Received response with its raw body and decoded JSON payload.
#[derive(Debug, Clone)]
pub struct Response {
	/// Response status.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// URL the request was sent to.
	pub url: String,
	/// Undecoded body bytes.
	pub raw: Vec<u8>,
	/// Decoded body; null for empty or undecodable bodies.
	pub data: Value,
}

impl Response {
	/// Interpret a received response for the request sent to `url`.
	///
	/// A status of 400 or above fails with [`ApiError::BadResponseCode`] even
	/// when the body decoded, so JSON error payloads stay reachable through the
	/// attached response. A successful status with a body that is not JSON
	/// fails with [`ApiError::InvalidJson`].
	pub fn parse(url: impl Into<String>, response: http::Response<Vec<u8>>) -> Result<Self> {
		let (parts, raw) = response.into_parts();

		let (data, decode_error) = if raw.is_empty() {
			(Value::Null, None)
		} else {
			match Value::from_json_slice(&raw) {
				Ok(data) => (data, None),
				Err(err) => (Value::Null, Some(err)),
			}
		};

		let response = Self {
			status: parts.status,
			headers: parts.headers,
			url: url.into(),
			raw,
			data,
		};

		if response.status.as_u16() >= 400 {
			return Err(ApiError::BadResponseCode {
				url: response.url.clone(),
				status: response.status,
				message: String::from_utf8_lossy(&response.raw).into_owned(),
				response: Box::new(response),
			});
		}

		if let Some(source) = decode_error {
			return Err(ApiError::InvalidJson {
				source,
				response: Box::new(response),
			});
		}

		Ok(response)
	}

	/// String at `path` in the decoded payload.
	pub fn string_val(&self, path: &str) -> std::result::Result<String, AccessError> {
		tree::find_string(&self.data, path)
	}

	/// Number at `path` in the decoded payload.
	pub fn num_val(&self, path: &str) -> std::result::Result<Number, AccessError> {
		tree::find_number(&self.data, path)
	}

	/// Boolean at `path` in the decoded payload.
	pub fn bool_val(&self, path: &str) -> std::result::Result<bool, AccessError> {
		tree::find_bool(&self.data, path)
	}

	/// Object at `path` in the decoded payload.
	pub fn map_val(&self, path: &str) -> std::result::Result<ObjectMap, AccessError> {
		tree::find_object(&self.data, path)
	}

	/// Array at `path` in the decoded payload.
	pub fn array_val(&self, path: &str) -> std::result::Result<Vec<Value>, AccessError> {
		tree::find_array(&self.data, path)
	}

	/// Any value at `path` in the decoded payload.
	pub fn val(&self, path: &str) -> std::result::Result<Value, AccessError> {
		tree::find(&self.data, path)
	}
}

#[cfg(test)]
mod tests;
