use http::header::USER_AGENT;
use http::{HeaderValue, Request};
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::api::{ApiError, Response, Result, request};

/// Boxed failure reported by a [`Transport`].
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Sends a fully built request and returns the raw response.
///
/// Connection management, TLS, and retries all live behind this seam.
pub trait Transport {
	/// Perform one request/response exchange.
	fn send(&self, request: Request<Vec<u8>>) -> std::result::Result<http::Response<Vec<u8>>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
	fn send(&self, request: Request<Vec<u8>>) -> std::result::Result<http::Response<Vec<u8>>, TransportError> {
		(**self).send(request)
	}
}

impl<T: Transport + ?Sized> Transport for Box<T> {
	fn send(&self, request: Request<Vec<u8>>) -> std::result::Result<http::Response<Vec<u8>>, TransportError> {
		(**self).send(request)
	}
}

/// Client-wide request settings.
#[derive(Debug, Clone)]
pub struct ClientOptions {
	/// Base that relative request URLs are joined onto.
	pub base_url: Option<Url>,
	/// `User-Agent` header applied to every issued request.
	pub user_agent: Option<String>,
	/// Largest accepted response body in bytes.
	///
	/// Checked once the transport returns, so a [`Transport`] that must cap
	/// memory has to enforce its own read limit.
	pub max_body_len: usize,
}

impl Default for ClientOptions {
	fn default() -> Self {
		Self {
			base_url: None,
			user_agent: None,
			max_body_len: 16 * 1024 * 1024,
		}
	}
}

impl ClientOptions {
	/// Default options rooted at `base_url`.
	pub fn with_base_url(base_url: &str) -> Result<Self> {
		let base_url = Url::parse(base_url).map_err(|source| ApiError::InvalidUrl {
			url: base_url.to_owned(),
			source,
		})?;
		Ok(Self {
			base_url: Some(base_url),
			..Self::default()
		})
	}
}

/// JSON client bound to one transport and one set of options.
#[derive(Debug, Clone)]
pub struct Client<T> {
	transport: T,
	options: ClientOptions,
}

impl<T: Transport> Client<T> {
	/// Client with default options.
	pub fn new(transport: T) -> Self {
		Self::with_options(transport, ClientOptions::default())
	}

	/// Client with explicit options.
	pub fn with_options(transport: T, options: ClientOptions) -> Self {
		Self { transport, options }
	}

	/// Active options.
	pub fn options(&self) -> &ClientOptions {
		&self.options
	}

	/// Underlying transport.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Send `request` and interpret the response.
	pub fn issue(&self, mut request: Request<Vec<u8>>) -> Result<Response> {
		if let Some(agent) = &self.options.user_agent {
			let value = HeaderValue::from_str(agent).map_err(http::Error::from)?;
			request.headers_mut().insert(USER_AGENT, value);
		}

		let method = request.method().clone();
		let url = request.uri().to_string();
		debug!(%method, %url, body_len = request.body().len(), "sending request");

		let response = self.transport.send(request).map_err(|err| {
			warn!(%method, %url, error = %err, "transport failed");
			ApiError::Transport(err)
		})?;

		let len = response.body().len();
		if len > self.options.max_body_len {
			warn!(%url, len, limit = self.options.max_body_len, "response body too large");
			return Err(ApiError::BodyTooLarge {
				status: response.status(),
				len,
				limit: self.options.max_body_len,
			});
		}
		debug!(%url, status = response.status().as_u16(), body_len = len, "received response");

		let parsed = Response::parse(url, response);
		if let Err(ApiError::BadResponseCode { url, status, .. }) = &parsed {
			warn!(%url, status = status.as_u16(), "request failed");
		}
		parsed
	}

	/// Issue a `GET`.
	pub fn get(&self, url: &str) -> Result<Response> {
		self.issue(request::get(&self.join(url)?)?)
	}

	/// Issue a `POST` with a JSON body.
	pub fn post<D: Serialize + ?Sized>(&self, url: &str, data: &D) -> Result<Response> {
		self.issue(request::post(&self.join(url)?, data)?)
	}

	/// Issue a `PUT` with a JSON body.
	pub fn put<D: Serialize + ?Sized>(&self, url: &str, data: &D) -> Result<Response> {
		self.issue(request::put(&self.join(url)?, data)?)
	}

	/// Issue a `PATCH` with a JSON body.
	pub fn patch<D: Serialize + ?Sized>(&self, url: &str, data: &D) -> Result<Response> {
		self.issue(request::patch(&self.join(url)?, data)?)
	}

	/// Issue a `DELETE`.
	pub fn delete(&self, url: &str) -> Result<Response> {
		self.issue(request::delete(&self.join(url)?)?)
	}

	fn join(&self, url: &str) -> Result<String> {
		let Some(base) = &self.options.base_url else {
			return Ok(url.to_owned());
		};

		match Url::parse(url) {
			Err(url::ParseError::RelativeUrlWithoutBase) => base
				.join(url)
				.map(String::from)
				.map_err(|source| ApiError::InvalidUrl { url: url.to_owned(), source }),
			_ => Ok(url.to_owned()),
		}
	}
}

#[cfg(test)]
mod tests;
