use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Request};
use serde::Serialize;
use url::Url;

use crate::api::{ApiError, Result};

const JSON_MIME: &str = "application/json";

/// Build a JSON request for `method` and `url`, serializing `data` as the body when present.
///
/// `Content-Type` and `Accept` are always `application/json`; without data the
/// body is empty.
pub fn json_request<T: Serialize + ?Sized>(method: &str, url: &str, data: Option<&T>) -> Result<Request<Vec<u8>>> {
	let method = Method::from_bytes(method.as_bytes()).map_err(|_| ApiError::InvalidMethod { method: method.to_owned() })?;
	let url = Url::parse(url).map_err(|source| ApiError::InvalidUrl { url: url.to_owned(), source })?;

	let body = match data {
		Some(data) => serde_json::to_vec(data).map_err(ApiError::Encode)?,
		None => Vec::new(),
	};

	let request = Request::builder()
		.method(method)
		.uri(url.as_str())
		.header(CONTENT_TYPE, JSON_MIME)
		.header(ACCEPT, JSON_MIME)
		.body(body)?;
	Ok(request)
}

/// `GET` request without a body.
pub fn get(url: &str) -> Result<Request<Vec<u8>>> {
	json_request::<()>("GET", url, None)
}

/// `POST` request with a JSON body.
pub fn post<T: Serialize + ?Sized>(url: &str, data: &T) -> Result<Request<Vec<u8>>> {
	json_request("POST", url, Some(data))
}

/// `PUT` request with a JSON body.
pub fn put<T: Serialize + ?Sized>(url: &str, data: &T) -> Result<Request<Vec<u8>>> {
	json_request("PUT", url, Some(data))
}

/// `PATCH` request with a JSON body.
pub fn patch<T: Serialize + ?Sized>(url: &str, data: &T) -> Result<Request<Vec<u8>>> {
	json_request("PATCH", url, Some(data))
}

/// `DELETE` request without a body.
pub fn delete(url: &str) -> Result<Request<Vec<u8>>> {
	json_request::<()>("DELETE", url, None)
}
