use std::sync::Mutex;

use http::header::USER_AGENT;
use http::{Method, Request, StatusCode};

use crate::api::{ApiError, Client, ClientOptions, Transport, TransportError};

/// Transport that records requests and answers with a canned response.
struct CannedTransport {
	status: u16,
	body: Vec<u8>,
	seen: Mutex<Vec<Request<Vec<u8>>>>,
}

impl CannedTransport {
	fn new(status: u16, body: &str) -> Self {
		Self {
			status,
			body: body.as_bytes().to_vec(),
			seen: Mutex::new(Vec::new()),
		}
	}

	fn seen_urls(&self) -> Vec<String> {
		self.seen.lock().expect("lock").iter().map(|request| request.uri().to_string()).collect()
	}
}

impl Transport for CannedTransport {
	fn send(&self, request: Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>, TransportError> {
		self.seen.lock().expect("lock").push(request);
		Ok(http::Response::builder().status(self.status).body(self.body.clone())?)
	}
}

struct FailingTransport;

impl Transport for FailingTransport {
	fn send(&self, _request: Request<Vec<u8>>) -> Result<http::Response<Vec<u8>>, TransportError> {
		Err("connection refused".into())
	}
}

#[test]
fn issue_parses_successful_response() {
	let transport = CannedTransport::new(200, treefind_testkit::SAMPLE_RESPONSE);
	let client = Client::new(&transport);

	let response = client.get("https://localhost:1234/get").expect("request succeeds");
	assert_eq!(response.string_val("map.k").expect("map.k resolves"), "v");
	assert_eq!(response.url, "https://localhost:1234/get");
	assert_eq!(transport.seen_urls(), ["https://localhost:1234/get"]);
}

#[test]
fn transport_errors_are_returned() {
	let client = Client::new(FailingTransport);
	let err = client.get("https://localhost:1234/get").expect_err("transport fails");
	assert!(matches!(err, ApiError::Transport(_)));
	assert_eq!(err.to_string(), "transport: connection refused");
}

#[test]
fn relative_urls_join_base() {
	let transport = CannedTransport::new(200, "{}");
	let options = ClientOptions::with_base_url("https://api.example.com/v1/").expect("base url parses");
	let client = Client::with_options(&transport, options);

	client.get("users/7").expect("relative get succeeds");
	client.delete("https://other.example.com/x").expect("absolute delete succeeds");

	assert_eq!(transport.seen_urls(), ["https://api.example.com/v1/users/7", "https://other.example.com/x"]);
}

#[test]
fn body_verbs_send_json() {
	let transport = CannedTransport::new(201, r#"{"id":9}"#);
	let client = Client::new(&transport);

	let response = client.post("https://localhost/items", &["a", "b"]).expect("post succeeds");
	assert_eq!(response.num_val("id").expect("id resolves").to_integer().expect("integral"), 9);
	client.put("https://localhost/items/9", "x").expect("put succeeds");
	client.patch("https://localhost/items/9", &true).expect("patch succeeds");

	let seen = transport.seen.lock().expect("lock");
	let summary: Vec<(Method, &[u8])> = seen.iter().map(|request| (request.method().clone(), request.body().as_slice())).collect();
	assert_eq!(
		summary,
		vec![
			(Method::POST, br#"["a","b"]"#.as_slice()),
			(Method::PUT, br#""x""#.as_slice()),
			(Method::PATCH, b"true".as_slice()),
		]
	);
}

#[test]
fn user_agent_is_applied() {
	let transport = CannedTransport::new(200, "");
	let options = ClientOptions {
		user_agent: Some("treefind-tests/1".to_owned()),
		..ClientOptions::default()
	};
	let client = Client::with_options(&transport, options);

	let response = client.get("https://localhost/ping").expect("get succeeds");
	assert!(response.data.is_null());

	let seen = transport.seen.lock().expect("lock");
	assert_eq!(seen[0].headers()[USER_AGENT], "treefind-tests/1");
}

#[test]
fn oversized_bodies_are_rejected() {
	let transport = CannedTransport::new(200, r#"{"big":"0123456789"}"#);
	let options = ClientOptions {
		max_body_len: 8,
		..ClientOptions::default()
	};
	let client = Client::with_options(&transport, options);

	let err = client.get("https://localhost/big").expect_err("body exceeds limit");
	assert!(matches!(err, ApiError::BodyTooLarge { status: StatusCode::OK, len: 20, limit: 8 }));
	assert_eq!(err.to_string(), "response body of 20 bytes exceeds limit 8 (status 200)");
}

#[test]
fn body_at_limit_is_accepted() {
	let body = r#"{"k":"v"}"#;
	let transport = CannedTransport::new(200, body);
	let options = ClientOptions {
		max_body_len: body.len(),
		..ClientOptions::default()
	};
	let client = Client::with_options(&transport, options);
	assert_eq!(client.options().max_body_len, 9);

	let response = client.get("https://localhost/exact").expect("body at limit is accepted");
	assert_eq!(response.string_val("k").expect("k resolves"), "v");

	let client = Client::with_options(
		&transport,
		ClientOptions {
			max_body_len: body.len() - 1,
			..ClientOptions::default()
		},
	);
	let err = client.get("https://localhost/exact").expect_err("one byte over the limit");
	assert!(matches!(err, ApiError::BodyTooLarge { len: 9, limit: 8, .. }));
}

#[test]
fn client_exposes_options_and_transport() {
	let transport = CannedTransport::new(200, "{}");
	let options = ClientOptions::with_base_url("https://api.example.com/").expect("base url parses");
	let client = Client::with_options(&transport, options);

	assert_eq!(client.options().base_url.as_ref().map(|url| url.as_str()), Some("https://api.example.com/"));
	assert_eq!(client.options().max_body_len, ClientOptions::default().max_body_len);

	client.get("ping").expect("get succeeds");
	assert_eq!(client.transport().seen_urls(), ["https://api.example.com/ping"]);
}

#[test]
fn failure_status_is_surfaced_with_response() {
	let transport = CannedTransport::new(503, r#"{"error":"down"}"#);
	let client = Client::new(Box::new(transport) as Box<dyn Transport>);

	let err = client.get("https://localhost/status").expect_err("503 fails");
	let response = err.response().expect("response attached");
	assert_eq!(response.status.as_u16(), 503);
	assert_eq!(response.string_val("error").expect("error payload"), "down");
}

#[test]
fn invalid_base_url_is_rejected() {
	let err = ClientOptions::with_base_url("not a url").expect_err("base url must be absolute");
	assert!(matches!(err, ApiError::InvalidUrl { .. }));
}
