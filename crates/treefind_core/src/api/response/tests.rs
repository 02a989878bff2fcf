use http::StatusCode;

use crate::api::{ApiError, Response};
use crate::tree::{AccessError, ObjectMap, ResolveError, Shape, Value, ValueKind};

fn http_response(status: u16, body: &str) -> http::Response<Vec<u8>> {
	http::Response::builder()
		.status(status)
		.header("content-type", "application/json")
		.body(body.as_bytes().to_vec())
		.expect("response builds")
}

fn sample() -> Response {
	Response::parse("https://localhost/test", http_response(200, treefind_testkit::SAMPLE_RESPONSE)).expect("sample parses")
}

#[test]
fn keeps_raw_body_and_metadata() {
	let response = sample();
	assert_eq!(response.raw, treefind_testkit::SAMPLE_RESPONSE.as_bytes());
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.url, "https://localhost/test");
	assert_eq!(response.headers["content-type"], "application/json");
}

#[test]
fn empty_body_decodes_to_null() {
	let response = Response::parse("https://localhost/empty", http_response(204, "")).expect("empty body parses");
	assert!(response.data.is_null());
}

#[test]
fn failure_status_carries_response() {
	let err = Response::parse("https://localhost/test", http_response(404, r#"{"error":"missing"}"#)).expect_err("404 fails");
	assert_eq!(err.to_string(), r#"https://localhost/test returned 404: {"error":"missing"}"#);

	let ApiError::BadResponseCode { status, response, .. } = &err else {
		panic!("expected bad response code, got {err:?}");
	};
	assert_eq!(*status, StatusCode::NOT_FOUND);
	assert_eq!(response.string_val("error").expect("error payload decoded"), "missing");
	assert!(err.response().is_some());
}

#[test]
fn failure_status_wins_over_invalid_json() {
	let err = Response::parse("http://asdf.com/", http_response(500, "this is a different error")).expect_err("500 fails");
	assert_eq!(err.to_string(), "http://asdf.com/ returned 500: this is a different error");
	assert!(err.response().is_some_and(|response| response.data.is_null()));
}

#[test]
fn invalid_json_on_success_carries_response() {
	let err = Response::parse("https://localhost/test", http_response(200, "not json")).expect_err("invalid json fails");
	let ApiError::InvalidJson { response, .. } = &err else {
		panic!("expected invalid json, got {err:?}");
	};
	assert_eq!(response.raw, b"not json");
	assert!(response.data.is_null());
}

#[test]
fn string_val() {
	let response = sample();
	assert_eq!(response.string_val("string").expect("string resolves"), "asdf");
	assert!(matches!(
		response.string_val("number"),
		Err(AccessError::TypeMismatch {
			wanted: Shape::String,
			found: ValueKind::Number
		})
	));
}

#[test]
fn num_val() {
	let response = sample();
	assert_eq!(response.num_val("number").expect("number resolves").to_integer().expect("integral"), 1234);
	assert!(response.num_val("string").is_err());
}

#[test]
fn bool_val() {
	let response = sample();
	assert!(response.bool_val("boolean").expect("boolean resolves"));
	assert!(response.bool_val("number").is_err());
}

#[test]
fn map_val() {
	let response = sample();
	let map = response.map_val("map").expect("map resolves");
	let mut expected = ObjectMap::new();
	expected.insert("n".to_owned(), Value::Number(1.0));
	expected.insert("k".to_owned(), Value::from("v"));
	assert_eq!(Value::Object(map), Value::Object(expected));
	assert!(response.map_val("number").is_err());
}

#[test]
fn array_val() {
	let response = sample();
	let array = response.array_val("array").expect("array resolves");
	assert_eq!(array, vec![Value::Number(1.0), Value::Number(2.0), Value::from("fdsa")]);
	assert!(response.array_val("number").is_err());
}

#[test]
fn val() {
	let response = sample();
	assert_eq!(response.val("string").expect("string resolves"), Value::from("asdf"));
	assert!(matches!(
		response.val("n'exist pas"),
		Err(AccessError::NotFound(ResolveError::KeyNotFound { .. }))
	));
}
