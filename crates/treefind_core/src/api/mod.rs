mod client;
mod error;
mod request;
mod response;

/// Client, options, and the transport seam.
pub use client::{Client, ClientOptions, Transport, TransportError};
/// Error and result aliases for the HTTP helpers.
pub use error::{ApiError, Result};
/// JSON request builders.
pub use request::{delete, get, json_request, patch, post, put};
/// Parsed response with path accessors.
pub use response::Response;
