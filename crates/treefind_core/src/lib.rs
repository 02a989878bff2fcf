//! Public library API for navigating decoded JSON trees and issuing JSON requests.

/// JSON-over-HTTP request builders, response handling, and the transport seam.
pub mod api;
/// Dynamic value model, path parsing, resolution, and typed accessors.
pub mod tree;
