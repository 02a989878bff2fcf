mod error;
mod find;
mod number;
mod path;
mod resolve;
mod value;

/// Error types for parsing, resolution, typed access, and numeric conversion.
pub use error::{AccessError, ConversionError, PathSyntaxError, ResolveError};
/// Typed accessors over a root value.
pub use find::{Shape, find, find_array, find_bool, find_number, find_object, find_ref, find_shaped, find_string};
/// Canonical numeric wrapper.
pub use number::Number;
/// Path expression parser types.
pub use path::{PathStep, TreePath, parse_path};
/// Step-by-step cursor resolution.
pub use resolve::resolve;
/// Decoded dynamic value types.
pub use value::{ObjectMap, Value, ValueKind};
