use std::fmt;

use crate::tree::{AccessError, Number, ObjectMap, TreePath, Value, ValueKind};

/// Target shape requested from a typed accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
	/// UTF-8 string.
	String,
	/// Any number, integral or not.
	Number,
	/// Boolean.
	Bool,
	/// Keyed object.
	Object,
	/// Ordered array.
	Array,
}

impl Shape {
	/// Value variant satisfying this shape.
	pub fn kind(self) -> ValueKind {
		match self {
			Self::String => ValueKind::String,
			Self::Number => ValueKind::Number,
			Self::Bool => ValueKind::Bool,
			Self::Object => ValueKind::Object,
			Self::Array => ValueKind::Array,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		self.kind().as_str()
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Borrow the value at `path`.
pub fn find_ref<'v>(root: &'v Value, path: &str) -> Result<&'v Value, AccessError> {
	let path = TreePath::parse(path)?;
	Ok(path.resolve(root)?)
}

/// Owned copy of the value at `path`, whatever its variant.
pub fn find(root: &Value, path: &str) -> Result<Value, AccessError> {
	find_ref(root, path).cloned()
}

/// Borrow the value at `path` after checking it has `shape`.
pub fn find_shaped<'v>(root: &'v Value, path: &str, shape: Shape) -> Result<&'v Value, AccessError> {
	let value = find_ref(root, path)?;
	if value.kind() != shape.kind() {
		return Err(mismatch(shape, value));
	}
	Ok(value)
}

/// String at `path`.
pub fn find_string(root: &Value, path: &str) -> Result<String, AccessError> {
	match find_ref(root, path)? {
		Value::String(value) => Ok(value.clone()),
		other => Err(mismatch(Shape::String, other)),
	}
}

/// Number at `path`. Fractional values are accepted; see [`Number::to_integer`].
pub fn find_number(root: &Value, path: &str) -> Result<Number, AccessError> {
	match find_ref(root, path)? {
		Value::Number(value) => Ok(Number::new(*value)),
		other => Err(mismatch(Shape::Number, other)),
	}
}

/// Boolean at `path`.
pub fn find_bool(root: &Value, path: &str) -> Result<bool, AccessError> {
	match find_ref(root, path)? {
		Value::Bool(value) => Ok(*value),
		other => Err(mismatch(Shape::Bool, other)),
	}
}

/// Owned object entries at `path`.
pub fn find_object(root: &Value, path: &str) -> Result<ObjectMap, AccessError> {
	match find_ref(root, path)? {
		Value::Object(entries) => Ok(entries.clone()),
		other => Err(mismatch(Shape::Object, other)),
	}
}

/// Owned array elements at `path`.
pub fn find_array(root: &Value, path: &str) -> Result<Vec<Value>, AccessError> {
	match find_ref(root, path)? {
		Value::Array(items) => Ok(items.clone()),
		other => Err(mismatch(Shape::Array, other)),
	}
}

fn mismatch(wanted: Shape, found: &Value) -> AccessError {
	AccessError::TypeMismatch { wanted, found: found.kind() }
}
