use std::fmt;

use indexmap::IndexMap;

use crate::tree::Number;

/// Keyed object payload. Lookup is by key; iteration follows insertion order.
pub type ObjectMap = IndexMap<String, Value>;

/// Runtime value produced by decoding a JSON payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
	/// Explicit null, also used for empty bodies.
	#[default]
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Any JSON number, integral or not.
	Number(f64),
	/// UTF-8 string scalar.
	String(String),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// Keyed mapping.
	Object(ObjectMap),
}

/// Variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
	/// [`Value::Null`].
	Null,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::Number`].
	Number,
	/// [`Value::String`].
	String,
	/// [`Value::Array`].
	Array,
	/// [`Value::Object`].
	Object,
}

impl ValueKind {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Decode JSON text into a value tree.
	pub fn from_json_slice(bytes: &[u8]) -> serde_json::Result<Self> {
		serde_json::from_slice::<serde_json::Value>(bytes).map(Self::from)
	}

	/// Variant tag of this value.
	pub fn kind(&self) -> ValueKind {
		match self {
			Self::Null => ValueKind::Null,
			Self::Bool(_) => ValueKind::Bool,
			Self::Number(_) => ValueKind::Number,
			Self::String(_) => ValueKind::String,
			Self::Array(_) => ValueKind::Array,
			Self::Object(_) => ValueKind::Object,
		}
	}

	/// Whether this is [`Value::Null`].
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload, if this is a boolean.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Numeric payload, if this is a number.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Number(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload, if this is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Borrowed elements, if this is an array.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Borrowed entries, if this is an object.
	pub fn as_object(&self) -> Option<&ObjectMap> {
		match self {
			Self::Object(entries) => Some(entries),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Number(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Number(value as f64)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<ObjectMap> for Value {
	fn from(entries: ObjectMap) -> Self {
		Self::Object(entries)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(value),
			serde_json::Value::Number(number) => Self::Number(number.as_f64().unwrap_or(f64::NAN)),
			serde_json::Value::String(value) => Self::String(value),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(entries) => Self::Object(entries.into_iter().map(|(key, value)| (key, Self::from(value))).collect()),
		}
	}
}

impl From<&Value> for serde_json::Value {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => Self::Null,
			Value::Bool(value) => Self::Bool(*value),
			Value::Number(number) => match Number::new(*number).to_integer() {
				Ok(int) => Self::from(int),
				Err(_) => serde_json::Number::from_f64(*number).map_or(Self::Null, Self::Number),
			},
			Value::String(value) => Self::String(value.clone()),
			Value::Array(items) => Self::Array(items.iter().map(Self::from).collect()),
			Value::Object(entries) => Self::Object(entries.iter().map(|(key, value)| (key.clone(), Self::from(value))).collect()),
		}
	}
}
