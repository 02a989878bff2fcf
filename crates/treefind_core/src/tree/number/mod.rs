use std::fmt;

use crate::tree::ConversionError;

/// Lower bound of the integer-representable range, `-2^63`.
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
/// Exclusive upper bound of the integer-representable range, `2^63`.
const I64_END_F64: f64 = 9_223_372_036_854_775_808.0;

/// Canonical numeric type for every number extracted from a value tree.
///
/// All JSON numbers are carried as `f64`; whether a number is integral is only
/// decided when converting through [`Number::to_integer`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Number(f64);

impl Number {
	/// Wrap a raw float.
	pub fn new(value: f64) -> Self {
		Self(value)
	}

	/// Convert to `i64` when the float is integral and in range.
	///
	/// The truncated integer must convert back to exactly the same bits, so
	/// `-0.0`, NaN, and infinities are rejected along with fractional values.
	pub fn to_integer(self) -> Result<i64, ConversionError> {
		if !(I64_MIN_F64..I64_END_F64).contains(&self.0) {
			return Err(ConversionError::NotIntegral { value: self.0 });
		}

		let int = self.0 as i64;
		if (int as f64).to_bits() != self.0.to_bits() {
			return Err(ConversionError::NotIntegral { value: self.0 });
		}
		Ok(int)
	}

	/// Raw float value.
	pub fn to_float(self) -> f64 {
		self.0
	}

	/// Integer text when integral, default float formatting otherwise.
	pub fn to_text(self) -> String {
		self.to_string()
	}
}

impl From<Number> for f64 {
	fn from(number: Number) -> Self {
		number.0
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.to_integer() {
			Ok(int) => write!(f, "{int}"),
			Err(_) => write!(f, "{}", self.0),
		}
	}
}
