use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::err::Error;
use crate::sql::ToSql;

/// A single coordinate value
///
/// A number remembers whether it originated as an integer or as a floating-point
/// value. Comparison between the two variants is by exact numeric value, so
/// `Number::Int(1) == Number::Float(1.0)`, but the variant itself is preserved
/// and rendered accordingly. NaN is equal to NaN, so a decoded value always
/// equals itself.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
	Int(i64),
	Float(f64),
}

impl Default for Number {
	fn default() -> Self {
		Self::Int(0)
	}
}

macro_rules! from_prim_ints {
	($($int: ty),*) => {
		$(
			impl From<$int> for Number {
				fn from(i: $int) -> Self {
					Self::Int(i as i64)
				}
			}
		)*
	};
}

from_prim_ints!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
	fn from(f: f32) -> Self {
		Self::Float(f as f64)
	}
}

impl From<f64> for Number {
	fn from(f: f64) -> Self {
		Self::Float(f)
	}
}

impl FromStr for Number {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from(s)
	}
}

impl TryFrom<&str> for Number {
	type Error = Error;
	fn try_from(v: &str) -> Result<Self, Self::Error> {
		let mismatch = || Error::TypeMismatch {
			expected: "a number",
			found: format!("{v:?}"),
		};
		let v = v.trim();
		// PostgreSQL spells the special float values out
		match v.to_ascii_lowercase().as_str() {
			"nan" | "+nan" | "-nan" => return Ok(Self::Float(f64::NAN)),
			"infinity" | "+infinity" | "inf" | "+inf" => return Ok(Self::Float(f64::INFINITY)),
			"-infinity" | "-inf" => return Ok(Self::Float(f64::NEG_INFINITY)),
			_ => {}
		}
		if !v.bytes().any(|b| b.is_ascii_digit()) {
			return Err(mismatch());
		}
		// Anything with a fractional part or an exponent is a float
		if v.contains(['.', 'e', 'E']) {
			return v.parse::<f64>().map(Self::Float).map_err(|_| mismatch());
		}
		match v.parse::<i64>() {
			Ok(v) => Ok(Self::Int(v)),
			// Integral, but too wide for an i64
			Err(_) => v.parse::<f64>().map(Self::Float).map_err(|_| mismatch()),
		}
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Number::Int(v) => Display::fmt(v, f),
			// Keep the fractional point so a float never reads as an integer
			Number::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{v:.1}"),
			Number::Float(v) => Display::fmt(v, f),
		}
	}
}

impl ToSql for Number {
	fn fmt_sql(&self, f: &mut String) {
		match self {
			Number::Int(v) => v.fmt_sql(f),
			Number::Float(v) => v.fmt_sql(f),
		}
	}
}

impl Number {
	pub const NAN: Number = Number::Float(f64::NAN);

	pub fn is_nan(&self) -> bool {
		matches!(self, Number::Float(v) if v.is_nan())
	}

	pub fn is_int(&self) -> bool {
		matches!(self, Number::Int(_))
	}

	pub fn is_float(&self) -> bool {
		matches!(self, Number::Float(_))
	}

	pub fn to_float(&self) -> f64 {
		match self {
			Number::Int(v) => *v as f64,
			Number::Float(v) => *v,
		}
	}
}

/// Compares an integer with a float exactly, without rounding the integer
fn cmp_int_float(i: i64, f: f64) -> Option<Ordering> {
	if f.is_nan() {
		return None;
	}
	// 2^63, the first float above the i64 range
	const LIMIT: f64 = 9_223_372_036_854_775_808.0;
	if f >= LIMIT {
		return Some(Ordering::Less);
	}
	if f < -LIMIT {
		return Some(Ordering::Greater);
	}
	// Within range the integral part converts exactly
	let whole = f.trunc();
	Some(i.cmp(&(whole as i64)).then_with(|| {
		if f > whole {
			Ordering::Less
		} else if f < whole {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	}))
}

/// Floats compare by value, except that NaN is equal to NaN
fn cmp_floats(v: f64, w: f64) -> Option<Ordering> {
	match (v.is_nan(), w.is_nan()) {
		(true, true) => Some(Ordering::Equal),
		_ => v.partial_cmp(&w),
	}
}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		self.partial_cmp(other) == Some(Ordering::Equal)
	}
}

impl PartialOrd for Number {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match (self, other) {
			(Number::Int(v), Number::Int(w)) => v.partial_cmp(w),
			(Number::Float(v), Number::Float(w)) => cmp_floats(*v, *w),
			// ------------------------------
			(Number::Int(v), Number::Float(w)) => cmp_int_float(*v, *w),
			(Number::Float(v), Number::Int(w)) => cmp_int_float(*w, *v).map(Ordering::reverse),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn number_integer() {
		let out = Number::from_str("123").unwrap();
		assert!(out.is_int());
		assert_eq!("123", format!("{}", out));
		assert_eq!(out, Number::from(123));
	}

	#[test]
	fn number_integer_neg() {
		let out = Number::from_str("-123").unwrap();
		assert!(out.is_int());
		assert_eq!(out, Number::Int(-123));
	}

	#[test]
	fn number_decimal() {
		let out = Number::from_str("123.45").unwrap();
		assert!(out.is_float());
		assert_eq!("123.45", format!("{}", out));
		assert_eq!(out, Number::from(123.45));
	}

	#[test]
	fn number_decimal_keeps_float_when_integral() {
		let out = Number::from_str("1.0").unwrap();
		assert!(out.is_float());
		assert_eq!(out, Number::Int(1));
	}

	#[test]
	fn number_scientific() {
		let out = Number::from_str("12345e-1").unwrap();
		assert!(out.is_float());
		assert_eq!(out, Number::from(1234.5));
		let out = Number::from_str("-1.5E+02").unwrap();
		assert_eq!(out, Number::from(-150.0));
	}

	#[test]
	fn number_too_wide_for_int() {
		let out = Number::from_str("99999999999999999999").unwrap();
		assert!(out.is_float());
		assert_eq!(out, Number::Float(1e20));
	}

	#[test]
	fn number_special() {
		assert!(Number::from_str("NaN").unwrap().is_nan());
		assert_eq!(Number::from_str("Infinity").unwrap(), Number::Float(f64::INFINITY));
		assert_eq!(Number::from_str("-Infinity").unwrap(), Number::Float(f64::NEG_INFINITY));
	}

	#[test]
	fn number_invalid() {
		assert!(matches!(Number::from_str(""), Err(Error::TypeMismatch { .. })));
		assert!(matches!(Number::from_str("abc"), Err(Error::TypeMismatch { .. })));
		assert!(matches!(Number::from_str("1.2.3"), Err(Error::TypeMismatch { .. })));
		assert!(matches!(Number::from_str("--1"), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn number_nan_is_equal_to_itself() {
		assert_eq!(Number::NAN, Number::NAN);
		assert_eq!(Number::from_str("nan").unwrap(), Number::NAN);
		assert_ne!(Number::NAN, Number::Float(0.0));
		assert_ne!(Number::NAN, Number::Int(0));
		assert_eq!(Number::NAN.partial_cmp(&Number::Int(0)), None);
	}

	#[test]
	fn number_int_float_comparison_is_exact() {
		// 2^53 + 1 has no exact f64 representation
		let a = Number::Int(9_007_199_254_740_993);
		let b = Number::Float(9_007_199_254_740_992.0);
		let c = Number::Int(9_007_199_254_740_992);
		assert_ne!(a, b);
		assert_eq!(b, c);
		assert_ne!(a, c);
		assert!(a > b);
		assert!(b < a);
		assert_eq!(Number::Int(1), Number::Float(1.0));
		assert!(Number::Int(1) < Number::Float(1.5));
		assert!(Number::Int(-1) > Number::Float(-1.5));
		assert!(Number::Int(i64::MAX) < Number::Float(9_223_372_036_854_775_808.0));
		assert_eq!(Number::Int(i64::MIN), Number::Float(-9_223_372_036_854_775_808.0));
		assert!(Number::Int(i64::MIN) > Number::Float(f64::NEG_INFINITY));
	}

	#[test]
	fn number_display_keeps_float_point() {
		assert_eq!(Number::Float(1.0).to_string(), "1.0");
		assert_eq!(Number::Float(-0.0).to_string(), "-0.0");
		assert_eq!(Number::Float(2.5).to_string(), "2.5");
		assert_eq!(Number::Int(1).to_string(), "1");
		assert_eq!(Number::Float(f64::INFINITY).to_string(), "inf");
	}

	#[test]
	fn number_to_sql() {
		assert_eq!(Number::Int(1).to_sql(), "1");
		assert_eq!(Number::Float(1.0).to_sql(), "1.0");
		assert_eq!(Number::Float(-0.25).to_sql(), "-0.25");
	}

	#[test]
	fn number_serde_keeps_variant() {
		let int: Number = serde_json::from_str("1").unwrap();
		let float: Number = serde_json::from_str("1.0").unwrap();
		assert!(int.is_int());
		assert!(float.is_float());
		assert_eq!(serde_json::to_string(&Number::Int(7)).unwrap(), "7");
	}
}
