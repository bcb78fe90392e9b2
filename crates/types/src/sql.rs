//! SQL literal rendering.

/// Trait for types that can be converted to a PostgreSQL literal.
///
/// There's an important distinction between this trait and `Display`.
/// `Display` should be used for human-readable output, it does not particularly
/// need to be SQL compatible. `ToSql` produces a fragment which is substituted
/// verbatim into a query, so it must never need any further quoting.
///
/// ```rust
/// use pggeom_types::{Point, ToSql};
///
/// let point = Point::new(1, 2.5);
/// assert_eq!(point.to_string(), "<Point(1,2.5)>");
/// assert_eq!(point.to_sql(), "point '(1, 2.5)'");
/// ```
pub trait ToSql {
	/// Convert the type to a SQL string.
	fn to_sql(&self) -> String {
		let mut f = String::new();
		self.fmt_sql(&mut f);
		f
	}

	/// Format the type to a SQL string.
	fn fmt_sql(&self, f: &mut String);
}

/// Formats a sequence of items that implement ToSql, separated by `separator`.
pub fn fmt_sql_separated<T: ToSql>(
	items: impl IntoIterator<Item = T>,
	f: &mut String,
	separator: &str,
) {
	for (i, item) in items.into_iter().enumerate() {
		if i > 0 {
			f.push_str(separator);
		}
		item.fmt_sql(f);
	}
}

/// Macro for writing to a SQL string.
///
/// This will panic if the write fails but the expectation is that it is only used in ToSql
/// implementations which operate on a `&mut String`. `write!` cannot fail when writing to a
/// `String`.
#[macro_export]
macro_rules! write_sql {
	($f:expr, $($tt:tt)*) => {{
		use std::fmt::Write;
		let __f: &mut String = $f;
		write!(__f, $($tt)*).expect("Write cannot fail when writing to a String")
	}}
}

impl<T: ToSql + ?Sized> ToSql for &T {
	fn fmt_sql(&self, f: &mut String) {
		(**self).fmt_sql(f)
	}
}

impl ToSql for i64 {
	fn fmt_sql(&self, f: &mut String) {
		write_sql!(f, "{}", self)
	}
}

impl ToSql for f64 {
	fn fmt_sql(&self, f: &mut String) {
		if self.is_nan() {
			f.push_str("NaN");
		} else if self.is_infinite() {
			f.push_str(if self.is_sign_positive() {
				"Infinity"
			} else {
				"-Infinity"
			});
		} else {
			let start = f.len();
			write_sql!(f, "{}", self);
			// Floats always carry a fractional part so they stay floats on the way back
			if !f[start..].contains('.') {
				f.push_str(".0");
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn integers() {
		assert_eq!(0i64.to_sql(), "0");
		assert_eq!((-42i64).to_sql(), "-42");
	}

	#[test]
	fn floats() {
		assert_eq!(1.0f64.to_sql(), "1.0");
		assert_eq!((-2.5f64).to_sql(), "-2.5");
		assert_eq!(0.1f64.to_sql(), "0.1");
		assert_eq!((-0.0f64).to_sql(), "-0.0");
		assert_eq!(1e20f64.to_sql(), "100000000000000000000.0");
	}

	#[test]
	fn special_floats() {
		assert_eq!(f64::NAN.to_sql(), "NaN");
		assert_eq!(f64::INFINITY.to_sql(), "Infinity");
		assert_eq!(f64::NEG_INFINITY.to_sql(), "-Infinity");
	}

	#[test]
	fn separated() {
		let mut f = String::new();
		fmt_sql_separated([1i64, 2, 3], &mut f, ",");
		assert_eq!(f, "1,2,3");
	}
}
