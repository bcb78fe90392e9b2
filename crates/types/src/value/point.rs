use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::err::{Error, Result};
use crate::sql::ToSql;
use crate::syn;
use crate::value::{Kind, Number, check_arity};

/// A point on a plane, PostgreSQL's `point` type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	x: Number,
	y: Number,
}

impl Point {
	pub fn new(x: impl Into<Number>, y: impl Into<Number>) -> Self {
		Point {
			x: x.into(),
			y: y.into(),
		}
	}

	/// Builds a point from exactly two coordinates, `[x, y]`
	pub fn from_sequence<N: Into<Number> + Copy>(seq: &[N]) -> Result<Self> {
		check_arity(Kind::Point, "2", seq.len() == 2, seq.len())?;
		Ok(Point::new(seq[0], seq[1]))
	}

	pub fn x(&self) -> Number {
		self.x
	}

	pub fn y(&self) -> Number {
		self.y
	}

	/// The coordinates in order, `[x, y]`
	pub fn parts(&self) -> [Number; 2] {
		[self.x, self.y]
	}

	/// The bare `(x,y)` pair, as it appears inside the larger shapes
	pub(crate) fn coords(&self) -> Coords<'_> {
		Coords(self)
	}
}

impl<X: Into<Number>, Y: Into<Number>> From<(X, Y)> for Point {
	fn from((x, y): (X, Y)) -> Self {
		Point::new(x, y)
	}
}

impl<N: Into<Number>> From<[N; 2]> for Point {
	fn from([x, y]: [N; 2]) -> Self {
		Point::new(x, y)
	}
}

impl IntoIterator for Point {
	type Item = Number;
	type IntoIter = std::array::IntoIter<Number, 2>;

	fn into_iter(self) -> Self::IntoIter {
		self.parts().into_iter()
	}
}

impl FromStr for Point {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		syn::point(s)
	}
}

impl Display for Point {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "<Point({},{})>", self.x, self.y)
	}
}

impl ToSql for Point {
	fn fmt_sql(&self, f: &mut String) {
		f.push_str("point '(");
		self.x.fmt_sql(f);
		f.push_str(", ");
		self.y.fmt_sql(f);
		f.push_str(")'");
	}
}

pub(crate) struct Coords<'a>(&'a Point);

impl ToSql for Coords<'_> {
	fn fmt_sql(&self, f: &mut String) {
		f.push('(');
		self.0.x.fmt_sql(f);
		f.push(',');
		self.0.y.fmt_sql(f);
		f.push(')');
	}
}
