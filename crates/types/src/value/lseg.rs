use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::err::{Error, Result};
use crate::sql::ToSql;
use crate::syn;
use crate::value::{Kind, Number, Point, check_arity};

/// A finite line segment, PostgreSQL's `lseg` type
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
	start: Point,
	end: Point,
}

impl LineSegment {
	pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
		LineSegment {
			start: start.into(),
			end: end.into(),
		}
	}

	/// Builds a segment from exactly four numbers, `[x1, y1, x2, y2]`.
	///
	/// The first pair becomes the start and the second pair the end, which is
	/// the same order the segment is written in a literal.
	pub fn from_sequence<N: Into<Number> + Copy>(seq: &[N]) -> Result<Self> {
		check_arity(Kind::LineSegment, "4", seq.len() == 4, seq.len())?;
		Ok(LineSegment::new((seq[0], seq[1]), (seq[2], seq[3])))
	}

	pub fn start(&self) -> Point {
		self.start
	}

	pub fn end(&self) -> Point {
		self.end
	}
}

impl IntoIterator for LineSegment {
	type Item = Point;
	type IntoIter = std::array::IntoIter<Point, 2>;

	fn into_iter(self) -> Self::IntoIter {
		[self.start, self.end].into_iter()
	}
}

impl FromStr for LineSegment {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		syn::lseg(s)
	}
}

impl Display for LineSegment {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "<Lseg({},{})>", self.start, self.end)
	}
}

impl ToSql for LineSegment {
	fn fmt_sql(&self, f: &mut String) {
		f.push_str("'[");
		self.start.coords().fmt_sql(f);
		f.push_str(", ");
		self.end.coords().fmt_sql(f);
		f.push_str("]'::lseg");
	}
}
