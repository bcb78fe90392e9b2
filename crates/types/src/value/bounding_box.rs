use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::err::{Error, Result};
use crate::sql::ToSql;
use crate::syn;
use crate::value::{Kind, Number, Point, check_arity};

/// A rectangular box, PostgreSQL's `box` type
///
/// The box is defined by any two opposite corners. The corners are kept
/// exactly as given: PostgreSQL normalises them itself, so two boxes with
/// swapped corners are not equal here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
	corner_a: Point,
	corner_b: Point,
}

impl BoundingBox {
	pub fn new(corner_a: impl Into<Point>, corner_b: impl Into<Point>) -> Self {
		BoundingBox {
			corner_a: corner_a.into(),
			corner_b: corner_b.into(),
		}
	}

	/// Builds a box from exactly four numbers, `[x1, y1, x2, y2]`
	pub fn from_sequence<N: Into<Number> + Copy>(seq: &[N]) -> Result<Self> {
		check_arity(Kind::Box, "4", seq.len() == 4, seq.len())?;
		Ok(BoundingBox::new((seq[0], seq[1]), (seq[2], seq[3])))
	}

	pub fn corner_a(&self) -> Point {
		self.corner_a
	}

	pub fn corner_b(&self) -> Point {
		self.corner_b
	}
}

impl IntoIterator for BoundingBox {
	type Item = Point;
	type IntoIter = std::array::IntoIter<Point, 2>;

	fn into_iter(self) -> Self::IntoIter {
		[self.corner_a, self.corner_b].into_iter()
	}
}

impl FromStr for BoundingBox {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		syn::bounding_box(s)
	}
}

impl Display for BoundingBox {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "<Box({},{})>", self.corner_a, self.corner_b)
	}
}

impl ToSql for BoundingBox {
	fn fmt_sql(&self, f: &mut String) {
		f.push('\'');
		self.corner_a.coords().fmt_sql(f);
		f.push(',');
		self.corner_b.coords().fmt_sql(f);
		f.push_str("'::box");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn box_constructors_agree() {
		assert_eq!(BoundingBox::new((1, 1), (1, 1)), BoundingBox::from_sequence(&[1, 1, 1, 1]).unwrap());
	}

	#[test]
	fn box_corners_are_not_normalised() {
		assert_eq!(BoundingBox::new((0, 0), (5, 5)), BoundingBox::new((0, 0), (5, 5)));
		assert_ne!(BoundingBox::new((0, 0), (5, 5)), BoundingBox::new((5, 5), (0, 0)));
	}

	#[test]
	fn box_from_sequence_wrong_arity() {
		for seq in [&[1, 2, 3, 5, 5][..], &[1, 2, 5][..]] {
			assert!(matches!(
				BoundingBox::from_sequence(seq),
				Err(Error::InvalidArity {
					kind: Kind::Box,
					..
				})
			));
		}
	}

	#[test]
	fn box_display() {
		assert_eq!(BoundingBox::new((0, 0), (1, 1)).to_string(), "<Box(<Point(0,0)>,<Point(1,1)>)>");
	}
}
