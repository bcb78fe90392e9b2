use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::err::{Error, Result};
use crate::sql::ToSql;
use crate::syn;
use crate::value::{Kind, Number, Point, check_arity};

/// A circle, PostgreSQL's `circle` type
///
/// The radius is expected to be non-negative, but this is left for the
/// database to enforce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
	center: Point,
	radius: Number,
}

impl Circle {
	/// Creates a circle from its center, given as a [`Point`] or an `(x, y)` pair
	pub fn new(center: impl Into<Point>, radius: impl Into<Number>) -> Self {
		Circle {
			center: center.into(),
			radius: radius.into(),
		}
	}

	/// Builds a circle from exactly three numbers, `[x, y, radius]`
	pub fn from_sequence<N: Into<Number> + Copy>(seq: &[N]) -> Result<Self> {
		check_arity(Kind::Circle, "3", seq.len() == 3, seq.len())?;
		Ok(Circle::new((seq[0], seq[1]), seq[2]))
	}

	pub fn center(&self) -> Point {
		self.center
	}

	pub fn radius(&self) -> Number {
		self.radius
	}

	/// The center followed by the radius
	pub fn parts(&self) -> [Part; 2] {
		[Part::Point(self.center), Part::Number(self.radius)]
	}
}

/// A constituent of a [`Circle`], yielded when iterating over it
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Part {
	Point(Point),
	Number(Number),
}

impl IntoIterator for Circle {
	type Item = Part;
	type IntoIter = std::array::IntoIter<Part, 2>;

	fn into_iter(self) -> Self::IntoIter {
		self.parts().into_iter()
	}
}

impl FromStr for Circle {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		syn::circle(s)
	}
}

impl Display for Circle {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "<Circle({},{})>", self.center, self.radius)
	}
}

impl ToSql for Circle {
	fn fmt_sql(&self, f: &mut String) {
		f.push_str("circle '<");
		self.center.coords().fmt_sql(f);
		f.push(',');
		self.radius.fmt_sql(f);
		f.push_str(">'");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn circle_constructors_agree() {
		let a = Circle::new(Point::new(1, 1), 5);
		let b = Circle::new((1, 1), 5);
		let c = Circle::from_sequence(&[1, 1, 5]).unwrap();
		assert_eq!(a, b);
		assert_eq!(b, c);
	}

	#[test]
	fn circle_from_sequence_wrong_arity() {
		for seq in [&[1, 2][..], &[1, 2, 3, 2][..], &[][..]] {
			assert!(matches!(
				Circle::from_sequence(seq),
				Err(Error::InvalidArity {
					kind: Kind::Circle,
					..
				})
			));
		}
	}

	#[test]
	fn circle_iteration() {
		let parts: Vec<Part> = Circle::new((0, 0), 2.5).into_iter().collect();
		assert_eq!(parts, vec![Part::Point(Point::new(0, 0)), Part::Number(Number::Float(2.5))]);
	}

	#[test]
	fn circle_display() {
		assert_eq!(Circle::new((0, 0), 5).to_string(), "<Circle(<Point(0,0)>,5)>");
	}
}
