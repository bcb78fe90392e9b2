/// Box value type
pub mod bounding_box;
/// Circle value type
pub mod circle;
/// Conversions to and from `geo-types`
mod geo;
/// Construction from JSON values
mod json;
/// Line segment value type
pub mod lseg;
/// Coordinate value type
pub mod number;
/// Path and polygon value types
pub mod path;
/// Point value type
pub mod point;

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

pub use self::bounding_box::BoundingBox;
pub use self::circle::{Circle, Part};
pub use self::lseg::LineSegment;
pub use self::number::Number;
pub use self::path::{Path, Polygon};
pub use self::point::Point;
use crate::err::{Error, Result};
use crate::sql::ToSql;
use crate::syn;

/// The kind of a geometric value
///
/// Each kind corresponds to one of PostgreSQL's built-in geometric types.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum Kind {
	Point,
	Circle,
	LineSegment,
	Box,
	Path,
	Polygon,
}

impl Kind {
	/// Every supported kind, in registration order
	pub const ALL: [Kind; 6] =
		[Kind::Point, Kind::Circle, Kind::LineSegment, Kind::Box, Kind::Path, Kind::Polygon];

	/// The PostgreSQL type name, as used in column definitions and casts
	pub fn db_type(&self) -> &'static str {
		match self {
			Kind::Point => "point",
			Kind::Circle => "circle",
			Kind::LineSegment => "lseg",
			Kind::Box => "box",
			Kind::Path => "path",
			Kind::Polygon => "polygon",
		}
	}
}

impl Display for Kind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.db_type())
	}
}

/// Checks the number of values handed to a `from_sequence` constructor
pub(crate) fn check_arity(
	kind: Kind,
	expected: &'static str,
	valid: bool,
	actual: usize,
) -> Result<()> {
	if valid {
		Ok(())
	} else {
		Err(Error::InvalidArity {
			kind,
			expected,
			actual,
		})
	}
}

/// Any geometric value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
	Point(Point),
	Circle(Circle),
	LineSegment(LineSegment),
	Box(BoundingBox),
	Path(Path),
	Polygon(Polygon),
}

impl Geometry {
	pub fn kind(&self) -> Kind {
		match self {
			Geometry::Point(_) => Kind::Point,
			Geometry::Circle(_) => Kind::Circle,
			Geometry::LineSegment(_) => Kind::LineSegment,
			Geometry::Box(_) => Kind::Box,
			Geometry::Path(_) => Kind::Path,
			Geometry::Polygon(_) => Kind::Polygon,
		}
	}

	/// Parses PostgreSQL's textual output for a value of the given kind
	pub fn parse(kind: Kind, text: &str) -> Result<Self> {
		Ok(match kind {
			Kind::Point => Geometry::Point(syn::point(text)?),
			Kind::Circle => Geometry::Circle(syn::circle(text)?),
			Kind::LineSegment => Geometry::LineSegment(syn::lseg(text)?),
			Kind::Box => Geometry::Box(syn::bounding_box(text)?),
			Kind::Path => Geometry::Path(syn::path(text)?),
			Kind::Polygon => Geometry::Polygon(syn::polygon(text)?),
		})
	}
}

impl Display for Geometry {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Geometry::Point(v) => Display::fmt(v, f),
			Geometry::Circle(v) => Display::fmt(v, f),
			Geometry::LineSegment(v) => Display::fmt(v, f),
			Geometry::Box(v) => Display::fmt(v, f),
			Geometry::Path(v) => Display::fmt(v, f),
			Geometry::Polygon(v) => Display::fmt(v, f),
		}
	}
}

impl ToSql for Geometry {
	fn fmt_sql(&self, f: &mut String) {
		match self {
			Geometry::Point(v) => v.fmt_sql(f),
			Geometry::Circle(v) => v.fmt_sql(f),
			Geometry::LineSegment(v) => v.fmt_sql(f),
			Geometry::Box(v) => v.fmt_sql(f),
			Geometry::Path(v) => v.fmt_sql(f),
			Geometry::Polygon(v) => v.fmt_sql(f),
		}
	}
}

macro_rules! from_shape {
	($($variant: ident => $shape: ty),*) => {
		$(
			impl From<$shape> for Geometry {
				fn from(v: $shape) -> Self {
					Geometry::$variant(v)
				}
			}
		)*
	};
}

from_shape!(
	Point => Point, Circle => Circle, LineSegment => LineSegment,
	Box => BoundingBox, Path => Path, Polygon => Polygon
);
