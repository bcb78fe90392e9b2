use std::fmt::{self, Display, Formatter};

use pggeom_types::{Geometry, ToSql, write_sql};

use crate::expr::GeoOperator;

/// A PostgreSQL geometric function applied to a single column
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SqlFunction {
	/// Bounding box
	Box,
	/// Circle converted from the value
	Circle,
	/// Center point
	Point,
	Area,
	Center,
	Height,
	Diameter,
	Radius,
	Width,
	/// Number of points
	Npoints,
}

impl SqlFunction {
	pub fn name(&self) -> &'static str {
		match self {
			Self::Box => "box",
			Self::Circle => "circle",
			Self::Point => "point",
			Self::Area => "area",
			Self::Center => "center",
			Self::Height => "height",
			Self::Diameter => "diameter",
			Self::Radius => "radius",
			Self::Width => "width",
			Self::Npoints => "npoints",
		}
	}

	/// Renders a call of this function over the column
	pub fn call(&self, column: &str) -> String {
		format!("{}({column})", self.name())
	}
}

impl Display for SqlFunction {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// The distance between a column and a literal value
#[derive(Clone, Debug, PartialEq)]
pub struct Distance {
	column: String,
	operand: Geometry,
}

impl Distance {
	pub fn between(column: impl Into<String>, operand: impl Into<Geometry>) -> Self {
		Distance {
			column: column.into(),
			operand: operand.into(),
		}
	}
}

impl ToSql for Distance {
	fn fmt_sql(&self, f: &mut String) {
		write_sql!(f, "({} {} ", self.column, GeoOperator::Distance);
		self.operand.fmt_sql(f);
		f.push(')');
	}
}
