use pggeom_types::{Geometry, ToSql, write_sql};

use crate::expr::GeoOperator;

/// A boolean SQL condition over a geometric column
#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
	/// `<column> <operator> <literal>`
	Binary {
		column: String,
		operator: GeoOperator,
		operand: Geometry,
	},
	/// `<operator> <column>`
	Unary {
		operator: GeoOperator,
		column: String,
	},
	Not(Box<Condition>),
	And(Box<Condition>, Box<Condition>),
	Or(Box<Condition>, Box<Condition>),
}

impl Condition {
	pub fn and(self, other: Condition) -> Condition {
		Condition::And(Box::new(self), Box::new(other))
	}

	pub fn or(self, other: Condition) -> Condition {
		Condition::Or(Box::new(self), Box::new(other))
	}

	#[expect(clippy::should_implement_trait)]
	pub fn not(self) -> Condition {
		Condition::Not(Box::new(self))
	}
}

impl ToSql for Condition {
	fn fmt_sql(&self, f: &mut String) {
		match self {
			Condition::Binary {
				column,
				operator,
				operand,
			} => {
				write_sql!(f, "{column} {operator} ");
				operand.fmt_sql(f);
			}
			Condition::Unary {
				operator,
				column,
			} => write_sql!(f, "{operator} {column}"),
			Condition::Not(inner) => {
				f.push_str("NOT (");
				inner.fmt_sql(f);
				f.push(')');
			}
			Condition::And(left, right) => fmt_joined(f, left, "AND", right),
			Condition::Or(left, right) => fmt_joined(f, left, "OR", right),
		}
	}
}

fn fmt_joined(f: &mut String, left: &Condition, keyword: &str, right: &Condition) {
	f.push('(');
	left.fmt_sql(f);
	write_sql!(f, ") {keyword} (");
	right.fmt_sql(f);
	f.push(')');
}

/// Builds conditions over one geometric column
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeoExpr {
	column: String,
}

impl GeoExpr {
	pub fn new(column: impl Into<String>) -> Self {
		GeoExpr {
			column: column.into(),
		}
	}

	pub fn column(&self) -> &str {
		&self.column
	}

	/// Applies any binary operator against a literal operand
	pub fn binary(&self, operator: GeoOperator, operand: impl Into<Geometry>) -> Condition {
		Condition::Binary {
			column: self.column.clone(),
			operator,
			operand: operand.into(),
		}
	}

	/// Applies a prefix operator to the column itself
	pub fn unary(&self, operator: GeoOperator) -> Condition {
		Condition::Unary {
			operator,
			column: self.column.clone(),
		}
	}

	pub fn overlaps(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Overlaps, operand)
	}

	pub fn is_strictly_left_of(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::StrictlyLeft, operand)
	}

	pub fn is_strictly_right_of(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::StrictlyRight, operand)
	}

	pub fn does_not_extend_above(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::NotAbove, operand)
	}

	pub fn does_not_extend_below(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::NotBelow, operand)
	}

	pub fn does_not_extend_right(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::NotRight, operand)
	}

	pub fn does_not_extend_left(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::NotLeft, operand)
	}

	pub fn intersects_with(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Intersects, operand)
	}

	/// There is no negated intersection operator, so this wraps `?#` in `NOT`
	pub fn not_intersects_with(&self, operand: impl Into<Geometry>) -> Condition {
		self.intersects_with(operand).not()
	}

	pub fn contains(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Contains, operand)
	}

	pub fn contained_on(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::ContainedIn, operand)
	}

	/// Whether a line segment is horizontal
	pub fn is_horizontal(&self) -> Condition {
		self.unary(GeoOperator::Horizontal)
	}

	/// Whether two points are horizontally aligned
	pub fn is_horizontal_aligned(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Horizontal, operand)
	}

	/// Whether a line segment is vertical
	pub fn is_vertical(&self) -> Condition {
		self.unary(GeoOperator::Vertical)
	}

	/// Whether two points are vertically aligned
	pub fn is_vertical_aligned(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Vertical, operand)
	}

	pub fn is_perpendicular_to(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Perpendicular, operand)
	}

	pub fn is_parallel_to(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Parallel, operand)
	}

	pub fn same_as(&self, operand: impl Into<Geometry>) -> Condition {
		self.binary(GeoOperator::Same, operand)
	}
}
