use serde_json::Value as Json;

use crate::err::{Error, Result};
use crate::value::{BoundingBox, Circle, Geometry, Kind, LineSegment, Number, Path, Point, Polygon};

fn describe(v: &Json) -> String {
	match v {
		Json::Null => "null".to_owned(),
		Json::Bool(_) => "a boolean".to_owned(),
		Json::Number(n) => format!("the number {n}"),
		Json::String(s) => format!("the string {s:?}"),
		Json::Array(_) => "an array".to_owned(),
		Json::Object(_) => "an object".to_owned(),
	}
}

impl TryFrom<&Json> for Number {
	type Error = Error;
	fn try_from(v: &Json) -> Result<Self> {
		match v {
			Json::Number(n) => match n.as_i64() {
				Some(i) => Ok(Number::Int(i)),
				None => n.as_f64().map(Number::Float).ok_or_else(|| Error::TypeMismatch {
					expected: "a number",
					found: describe(v),
				}),
			},
			_ => Err(Error::TypeMismatch {
				expected: "a number",
				found: describe(v),
			}),
		}
	}
}

fn array(v: &Json) -> Result<&[Json]> {
	match v {
		Json::Array(v) => Ok(v),
		_ => Err(Error::TypeMismatch {
			expected: "an array",
			found: describe(v),
		}),
	}
}

fn numbers(v: &[Json]) -> Result<Vec<Number>> {
	v.iter().map(Number::try_from).collect()
}

/// Whether an array holds `[x, y]` pairs rather than flat coordinates
fn holds_pairs(v: &[Json]) -> bool {
	v.first().is_some_and(Json::is_array)
}

fn points(v: &[Json]) -> Result<Vec<Point>> {
	v.iter().map(Point::from_json).collect()
}

impl Point {
	/// Builds a point from a JSON `[x, y]` array
	pub fn from_json(v: &Json) -> Result<Self> {
		match v {
			Json::Array(a) => Point::from_sequence(&numbers(a)?),
			_ => Err(Error::TypeMismatch {
				expected: "a point or an [x, y] pair",
				found: describe(v),
			}),
		}
	}
}

impl Circle {
	/// Builds a circle from `[x, y, radius]` or `[[x, y], radius]`
	pub fn from_json(v: &Json) -> Result<Self> {
		let a = array(v)?;
		match a {
			[center @ Json::Array(_), radius] => {
				Ok(Circle::new(Point::from_json(center)?, Number::try_from(radius)?))
			}
			_ => Circle::from_sequence(&numbers(a)?),
		}
	}
}

impl LineSegment {
	/// Builds a segment from `[x1, y1, x2, y2]` or `[[x1, y1], [x2, y2]]`
	pub fn from_json(v: &Json) -> Result<Self> {
		let a = array(v)?;
		if holds_pairs(a) {
			match points(a)?.as_slice() {
				[start, end] => Ok(LineSegment::new(*start, *end)),
				other => Err(Error::InvalidArity {
					kind: Kind::LineSegment,
					expected: "2",
					actual: other.len(),
				}),
			}
		} else {
			LineSegment::from_sequence(&numbers(a)?)
		}
	}
}

impl BoundingBox {
	/// Builds a box from `[x1, y1, x2, y2]` or `[[x1, y1], [x2, y2]]`
	pub fn from_json(v: &Json) -> Result<Self> {
		let a = array(v)?;
		if holds_pairs(a) {
			match points(a)?.as_slice() {
				[first, second] => Ok(BoundingBox::new(*first, *second)),
				other => Err(Error::InvalidArity {
					kind: Kind::Box,
					expected: "2",
					actual: other.len(),
				}),
			}
		} else {
			BoundingBox::from_sequence(&numbers(a)?)
		}
	}
}

impl Path {
	/// Builds a path from flat coordinates or from an array of `[x, y]` pairs
	pub fn from_json(v: &Json, closed: bool) -> Result<Self> {
		let a = array(v)?;
		if holds_pairs(a) {
			Path::new(points(a)?, closed)
		} else {
			Path::from_sequence(&numbers(a)?, closed)
		}
	}
}

impl Polygon {
	/// Builds a polygon from flat coordinates or from an array of `[x, y]` pairs
	pub fn from_json(v: &Json) -> Result<Self> {
		let a = array(v)?;
		if holds_pairs(a) {
			Polygon::new(points(a)?)
		} else {
			Polygon::from_sequence(&numbers(a)?)
		}
	}
}

impl Geometry {
	/// Builds a value of the given kind from its JSON coordinates.
	///
	/// Paths built this way are closed, as with [`Path::closed`].
	pub fn from_json(kind: Kind, v: &Json) -> Result<Self> {
		Ok(match kind {
			Kind::Point => Point::from_json(v)?.into(),
			Kind::Circle => Circle::from_json(v)?.into(),
			Kind::LineSegment => LineSegment::from_json(v)?.into(),
			Kind::Box => BoundingBox::from_json(v)?.into(),
			Kind::Path => Path::from_json(v, true)?.into(),
			Kind::Polygon => Polygon::from_json(v)?.into(),
		})
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn json_point() {
		let point = Point::from_json(&json!([1, 2.5])).unwrap();
		assert_eq!(point, Point::new(1, 2.5));
		assert!(point.x().is_int());
		assert!(point.y().is_float());
	}

	#[test]
	fn json_point_rejects_non_numbers() {
		let err = Point::from_json(&json!([1, "2"])).unwrap_err();
		assert_eq!(
			err,
			Error::TypeMismatch {
				expected: "a number",
				found: "the string \"2\"".to_owned(),
			}
		);
		assert!(matches!(Point::from_json(&json!("(1,2)")), Err(Error::TypeMismatch { .. })));
		assert!(matches!(Point::from_json(&json!([1, 2, 3])), Err(Error::InvalidArity { .. })));
	}

	#[test]
	fn json_circle_forms() {
		let expected = Circle::new((0, 0), 5);
		assert_eq!(Circle::from_json(&json!([0, 0, 5])).unwrap(), expected);
		assert_eq!(Circle::from_json(&json!([[0, 0], 5])).unwrap(), expected);
		assert!(matches!(Circle::from_json(&json!([[0, 0], "5"])), Err(Error::TypeMismatch { .. })));
	}

	#[test]
	fn json_segments_and_boxes() {
		assert_eq!(
			LineSegment::from_json(&json!([[1, 2], [3, 4]])).unwrap(),
			LineSegment::from_json(&json!([1, 2, 3, 4])).unwrap()
		);
		assert_eq!(
			BoundingBox::from_json(&json!([0, 0, 5, 5])).unwrap(),
			BoundingBox::new((0, 0), (5, 5))
		);
		assert!(matches!(
			BoundingBox::from_json(&json!([[0, 0], [1, 1], [2, 2]])),
			Err(Error::InvalidArity {
				kind: Kind::Box,
				actual: 3,
				..
			})
		));
		assert!(matches!(
			LineSegment::from_json(&json!([[0, 0], 1])),
			Err(Error::TypeMismatch { .. })
		));
	}

	#[test]
	fn json_paths() {
		let path = Path::from_json(&json!([[0, 0], [1, 1]]), false).unwrap();
		assert_eq!(path, Path::open([(0, 0), (1, 1)]).unwrap());
		let polygon = Polygon::from_json(&json!([0, 0, 1, 1, 2, 0])).unwrap();
		assert_eq!(polygon.npoints(), 3);
		assert!(matches!(Polygon::from_json(&json!([])), Err(Error::EmptyShape { .. })));
	}

	#[test]
	fn json_geometry() {
		let value = Geometry::from_json(Kind::Path, &json!([[0, 0], [1, 1]])).unwrap();
		assert_eq!(value, Geometry::Path(Path::closed([(0, 0), (1, 1)]).unwrap()));
	}
}
