use geo_types::{Coord, Line, LineString, Rect};

use crate::err::{Error, Result};
use crate::value::{BoundingBox, Kind, LineSegment, Path, Point, Polygon};

impl From<Point> for Coord<f64> {
	fn from(v: Point) -> Self {
		Coord {
			x: v.x().to_float(),
			y: v.y().to_float(),
		}
	}
}

impl From<Coord<f64>> for Point {
	fn from(v: Coord<f64>) -> Self {
		Point::new(v.x, v.y)
	}
}

impl From<Point> for geo_types::Point<f64> {
	fn from(v: Point) -> Self {
		geo_types::Point(v.into())
	}
}

impl From<geo_types::Point<f64>> for Point {
	fn from(v: geo_types::Point<f64>) -> Self {
		v.0.into()
	}
}

impl From<LineSegment> for Line<f64> {
	fn from(v: LineSegment) -> Self {
		Line::new(v.start(), v.end())
	}
}

impl From<Line<f64>> for LineSegment {
	fn from(v: Line<f64>) -> Self {
		LineSegment::new(v.start, v.end)
	}
}

impl From<BoundingBox> for Rect<f64> {
	/// The resulting rectangle has its corners normalised to minimum and maximum
	fn from(v: BoundingBox) -> Self {
		Rect::new(v.corner_a(), v.corner_b())
	}
}

impl From<Rect<f64>> for BoundingBox {
	fn from(v: Rect<f64>) -> Self {
		BoundingBox::new(v.min(), v.max())
	}
}

impl From<Path> for LineString<f64> {
	fn from(v: Path) -> Self {
		let closed = v.is_closed();
		let mut line: LineString<f64> = v.into_iter().map(Coord::from).collect();
		if closed {
			line.close();
		}
		line
	}
}

impl TryFrom<LineString<f64>> for Path {
	type Error = Error;
	/// A line string whose ends meet becomes a closed path without the repeated end point
	fn try_from(v: LineString<f64>) -> Result<Self> {
		let closed = v.is_closed() && v.0.len() > 1;
		let mut coords = v.0;
		if closed {
			coords.pop();
		}
		Path::new(coords, closed)
	}
}

impl From<Polygon> for geo_types::Polygon<f64> {
	fn from(v: Polygon) -> Self {
		let exterior: LineString<f64> = v.into_iter().map(Coord::from).collect();
		geo_types::Polygon::new(exterior, vec![])
	}
}

impl TryFrom<geo_types::Polygon<f64>> for Polygon {
	type Error = Error;
	/// Only the exterior ring is kept, PostgreSQL polygons have no holes
	fn try_from(v: geo_types::Polygon<f64>) -> Result<Self> {
		let (exterior, _) = v.into_inner();
		let mut coords = exterior.0;
		if coords.len() > 1 && coords.first() == coords.last() {
			coords.pop();
		}
		if coords.is_empty() {
			return Err(Error::EmptyShape {
				kind: Kind::Polygon,
			});
		}
		Polygon::new(coords)
	}
}
