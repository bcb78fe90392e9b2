use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::err::{Error, Result};
use crate::sql::{ToSql, fmt_sql_separated};
use crate::syn;
use crate::value::{Kind, Number, Point};

/// Collects the points of a path or polygon, rejecting an empty sequence
fn collect_points<P: Into<Point>>(kind: Kind, points: impl IntoIterator<Item = P>) -> Result<Vec<Point>> {
	let points: Vec<Point> = points.into_iter().map(Into::into).collect();
	if points.is_empty() {
		return Err(Error::EmptyShape {
			kind,
		});
	}
	Ok(points)
}

/// Pairs up a flat coordinate sequence, `[x1, y1, x2, y2, ...]`
fn pair_up<N: Into<Number> + Copy>(kind: Kind, seq: &[N]) -> Result<Vec<Point>> {
	if seq.len() % 2 != 0 {
		return Err(Error::InvalidArity {
			kind,
			expected: "an even number of",
			actual: seq.len(),
		});
	}
	collect_points(kind, seq.chunks_exact(2).map(|c| Point::new(c[0], c[1])))
}

/// An open or closed sequence of points, PostgreSQL's `path` type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PathData")]
pub struct Path {
	points: Vec<Point>,
	closed: bool,
}

impl Path {
	/// Creates a path from at least one point
	pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>, closed: bool) -> Result<Self> {
		Ok(Path {
			points: collect_points(Kind::Path, points)?,
			closed,
		})
	}

	/// Creates a closed path, which is what a path is unless stated otherwise
	pub fn closed<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
		Path::new(points, true)
	}

	/// Creates an open path
	pub fn open<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
		Path::new(points, false)
	}

	/// Builds a path from a flat, even-length coordinate sequence
	pub fn from_sequence<N: Into<Number> + Copy>(seq: &[N], closed: bool) -> Result<Self> {
		Ok(Path {
			points: pair_up(Kind::Path, seq)?,
			closed,
		})
	}

	pub fn is_closed(&self) -> bool {
		self.closed
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	/// The number of points in the path, never zero
	pub fn npoints(&self) -> usize {
		self.points.len()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Point> {
		self.points.iter()
	}
}

impl<'a> IntoIterator for &'a Path {
	type Item = &'a Point;
	type IntoIter = std::slice::Iter<'a, Point>;

	fn into_iter(self) -> Self::IntoIter {
		self.points.iter()
	}
}

impl IntoIterator for Path {
	type Item = Point;
	type IntoIter = std::vec::IntoIter<Point>;

	fn into_iter(self) -> Self::IntoIter {
		self.points.into_iter()
	}
}

impl From<Polygon> for Path {
	fn from(v: Polygon) -> Self {
		Path {
			points: v.points,
			closed: true,
		}
	}
}

impl FromStr for Path {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		syn::path(s)
	}
}

impl Display for Path {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		summarise(f, "Path", &self.points, self.closed)
	}
}

impl ToSql for Path {
	fn fmt_sql(&self, f: &mut String) {
		let (open, close) = if self.closed {
			("'(", ")'::path")
		} else {
			("'[", "]'::path")
		};
		f.push_str(open);
		fmt_sql_separated(self.points.iter().map(Point::coords), f, ",");
		f.push_str(close);
	}
}

/// A closed sequence of points, PostgreSQL's `polygon` type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PolygonData")]
pub struct Polygon {
	points: Vec<Point>,
}

impl Polygon {
	/// Creates a polygon from at least one point
	pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>) -> Result<Self> {
		Ok(Polygon {
			points: collect_points(Kind::Polygon, points)?,
		})
	}

	/// Builds a polygon from a flat, even-length coordinate sequence
	pub fn from_sequence<N: Into<Number> + Copy>(seq: &[N]) -> Result<Self> {
		Ok(Polygon {
			points: pair_up(Kind::Polygon, seq)?,
		})
	}

	/// A polygon is always closed
	pub fn is_closed(&self) -> bool {
		true
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	/// The number of vertices, never zero
	pub fn npoints(&self) -> usize {
		self.points.len()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Point> {
		self.points.iter()
	}
}

impl<'a> IntoIterator for &'a Polygon {
	type Item = &'a Point;
	type IntoIter = std::slice::Iter<'a, Point>;

	fn into_iter(self) -> Self::IntoIter {
		self.points.iter()
	}
}

impl IntoIterator for Polygon {
	type Item = Point;
	type IntoIter = std::vec::IntoIter<Point>;

	fn into_iter(self) -> Self::IntoIter {
		self.points.into_iter()
	}
}

impl From<Path> for Polygon {
	/// Treats the path as closed, whatever it was before
	fn from(v: Path) -> Self {
		Polygon {
			points: v.points,
		}
	}
}

impl FromStr for Polygon {
	type Err = Error;
	fn from_str(s: &str) -> Result<Self> {
		syn::polygon(s)
	}
}

impl Display for Polygon {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		summarise(f, "Polygon", &self.points, true)
	}
}

impl ToSql for Polygon {
	fn fmt_sql(&self, f: &mut String) {
		f.push_str("'(");
		fmt_sql_separated(self.points.iter().map(Point::coords), f, ",");
		f.push_str(")'::polygon");
	}
}

// Deserialisation goes through the constructors so an empty shape is rejected

fn closed_by_default() -> bool {
	true
}

#[derive(Deserialize)]
struct PathData {
	points: Vec<Point>,
	#[serde(default = "closed_by_default")]
	closed: bool,
}

impl TryFrom<PathData> for Path {
	type Error = Error;
	fn try_from(v: PathData) -> Result<Self> {
		Path::new(v.points, v.closed)
	}
}

#[derive(Deserialize)]
struct PolygonData {
	points: Vec<Point>,
}

impl TryFrom<PolygonData> for Polygon {
	type Error = Error;
	fn try_from(v: PolygonData) -> Result<Self> {
		Polygon::new(v.points)
	}
}

fn summarise(f: &mut Formatter, name: &str, points: &[Point], closed: bool) -> fmt::Result {
	// Paths and polygons are never empty
	let (first, last) = (points[0], points[points.len() - 1]);
	write!(f, "<{name} {first}...{last} closed={closed} length={}>", points.len())
}
