//! Parsing of PostgreSQL's textual output for the geometric types.
//!
//! Values are recognised by their structure (brackets, parentheses and commas)
//! rather than by a complete grammar. Each pattern is searched for anywhere in
//! the input and is tolerant of whitespace around every delimiter.

use std::sync::LazyLock;

use regex::Regex;

use crate::err::{Error, Result};
use crate::value::{BoundingBox, Circle, Geometry, Kind, LineSegment, Number, Path, Point, Polygon};

/// A single coordinate, including the float spellings PostgreSQL may output
const NUMBER: &str = r"([+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?|[+-]?(?i:infinity|inf)|(?i:nan))";

/// Expands every `{n}` in a template into a captured coordinate
fn pattern(template: &str) -> Regex {
	Regex::new(&template.replace("{n}", NUMBER)).expect("geometric literal patterns are valid")
}

#[rustfmt::skip] static POINT: LazyLock<Regex> = LazyLock::new(|| pattern(r"\(\s*{n}\s*,\s*{n}\s*\)"));
#[rustfmt::skip] static CIRCLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"<\s*\(\s*{n}\s*,\s*{n}\s*\)\s*,\s*{n}\s*>"));
#[rustfmt::skip] static LSEG: LazyLock<Regex> = LazyLock::new(|| pattern(r"\[\s*\(\s*{n}\s*,\s*{n}\s*\)\s*,\s*\(\s*{n}\s*,\s*{n}\s*\)\s*\]"));
#[rustfmt::skip] static BOX: LazyLock<Regex> = LazyLock::new(|| pattern(r"\(\s*{n}\s*,\s*{n}\s*\)\s*,\s*\(\s*{n}\s*,\s*{n}\s*\)"));
#[rustfmt::skip] static ENCLOSURE: LazyLock<Regex> = LazyLock::new(|| pattern(r"(?s)^\s*([\(\[])(.*)([\)\]])\s*$"));

fn malformed(kind: Kind, text: &str) -> Error {
	Error::MalformedLiteral {
		kind,
		raw: text.to_owned(),
	}
}

/// Matches `re` against `text` and coerces every captured coordinate
fn coordinates(kind: Kind, re: &Regex, text: &str) -> Result<Vec<Number>> {
	let captures = re.captures(text).ok_or_else(|| malformed(kind, text))?;
	captures
		.iter()
		.skip(1)
		.map(|m| {
			let m = m.ok_or_else(|| malformed(kind, text))?;
			m.as_str().parse::<Number>().map_err(|_| malformed(kind, text))
		})
		.collect()
}

/// Splits a path or polygon into its enclosure and the points it contains
fn points(kind: Kind, text: &str) -> Result<(bool, Vec<Point>)> {
	let captures = ENCLOSURE.captures(text).ok_or_else(|| malformed(kind, text))?;
	let closed = match (&captures[1], &captures[3]) {
		("(", ")") => true,
		("[", "]") => false,
		_ => return Err(malformed(kind, text)),
	};
	let inner = &captures[2];
	let points = POINT
		.captures_iter(inner)
		.map(|c| {
			let x = c[1].parse::<Number>().map_err(|_| malformed(kind, text))?;
			let y = c[2].parse::<Number>().map_err(|_| malformed(kind, text))?;
			Ok(Point::new(x, y))
		})
		.collect::<Result<Vec<_>>>()?;
	if points.is_empty() {
		return Err(malformed(kind, text));
	}
	Ok((closed, points))
}

/// Parses a point, `(x,y)`
pub fn point(text: &str) -> Result<Point> {
	Point::from_sequence(&coordinates(Kind::Point, &POINT, text)?)
}

/// Parses a circle, `<(x,y),r>`
pub fn circle(text: &str) -> Result<Circle> {
	Circle::from_sequence(&coordinates(Kind::Circle, &CIRCLE, text)?)
}

/// Parses a line segment, `[(x1,y1),(x2,y2)]`
pub fn lseg(text: &str) -> Result<LineSegment> {
	LineSegment::from_sequence(&coordinates(Kind::LineSegment, &LSEG, text)?)
}

/// Parses a box, `(x1,y1),(x2,y2)`
pub fn bounding_box(text: &str) -> Result<BoundingBox> {
	BoundingBox::from_sequence(&coordinates(Kind::Box, &BOX, text)?)
}

/// Parses a path, `[(x1,y1),...]` when open or `((x1,y1),...)` when closed
pub fn path(text: &str) -> Result<Path> {
	let (closed, points) = points(Kind::Path, text)?;
	Path::new(points, closed)
}

/// Parses a polygon, `((x1,y1),...)`
///
/// A polygon is always closed, so a bracketed enclosure is accepted too.
pub fn polygon(text: &str) -> Result<Polygon> {
	let (_, points) = points(Kind::Polygon, text)?;
	Polygon::new(points)
}

/// Decodes a column value of the given kind, passing a null straight through
pub fn decode(text: Option<&str>, kind: Kind) -> Result<Option<Geometry>> {
	text.map(|text| Geometry::parse(kind, text)).transpose()
}
