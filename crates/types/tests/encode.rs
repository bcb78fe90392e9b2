use pggeom_types::{BoundingBox, Circle, Geometry, LineSegment, Path, Point, Polygon, ToSql};
use rstest::rstest;

#[rstest]
// Points
#[case::point_int(Point::new(1, 2).into(), "point '(1, 2)'")]
#[case::point_float(Point::new(1.5, -2.0).into(), "point '(1.5, -2.0)'")]
#[case::point_special(Point::new(f64::NAN, f64::NEG_INFINITY).into(), "point '(NaN, -Infinity)'")]
// Circles
#[case::circle(Circle::new((2, 2), 2).into(), "circle '<(2,2),2>'")]
#[case::circle_float(Circle::new((0.5, -1), 0.25).into(), "circle '<(0.5,-1),0.25>'")]
// Line segments
#[case::lseg(LineSegment::new((1, 2), (3, 4)).into(), "'[(1,2), (3,4)]'::lseg")]
// Boxes, corners are left in the given order
#[case::bounding_box(BoundingBox::new((1, 1), (4, 4)).into(), "'(1,1),(4,4)'::box")]
#[case::bounding_box_reversed(BoundingBox::new((4, 4), (1, 1)).into(), "'(4,4),(1,1)'::box")]
// Paths
#[case::path_closed(Path::closed([(0, 0), (1, 1), (2, 0)]).unwrap().into(), "'((0,0),(1,1),(2,0))'::path")]
#[case::path_open(Path::open([Point::new(0, 0), Point::new(1.5, 1)]).unwrap().into(), "'[(0,0),(1.5,1)]'::path")]
#[case::path_single(Path::open([(7, 7)]).unwrap().into(), "'[(7,7)]'::path")]
// Polygons
#[case::polygon(Polygon::new([(0, 0), (4, 0), (4, 4)]).unwrap().into(), "'((0,0),(4,0),(4,4))'::polygon")]
fn geometry_to_sql(#[case] value: Geometry, #[case] expected: &str) {
	assert_eq!(value.to_sql(), expected);
}

#[test]
fn shapes_render_the_same_as_geometry() {
	let lseg = LineSegment::from_sequence(&[0, 0, 1, 1]).unwrap();
	assert_eq!(lseg.to_sql(), Geometry::from(lseg).to_sql());
	let polygon = Polygon::from_sequence(&[0, 0, 1, 1]).unwrap();
	assert_eq!(polygon.to_sql(), Geometry::from(polygon.clone()).to_sql());
}

#[test]
fn polygon_ignores_path_closure() {
	let open = Path::open([(0, 0), (1, 1)]).unwrap();
	assert_eq!(Polygon::from(open).to_sql(), "'((0,0),(1,1))'::polygon");
}
