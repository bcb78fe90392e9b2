use pggeom_types::{BoundingBox, Circle, Error, Kind, Path, Point};

#[test]
fn test_invalid_arity_error() {
	let err = Point::from_sequence(&[1, 2, 3]).unwrap_err();

	assert_eq!(
		err,
		Error::InvalidArity {
			kind: Kind::Point,
			expected: "2",
			actual: 3,
		}
	);

	let msg = err.to_string();
	assert!(msg.contains("point"));
	assert!(msg.contains("expected 2"));
	assert!(msg.contains("found 3"));
}

#[test]
fn test_invalid_arity_for_every_fixed_shape() {
	assert!(matches!(Circle::from_sequence(&[1, 2]), Err(Error::InvalidArity { .. })));
	assert!(matches!(BoundingBox::from_sequence(&[1, 2, 3]), Err(Error::InvalidArity { .. })));
	assert!(matches!(Path::from_sequence(&[1, 2, 3], true), Err(Error::InvalidArity { .. })));
}

#[test]
fn test_empty_shape_error() {
	let err = Path::open(Vec::<Point>::new()).unwrap_err();

	assert_eq!(
		err,
		Error::EmptyShape {
			kind: Kind::Path
		}
	);
	assert_eq!(err.to_string(), "A path must contain at least one point");
}

#[test]
fn test_type_mismatch_error() {
	let err = Point::from_json(&serde_json::json!([1, null])).unwrap_err();

	let msg = err.to_string();
	assert!(msg.contains("a number"));
	assert!(msg.contains("null"));
}

#[test]
fn test_malformed_literal_error() {
	let err = "garbage".parse::<Point>().unwrap_err();

	assert_eq!(
		err,
		Error::MalformedLiteral {
			kind: Kind::Point,
			raw: "garbage".to_owned(),
		}
	);
	assert_eq!(err.to_string(), "Bad point representation: \"garbage\"");
}
