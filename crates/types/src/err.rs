use thiserror::Error;

use crate::value::Kind;

/// An error raised while constructing or decoding a geometric value.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
	/// A shape received the wrong number of coordinates or points
	#[error("Incorrect number of coordinates for {kind}: expected {expected}, found {actual}")]
	InvalidArity {
		kind: Kind,
		expected: &'static str,
		actual: usize,
	},

	/// A path or polygon was constructed without any points
	#[error("A {kind} must contain at least one point")]
	EmptyShape {
		kind: Kind,
	},

	/// A value of the wrong type was supplied where a coordinate or point was required
	#[error("Expected {expected}, found {found}")]
	TypeMismatch {
		expected: &'static str,
		found: String,
	},

	/// The textual representation did not match the structure of the shape
	#[error("Bad {kind} representation: {raw:?}")]
	MalformedLiteral {
		kind: Kind,
		raw: String,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
