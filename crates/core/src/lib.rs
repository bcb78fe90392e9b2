//! # pggeom
//!
//! Support for PostgreSQL's built-in geometric types in Rust database clients.
//!
//! The value types and the literal codec live in [`pggeom_types`] and are
//! re-exported here. This crate adds the per-connection [`Registry`], which maps
//! database type identifiers to geometric kinds, and builders for geometric
//! conditions and functions in [`expr`].
//!
//! ```rust
//! use pggeom::{Kind, Oid, Point, Registry, TypeLookup};
//!
//! struct Connection;
//!
//! impl TypeLookup for Connection {
//! 	type Error = std::io::Error;
//!
//! 	fn lookup_oid(&mut self, sql: &str) -> Result<Oid, Self::Error> {
//! 		Ok(match sql {
//! 			"SELECT NULL::point" => 600,
//! 			_ => return Err(std::io::Error::other("unknown type")),
//! 		})
//! 	}
//! }
//!
//! let mut registry = Registry::default();
//! registry.register(&mut Connection, Kind::Point).unwrap();
//!
//! let value = registry.decode(600, Some("(1,2)")).unwrap();
//! assert_eq!(value, Some(Point::new(1, 2).into()));
//! assert_eq!(registry.encode(&Point::new(1, 2).into()).unwrap().sql, "point '(1, 2)'");
//! ```

#[macro_use]
extern crate tracing;

#[macro_use]
mod mac;

pub mod cnf;
pub mod err;
pub mod expr;
pub mod registry;

pub use pggeom_types as types;
pub use pggeom_types::{
	BoundingBox, Circle, Geometry, Kind, LineSegment, Number, Path, Point, Polygon, ToSql, decode,
};

pub use crate::err::{Error, Result};
pub use crate::registry::{Oid, Options, Parameter, Registry, TypeLookup};
