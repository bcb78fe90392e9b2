//! # pggeom types
//!
//! Value types for PostgreSQL's built-in geometric types (`point`, `circle`,
//! `lseg`, `box`, `path` and `polygon`), together with the codec between those
//! values and PostgreSQL's textual representation.
//!
//! Values are rendered into query literals with [`ToSql`], and parsed from
//! result columns with [`decode`] or [`Geometry::parse`].
//!
//! ```rust
//! use pggeom_types::{BoundingBox, Geometry, Kind, ToSql, decode};
//!
//! let area = BoundingBox::new((0, 0), (5, 5));
//! assert_eq!(area.to_sql(), "'(0,0),(5,5)'::box");
//!
//! let value = decode(Some("(5,5),(0,0)"), Kind::Box).unwrap();
//! assert_eq!(value, Some(Geometry::Box(BoundingBox::new((5, 5), (0, 0)))));
//! ```

mod err;
pub mod sql;
pub mod syn;
mod value;

pub use err::{Error, Result};
pub use sql::ToSql;
pub use syn::decode;
pub use value::*;
