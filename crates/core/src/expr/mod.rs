//! Builders for SQL conditions and functions over geometric columns.
//!
//! ```rust
//! use pggeom::expr::{GeoExpr, SqlFunction};
//! use pggeom::{BoundingBox, ToSql};
//!
//! let cond = GeoExpr::new("area").contains(BoundingBox::new((0, 0), (5, 5)));
//! assert_eq!(cond.to_sql(), "area @> '(0,0),(5,5)'::box");
//! assert_eq!(SqlFunction::Area.call("area"), "area(area)");
//! ```

mod condition;
mod function;
mod operator;

pub use self::condition::{Condition, GeoExpr};
pub use self::function::{Distance, SqlFunction};
pub use self::operator::GeoOperator;
