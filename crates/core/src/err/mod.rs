use pggeom_types::Kind;
use thiserror::Error;

use crate::registry::Oid;

/// An error raised while registering, encoding or decoding geometric values.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// A value could not be built, encoded or parsed
	#[error(transparent)]
	Types(#[from] pggeom_types::Error),

	/// The database connection failed to resolve a type identifier
	#[error("Unable to look up the type identifier for {kind}: {source}")]
	Lookup {
		kind: Kind,
		source: Box<dyn std::error::Error + Send + Sync>,
	},

	/// A column was decoded with a type identifier that was never registered
	#[error("No geometric type is registered for type identifier {0}")]
	UnknownOid(Oid),

	/// A value was encoded for a kind that was never registered
	#[error("The {0} type has not been registered on this connection")]
	Unregistered(Kind),

	/// A column value exceeded the configured literal length
	#[error("The literal is {length} bytes long, which exceeds the maximum of {max} bytes")]
	LiteralTooLarge {
		length: usize,
		max: usize,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
