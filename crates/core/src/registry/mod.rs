//! Per-connection mapping between database type identifiers and geometric kinds.
//!
//! PostgreSQL assigns every data type an identifier (an OID), and result
//! columns are tagged with the identifier of their type. A [`Registry`] is built
//! while a connection is being set up: each geometric type is resolved once with
//! `SELECT NULL::<type>`, and the resulting identifiers are then used to decode
//! columns and to tag encoded parameters.

use std::collections::HashMap;

use pggeom_types::{Geometry, Kind, ToSql};

use crate::cnf::{MAX_LITERAL_LENGTH, SKIP_MISSING_TYPES};
use crate::err::{Error, Result};

/// A database-assigned type identifier
pub type Oid = u32;

/// The boundary to a database connection.
///
/// Implementations run the given query and return the type identifier of the
/// first column of its result.
pub trait TypeLookup {
	type Error: std::error::Error + Send + Sync + 'static;

	fn lookup_oid(&mut self, sql: &str) -> std::result::Result<Oid, Self::Error>;
}

/// Settings for a single registry
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Options {
	/// The largest literal, in bytes, that will be decoded
	pub max_literal_length: usize,
	/// Whether kinds the database cannot resolve are skipped when connecting
	pub skip_missing_types: bool,
}

impl Default for Options {
	fn default() -> Self {
		Options {
			max_literal_length: *MAX_LITERAL_LENGTH,
			skip_missing_types: *SKIP_MISSING_TYPES,
		}
	}
}

impl Options {
	pub fn with_max_literal_length(mut self, max: usize) -> Self {
		self.max_literal_length = max;
		self
	}

	pub fn with_skip_missing_types(mut self, skip: bool) -> Self {
		self.skip_missing_types = skip;
		self
	}
}

/// An encoded query parameter
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Parameter {
	/// The type identifier of the parameter
	pub oid: Oid,
	/// The literal to substitute into the query
	pub sql: String,
}

#[derive(Clone, Debug, Default)]
pub struct Registry {
	options: Options,
	decoders: HashMap<Oid, Kind>,
	encoders: HashMap<Kind, Oid>,
}

impl Registry {
	/// Creates an empty registry
	pub fn new(options: Options) -> Self {
		Registry {
			options,
			decoders: HashMap::new(),
			encoders: HashMap::new(),
		}
	}

	/// Creates a registry with every geometric kind registered on the connection
	pub fn connect<L: TypeLookup>(conn: &mut L) -> Result<Self> {
		Registry::connect_with(conn, Options::default())
	}

	pub fn connect_with<L: TypeLookup>(conn: &mut L, options: Options) -> Result<Self> {
		let mut registry = Registry::new(options);
		registry.register_all(conn)?;
		Ok(registry)
	}

	/// Resolves the type identifier of a kind and records it in both directions.
	///
	/// Registering a kind again replaces whatever it was mapped to before.
	#[instrument(level = "trace", target = "pggeom::registry", skip(self, conn))]
	pub fn register<L: TypeLookup>(&mut self, conn: &mut L, kind: Kind) -> Result<Oid> {
		let sql = format!("SELECT NULL::{}", kind.db_type());
		let oid = conn.lookup_oid(&sql).map_err(|e| Error::Lookup {
			kind,
			source: Box::new(e),
		})?;
		// Keep both maps inverse to each other
		if let Some(stale) = self.encoders.insert(kind, oid).filter(|stale| *stale != oid) {
			self.decoders.remove(&stale);
		}
		if let Some(stale) = self.decoders.insert(oid, kind).filter(|stale| *stale != kind) {
			self.encoders.remove(&stale);
		}
		debug!(target: "pggeom::registry", %kind, oid, "Registered geometric type");
		Ok(oid)
	}

	/// Registers every geometric kind, in declaration order
	pub fn register_all<L: TypeLookup>(&mut self, conn: &mut L) -> Result<()> {
		for kind in Kind::ALL {
			match self.register(conn, kind) {
				Ok(_) => {}
				Err(err @ Error::Lookup { .. }) if self.options.skip_missing_types => {
					warn!(target: "pggeom::registry", %kind, "Skipping geometric type: {err}");
				}
				Err(err) => return Err(err),
			}
		}
		Ok(())
	}

	/// Decodes a column value tagged with the given type identifier.
	///
	/// A null column decodes to `None`, but only once the identifier is known.
	pub fn decode(&self, oid: Oid, text: Option<&str>) -> Result<Option<Geometry>> {
		let kind = self.kind(oid).ok_or(Error::UnknownOid(oid))?;
		let Some(text) = text else {
			return Ok(None);
		};
		let max = self.options.max_literal_length;
		if text.len() > max {
			return Err(Error::LiteralTooLarge {
				length: text.len(),
				max,
			});
		}
		trace!(target: "pggeom::registry", %kind, oid, "Decoding geometric value");
		Ok(Some(Geometry::parse(kind, text)?))
	}

	/// Encodes a value into a literal tagged with its type identifier
	pub fn encode(&self, value: &Geometry) -> Result<Parameter> {
		let kind = value.kind();
		let oid = self.oid(kind).ok_or(Error::Unregistered(kind))?;
		Ok(Parameter {
			oid,
			sql: value.to_sql(),
		})
	}

	pub fn oid(&self, kind: Kind) -> Option<Oid> {
		self.encoders.get(&kind).copied()
	}

	pub fn kind(&self, oid: Oid) -> Option<Kind> {
		self.decoders.get(&oid).copied()
	}

	pub fn is_registered(&self, kind: Kind) -> bool {
		self.encoders.contains_key(&kind)
	}

	/// The number of registered kinds
	pub fn len(&self) -> usize {
		self.encoders.len()
	}

	pub fn is_empty(&self) -> bool {
		self.encoders.is_empty()
	}

	pub fn options(&self) -> &Options {
		&self.options
	}
}
