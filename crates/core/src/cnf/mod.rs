use std::sync::LazyLock;

/// The largest literal the registry will hand to the decoder (defaults to 16 MiB)
pub static MAX_LITERAL_LENGTH: LazyLock<usize> =
	lazy_env_parse!("PGGEOM_MAX_LITERAL_LENGTH", usize, 16 << 20);

/// Whether connecting skips geometric types the database fails to resolve (defaults to false)
pub static SKIP_MISSING_TYPES: LazyLock<bool> =
	lazy_env_parse!("PGGEOM_SKIP_MISSING_TYPES", bool, false);
