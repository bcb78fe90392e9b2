use std::fmt::{self, Display, Formatter};

/// A PostgreSQL geometric operator
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GeoOperator {
	/// `&&`
	Overlaps,
	/// `<<`
	StrictlyLeft,
	/// `>>`
	StrictlyRight,
	/// `&<|`
	NotAbove,
	/// `|&>`
	NotBelow,
	/// `&<`
	NotRight,
	/// `&>`
	NotLeft,
	/// `?#`
	Intersects,
	/// `@>`
	Contains,
	/// `<@`
	ContainedIn,
	/// `?-`
	Horizontal,
	/// `?|`
	Vertical,
	/// `?-|`
	Perpendicular,
	/// `?||`
	Parallel,
	/// `~=`
	Same,
	/// `<->`
	Distance,
}

impl Display for GeoOperator {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(match self {
			Self::Overlaps => "&&",
			Self::StrictlyLeft => "<<",
			Self::StrictlyRight => ">>",
			Self::NotAbove => "&<|",
			Self::NotBelow => "|&>",
			Self::NotRight => "&<",
			Self::NotLeft => "&>",
			Self::Intersects => "?#",
			Self::Contains => "@>",
			Self::ContainedIn => "<@",
			Self::Horizontal => "?-",
			Self::Vertical => "?|",
			Self::Perpendicular => "?-|",
			Self::Parallel => "?||",
			Self::Same => "~=",
			Self::Distance => "<->",
		})
	}
}
