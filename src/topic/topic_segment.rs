//! Topic expression segment types

use std::fmt;

use arcstr::Substr;

/// One slash-delimited level of a parsed topic expression
///
/// Wildcard segments only occur in expressions parsed as filters; label
/// segments may occur in both topics and filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TopicSegment {
	/// Literal level text, possibly empty
	Str(Substr),
	/// Single-level wildcard `+`
	Plus,
	/// Multi-level wildcard `#`
	Hash,
	/// Named label `{name}`, stored without braces
	Label(Substr),
}

impl TopicSegment {
	/// Returns the level content: literal text, the wildcard symbol, or
	/// the label name without braces.
	pub fn content(&self) -> &str {
		match self {
			| TopicSegment::Str(text) => text,
			| TopicSegment::Plus => "+",
			| TopicSegment::Hash => "#",
			| TopicSegment::Label(name) => name,
		}
	}

	/// Returns true if this segment is a named label.
	pub fn is_label(&self) -> bool {
		matches!(self, TopicSegment::Label(_))
	}

	/// Returns true if this segment is a `+` or `#` wildcard.
	pub fn is_wildcard(&self) -> bool {
		matches!(self, TopicSegment::Plus | TopicSegment::Hash)
	}
}

impl From<&TopicSegment> for String {
	fn from(segment: &TopicSegment) -> Self {
		segment.to_string()
	}
}

impl fmt::Display for TopicSegment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			| TopicSegment::Label(name) => write!(f, "{{{name}}}"),
			| _ => write!(f, "{}", self.content()),
		}
	}
}
