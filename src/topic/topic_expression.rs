//! Topic expression parsing and overlap analysis

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::slice::Iter;

use arcstr::{ArcStr, Substr};

use super::error::{SyntaxResult, TopicSyntaxError};
use super::topic_segment::TopicSegment;

/// Grammar variant for a topic expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicKind {
	/// Literal publish address; wildcards forbidden
	Concrete,
	/// Subscription pattern; wildcards permitted
	Filter,
}

/// Parsed MQTT topic or topic filter
///
/// Created once by [`TopicExpression::parse`] and immutable afterwards.
/// Equality and hashing use the original text alone: two expressions are
/// equal iff their input strings are character-identical, regardless of
/// kind or structure.
#[derive(Debug, Clone)]
pub struct TopicExpression {
	kind: TopicKind,
	raw: ArcStr,
	segments: Vec<TopicSegment>,
}

/// Label names are restricted to `[A-Za-z0-9_]+`.
fn is_valid_label_name(name: &str) -> bool {
	!name.is_empty()
		&& name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl TopicExpression {
	/// Parses a topic or topic filter string.
	///
	/// Splits on `/` and validates each level left to right, failing on
	/// the first violation. Wildcard levels are rejected outright for
	/// [`TopicKind::Concrete`]; for filters, `+` and `#` must span their
	/// whole segment and `#` must be last. `{name}` levels declare
	/// labels, unique per expression.
	pub fn parse(
		kind: TopicKind,
		raw: impl Into<ArcStr>,
	) -> SyntaxResult<Self> {
		let raw = raw.into();
		if raw.is_empty() {
			return Err(TopicSyntaxError::EmptyTopic);
		}

		let mut segments = Vec::new();
		let mut seen_labels: HashSet<Substr> = HashSet::new();
		let mut has_full_wildcard = false;

		for level in raw.split('/') {
			if has_full_wildcard {
				return Err(TopicSyntaxError::segment_after_full_wildcard(
					level,
					raw.as_str(),
				));
			}

			if level.contains(['+', '#']) {
				if kind == TopicKind::Concrete {
					return Err(TopicSyntaxError::wildcard_in_topic(
						level,
						raw.as_str(),
					));
				}
				if level.len() > 1 {
					return Err(TopicSyntaxError::partial_wildcard(
						level,
						raw.as_str(),
					));
				}
				if level == "#" {
					has_full_wildcard = true;
					segments.push(TopicSegment::Hash);
				} else {
					segments.push(TopicSegment::Plus);
				}
				continue;
			}

			if level.starts_with('{') && level.ends_with('}') {
				let name =
					raw.substr_from(level).substr(1 .. level.len() - 1);
				if !is_valid_label_name(&name) {
					return Err(TopicSyntaxError::invalid_label_name(
						name.as_str(),
						raw.as_str(),
					));
				}
				if !seen_labels.insert(name.clone()) {
					return Err(TopicSyntaxError::duplicate_label(
						name.as_str(),
						raw.as_str(),
					));
				}
				segments.push(TopicSegment::Label(name));
			} else if level.contains(['{', '}']) {
				return Err(TopicSyntaxError::unmatched_brace(
					level,
					raw.as_str(),
				));
			} else {
				segments.push(TopicSegment::Str(raw.substr_from(level)));
			}
		}

		tracing::trace!(
			topic = %raw,
			kind = ?kind,
			levels = segments.len(),
			"parsed topic expression"
		);

		Ok(Self {
			kind,
			raw,
			segments,
		})
	}

	/// Returns the grammar variant this expression was parsed as.
	pub fn kind(&self) -> TopicKind {
		self.kind
	}

	/// Returns the original input text, verbatim.
	pub fn raw(&self) -> ArcStr {
		self.raw.clone()
	}

	/// Returns the expression segments in their original order.
	pub fn segments(&self) -> &[TopicSegment] {
		&self.segments
	}

	/// Returns iterator over expression segments.
	pub fn iter(&self) -> Iter<TopicSegment> {
		self.segments.iter()
	}

	/// Returns number of segments in the expression.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true if the expression has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns the label segments in their original order.
	pub fn labels(&self) -> impl Iterator<Item = &TopicSegment> {
		self.segments.iter().filter(|s| s.is_label())
	}

	/// Returns true if the expression declares a label with this name.
	pub fn has_label(&self, name: &str) -> bool {
		self.segments.iter().any(
			|s| matches!(s, TopicSegment::Label(label) if label.as_str() == name),
		)
	}

	/// Returns true if the expression ends with the `#` wildcard.
	pub fn has_full_wildcard(&self) -> bool {
		self.segments
			.last()
			.is_some_and(|s| matches!(s, TopicSegment::Hash))
	}

	/// Determines if this expression overlaps with another one.
	///
	/// Compares segments pairwise by position over the shared depth.
	/// `+` matches any level, `#` swallows all remaining levels on both
	/// sides, and a differing literal level disambiguates the two
	/// expressions entirely. A label against a literal is treated as
	/// non-overlapping, even though a substituted value could coincide
	/// with the literal. When no compared position decides, the
	/// expressions conflict iff they have the same depth.
	pub fn conflicts_with(&self, other: &TopicExpression) -> bool {
		let shared = self.segments.len().min(other.segments.len());

		for position in 0 .. shared {
			let ours = &self.segments[position];
			let theirs = &other.segments[position];

			if matches!(ours, TopicSegment::Plus)
				|| matches!(theirs, TopicSegment::Plus)
			{
				continue;
			}

			if matches!(ours, TopicSegment::Hash)
				|| matches!(theirs, TopicSegment::Hash)
			{
				return true;
			}

			match (ours, theirs) {
				| (TopicSegment::Str(a), TopicSegment::Str(b)) if a != b => {
					return false;
				}
				| (TopicSegment::Label(_), TopicSegment::Str(_))
				| (TopicSegment::Str(_), TopicSegment::Label(_)) => {
					return false;
				}
				| _ => {}
			}
		}

		self.segments.len() == other.segments.len()
	}
}

// Equality is raw-text identity. Structurally identical expressions with
// different label names stay distinct, and kind does not participate.
impl PartialEq for TopicExpression {
	fn eq(&self, other: &Self) -> bool {
		self.raw == other.raw
	}
}

impl Eq for TopicExpression {}

impl Hash for TopicExpression {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.raw.hash(state);
	}
}

impl fmt::Display for TopicExpression {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.raw)
	}
}
