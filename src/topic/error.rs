//! Syntax error type for topic expression parsing

use thiserror::Error;

/// Error raised when a topic or topic filter string fails validation
///
/// Parsing is fail-fast: the first rule violation aborts with the
/// matching variant, carrying the offending segment and the full input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicSyntaxError {
	/// Empty input string
	#[error("Topics and topic filters may not be empty")]
	EmptyTopic,

	/// Wildcard level used inside a concrete topic
	#[error(
		"Wildcard levels are not allowed in MQTT topics. Found \
		 `{segment}` in `{topic}`"
	)]
	WildcardInTopic {
		/// The offending segment
		segment: String,
		/// The full topic string
		topic: String,
	},

	/// Wildcard character occupying only part of a segment
	#[error(
		"A wildcard must be the entire topic segment. Found `{segment}` \
		 in `{topic}`"
	)]
	PartialWildcard {
		/// The offending segment
		segment: String,
		/// The full topic string
		topic: String,
	},

	/// Segment following a multi-level wildcard
	#[error(
		"A full wildcard must be the last segment in a topic filter. \
		 Found `{segment}` in `{topic}`"
	)]
	SegmentAfterFullWildcard {
		/// The offending segment
		segment: String,
		/// The full topic string
		topic: String,
	},

	/// Label name violating the `[A-Za-z0-9_]+` rule
	#[error("Invalid topic label name `{label}` found in `{topic}`")]
	InvalidLabelName {
		/// The offending label name, without braces
		label: String,
		/// The full topic string
		topic: String,
	},

	/// Label name already declared earlier in the same expression
	#[error("Duplicate topic label `{label}` found in `{topic}`")]
	DuplicateLabel {
		/// The duplicated label name, without braces
		label: String,
		/// The full topic string
		topic: String,
	},

	/// Stray `{` or `}` not forming a whole-segment label
	#[error(
		"Topic labels must span an entire level. Found `{segment}` in \
		 `{topic}`"
	)]
	UnmatchedBrace {
		/// The offending segment
		segment: String,
		/// The full topic string
		topic: String,
	},
}

impl TopicSyntaxError {
	/// Creates a new WildcardInTopic error
	pub fn wildcard_in_topic(
		segment: impl Into<String>,
		topic: impl Into<String>,
	) -> Self {
		Self::WildcardInTopic {
			segment: segment.into(),
			topic: topic.into(),
		}
	}

	/// Creates a new PartialWildcard error
	pub fn partial_wildcard(
		segment: impl Into<String>,
		topic: impl Into<String>,
	) -> Self {
		Self::PartialWildcard {
			segment: segment.into(),
			topic: topic.into(),
		}
	}

	/// Creates a new SegmentAfterFullWildcard error
	pub fn segment_after_full_wildcard(
		segment: impl Into<String>,
		topic: impl Into<String>,
	) -> Self {
		Self::SegmentAfterFullWildcard {
			segment: segment.into(),
			topic: topic.into(),
		}
	}

	/// Creates a new InvalidLabelName error
	pub fn invalid_label_name(
		label: impl Into<String>,
		topic: impl Into<String>,
	) -> Self {
		Self::InvalidLabelName {
			label: label.into(),
			topic: topic.into(),
		}
	}

	/// Creates a new DuplicateLabel error
	pub fn duplicate_label(
		label: impl Into<String>,
		topic: impl Into<String>,
	) -> Self {
		Self::DuplicateLabel {
			label: label.into(),
			topic: topic.into(),
		}
	}

	/// Creates a new UnmatchedBrace error
	pub fn unmatched_brace(
		segment: impl Into<String>,
		topic: impl Into<String>,
	) -> Self {
		Self::UnmatchedBrace {
			segment: segment.into(),
			topic: topic.into(),
		}
	}
}

/// Convenient Result type for parse operations
pub type SyntaxResult<T> = Result<T, TopicSyntaxError>;
