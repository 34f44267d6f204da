//! # MQTT Topic Expressions
//!
//! A library for parsing and analyzing MQTT topic strings at
//! model-authoring time.
//!
//! ## Features
//!
//! - **Topic Parsing**: Validates concrete topics and topic filters,
//!   including `+`/`#` wildcard placement rules
//! - **Named Labels**: Supports `{name}` label segments standing in for
//!   variable values, unique per expression
//! - **Overlap Analysis**: Decides whether two parsed expressions could
//!   structurally address a common set of topics
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_expr::{TopicExpression, TopicKind};
//!
//! # fn main() -> Result<(), mqtt_topic_expr::TopicSyntaxError> {
//! let filter =
//! 	TopicExpression::parse(TopicKind::Filter, "sensors/+/reading")?;
//! let topic = TopicExpression::parse(
//! 	TopicKind::Concrete,
//! 	"sensors/kitchen/reading",
//! )?;
//!
//! assert!(filter.conflicts_with(&topic));
//! assert!(!filter.has_full_wildcard());
//! # Ok(())
//! # }
//! ```
//!
//! ## Wildcards and Labels
//!
//! - `+` matches exactly one topic level and must span the whole segment
//! - `#` matches all remaining levels and is only valid as the last
//!   segment
//! - `{name}` declares a named label; labels are allowed in both topics
//!   and filters, wildcards only in filters
//!
//! Parsing is fail-fast: the first violation aborts with a
//! [`TopicSyntaxError`] describing the offending segment. Parsed
//! expressions are immutable and safely shared across threads.

#![warn(missing_docs)]

pub mod topic;

pub use topic::{
	SyntaxResult, TopicExpression, TopicKind, TopicSegment, TopicSyntaxError,
};
