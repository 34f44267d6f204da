//! Integration tests driving the public API the way a model validator
//! would: parse declared topics and filters, then cross-check every
//! filter pair for overlap.

use mqtt_topic_expr::{TopicExpression, TopicKind, TopicSyntaxError};

fn parse_filters(raws: &[&str]) -> Vec<TopicExpression> {
	raws.iter()
		.map(|raw| {
			TopicExpression::parse(TopicKind::Filter, *raw)
				.expect("declared filter should be valid")
		})
		.collect()
}

#[test]
fn cross_checks_declared_subscriptions() {
	let filters = parse_filters(&[
		"devices/{device_id}/events",
		"devices/status/events",
		"fleet/+/telemetry",
		"fleet/trucks/telemetry",
		"audit/#",
	]);

	let mut conflicting_pairs = Vec::new();
	for (i, a) in filters.iter().enumerate() {
		for b in &filters[i + 1 ..] {
			if a.conflicts_with(b) {
				conflicting_pairs
					.push((a.raw().to_string(), b.raw().to_string()));
			}
		}
	}

	// The label-vs-literal pair is deliberately not reported; only the
	// `+` overlap survives the scan.
	assert_eq!(conflicting_pairs, vec![(
		"fleet/+/telemetry".to_string(),
		"fleet/trucks/telemetry".to_string(),
	)]);
}

#[test]
fn publish_addresses_validate_against_concrete_grammar() {
	let address = TopicExpression::parse(
		TopicKind::Concrete,
		"devices/{device_id}/commands",
	)
	.expect("labels are allowed in concrete topics");

	assert!(address.has_label("device_id"));
	assert_eq!(address.labels().count(), 1);

	let err = TopicExpression::parse(
		TopicKind::Concrete,
		"devices/+/commands",
	)
	.expect_err("wildcards are not allowed in concrete topics");

	assert!(matches!(err, TopicSyntaxError::WildcardInTopic { .. }));
	assert_eq!(
		err.to_string(),
		"Wildcard levels are not allowed in MQTT topics. Found `+` in \
		 `devices/+/commands`"
	);
}

#[test]
fn filters_with_full_wildcards_overlap_concrete_addresses() {
	let sink = TopicExpression::parse(TopicKind::Filter, "audit/#").unwrap();
	let address =
		TopicExpression::parse(TopicKind::Concrete, "audit/login/failed")
			.unwrap();

	assert!(sink.conflicts_with(&address));
	assert!(address.conflicts_with(&sink));
}

#[test]
fn parsed_expressions_deduplicate_by_raw_text() {
	use std::collections::HashSet;

	let mut seen = HashSet::new();
	for raw in ["a/{x}", "a/{x}", "a/{y}"] {
		seen.insert(TopicExpression::parse(TopicKind::Filter, raw).unwrap());
	}

	// Textually identical expressions collapse; structurally identical
	// ones with different label names do not.
	assert_eq!(seen.len(), 2);
}
