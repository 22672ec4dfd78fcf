use serde_json::json;
use spacelint::{
	config::AlignmentOptions,
	rules::aligned_assignments::{self, UNALIGNED_GROUP},
	testkit,
};

fn options(config: &[serde_json::Value]) -> AlignmentOptions {
	AlignmentOptions::from_config(config).expect("valid config")
}

fn run(text: &str, config: &[serde_json::Value]) -> Vec<spacelint::Violation> {
	let source = testkit::source_file(text);
	let statements = testkit::assignment_statements(&source);

	aligned_assignments::check(&source, &statements, &options(config))
}

#[test]
fn aligned_requires_pass() {
	let text = "var t        = require('fs');\nvar longname = require('fs');";

	assert!(run(text, &[json!("always")]).is_empty());
}

#[test]
fn misaligned_requires_report_one_group_violation_with_the_exact_rewrite() {
	let text = "var t = require('fs');\nvar longname = require('fs');";
	let violations = run(text, &[json!("always")]);

	assert_eq!(violations.len(), 1);
	assert_eq!(violations[0].message, UNALIGNED_GROUP);
	assert_eq!(
		testkit::apply_fixes(text, &violations),
		"var t        = require('fs');\nvar longname = require('fs');"
	);
}

#[test]
fn rule_is_off_under_never_and_by_default() {
	let text = "var t = require('fs');\nvar longname = require('fs');";

	assert!(run(text, &[json!("never")]).is_empty());
	assert!(run(text, &[]).is_empty());
}

#[test]
fn blank_line_starts_a_fresh_group() {
	let text = "var a = require('x');\n\nvar bb = require('y');";

	assert!(run(text, &[json!("always")]).is_empty());
}

#[test]
fn parent_change_starts_a_fresh_group() {
	let text = "var aa = require('x');\nvar b = require('y');";
	let source = testkit::source_file(text);
	let mut statements = testkit::assignment_statements(&source);

	assert_eq!(statements.len(), 2);

	// Same parent: one misaligned group.
	let found =
		aligned_assignments::check(&source, &statements, &options(&[json!("always")]));

	assert_eq!(found.len(), 1);

	// Different parents: two singleton groups, nothing to report.
	statements[1].parent = statements[0].parent + 1;

	let found =
		aligned_assignments::check(&source, &statements, &options(&[json!("always")]));

	assert!(found.is_empty());
}

#[test]
fn loop_header_declaration_closes_its_group() {
	let text = "for (var i = next();;) {}\nvar a = fetch('a');\nvar bb = fetch('b');";
	let violations = run(text, &[json!("always")]);

	assert_eq!(violations.len(), 1);

	// Only the two statements after the header are rewritten.
	let fix = violations[0].fix.as_ref().expect("group fix");

	assert_eq!(fix.edits.len(), 2);
	assert_eq!(
		testkit::apply_fixes(text, &violations),
		"for (var i = next();;) {}\nvar a  = fetch('a');\nvar bb = fetch('b');"
	);
}

#[test]
fn multi_declarator_statements_never_group() {
	let text = "var t = require('fs'), a = require('fs');\nvar longname = require('fs');";

	assert!(run(text, &[json!("always")]).is_empty());
}

#[test]
fn multi_line_initializers_ride_along_verbatim() {
	let text = "var wide_name = require('fs');\nvar x =\n\tload('x');\nvar y = load('y');";
	let violations = run(text, &[json!("always")]);

	assert_eq!(violations.len(), 1);
	assert_eq!(
		testkit::apply_fixes(text, &violations),
		"var wide_name = require('fs');\nvar x =\n\tload('x');\nvar y         = load('y');"
	);
}

#[test]
fn destructured_targets_share_the_group_column() {
	let text = "var t = require('fs');\nvar longname = require('fs');\nvar med   =  require('fs');\nconst { foo: bar }  =  require('fs');";
	let violations = run(text, &[json!("always")]);

	assert_eq!(violations.len(), 1);

	let fixed = testkit::apply_fixes(text, &violations);

	for line in fixed.lines() {
		assert_eq!(line.find('=').expect("operator"), 20, "line {line:?}");
	}
}

#[test]
fn fix_is_idempotent() {
	let text = "var t = require('fs');\nvar longname = require('fs');";
	let violations = run(text, &[json!("always")]);
	let fixed = testkit::apply_fixes(text, &violations);

	assert!(run(&fixed, &[json!("always")]).is_empty());
}
