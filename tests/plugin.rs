use serde_json::json;
use spacelint::{
	config::{AlignmentOptions, ComputedPropertyOptions, ParenSpacingOptions},
	rules::{self, FixClass},
	testkit, SourceFile, Violation,
};

const FIXTURE: &str = "var path    = require('path');\n\
var fs = require('fs');\n\
\n\
new Klass( );\n\
cache[ 'k' ] = fetch('k');\n";

fn run_all(source: &SourceFile) -> Vec<Violation> {
	let paren =
		ParenSpacingOptions::from_config(&[json!("never")]).expect("paren config");
	let computed =
		ComputedPropertyOptions::from_config(&[json!("never")]).expect("computed config");
	let aligned = AlignmentOptions::from_config(&[json!("always")]).expect("aligned config");
	let accesses = testkit::computed_accesses(&source.tokens);
	let expressions = testkit::new_expressions(&source.tokens);
	let statements = testkit::assignment_statements(source);
	let mut violations = Vec::new();

	violations.extend(rules::space_in_parens::check(source, &paren));
	violations.extend(rules::computed_property_spacing::check(source, &accesses, &computed));
	violations.extend(rules::aligned_assignments::check(source, &statements, &aligned));
	violations.extend(rules::constructor_spacing::check(source, &expressions));
	violations.extend(rules::invisible_characters::check(source));

	violations
}

#[test]
fn registry_lists_every_rule_with_its_fix_class() {
	assert_eq!(
		rules::rule_ids(),
		[
			"space-in-parens",
			"computed-property-spacing",
			"aligned-requires",
			"disallow-space-in-constructors",
			"no-invisible-characters",
		]
	);
	assert_eq!(
		rules::RULES.iter().filter(|rule| rule.fixable == FixClass::Code).count(),
		2
	);
}

#[test]
fn a_file_runs_through_every_rule_independently() {
	let source = testkit::source_file(FIXTURE);
	let violations = run_all(&source);
	let count_for = |rule: &str| violations.iter().filter(|violation| violation.rule == rule).count();

	assert_eq!(count_for("space-in-parens"), 0);
	assert_eq!(count_for("computed-property-spacing"), 2);
	assert_eq!(count_for("aligned-requires"), 1);
	assert_eq!(count_for("disallow-space-in-constructors"), 1);
	assert_eq!(count_for("no-invisible-characters"), 0);
}

#[test]
fn formatted_violations_carry_position_rule_and_fixability() {
	let source = testkit::source_file("new Klass( );\n");
	let violations = run_all(&source);

	assert_eq!(violations.len(), 1);
	assert_eq!(
		violations[0].format(&source),
		"1:0: [disallow-space-in-constructors] Unnecessary space in parens when invoking a constructor with no arguments. (fixable)"
	);
}

#[test]
fn every_rule_fix_settles_after_one_application() {
	let source = testkit::source_file(FIXTURE);
	let violations = run_all(&source);

	assert!(!violations.is_empty());

	let fixed = testkit::apply_fixes(FIXTURE, &violations);
	let fixed_source = testkit::source_file(&fixed);

	assert!(run_all(&fixed_source).is_empty(), "fixed text still reports: {fixed:?}");
}
