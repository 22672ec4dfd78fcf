use serde_json::json;
use spacelint::{
	config::ParenSpacingOptions,
	rules::space_in_parens::{self, REJECTED_CLOSING_SPACE, REJECTED_OPENING_SPACE},
	testkit,
};

fn options(config: &[serde_json::Value]) -> ParenSpacingOptions {
	ParenSpacingOptions::from_config(config).expect("valid config")
}

fn run(text: &str, config: &[serde_json::Value]) -> Vec<spacelint::Violation> {
	space_in_parens::check(&testkit::source_file(text), &options(config))
}

#[test]
fn single_string_call_is_clean_under_always() {
	assert!(run("foo('bar')", &[json!("always")]).is_empty());
}

#[test]
fn spaced_single_string_call_is_fixed_to_the_tight_form() {
	let text = "foo( 'bar' )";
	let violations = run(text, &[json!("always")]);

	assert_eq!(violations.len(), 2);
	assert_eq!(violations[0].message, REJECTED_OPENING_SPACE);
	assert_eq!(violations[1].message, REJECTED_CLOSING_SPACE);
	assert_eq!(testkit::apply_fixes(text, &violations), "foo('bar')");
}

#[test]
fn always_mode_fix_inserts_the_missing_spaces() {
	let text = "sum(a, b)";
	let violations = run(text, &[json!("always")]);

	assert_eq!(violations.len(), 2);
	assert_eq!(testkit::apply_fixes(text, &violations), "sum( a, b )");
}

#[test]
fn never_mode_fix_removes_the_inner_spaces() {
	let text = "sum( a, b )";
	let violations = run(text, &[json!("never")]);

	assert_eq!(violations.len(), 2);
	assert_eq!(testkit::apply_fixes(text, &violations), "sum(a, b)");
}

#[test]
fn object_literal_argument_sits_tight_against_the_parens() {
	assert!(run("send({ id: 1 })", &[json!("always")]).is_empty());

	let text = "send( { id: 1 } )";
	let violations = run(text, &[json!("always")]);

	assert_eq!(violations.len(), 2);
	assert_eq!(testkit::apply_fixes(text, &violations), "send({ id: 1 })");
}

#[test]
fn line_split_object_argument_needs_no_inner_padding() {
	let text = "send({\n\tid: 1\n}, done )";

	assert!(run(text, &[json!("always")]).is_empty());
}

#[test]
fn nested_depth_three_brackets_resolve_their_own_partners() {
	assert!(run("f( g( h( a ) ) )", &[json!("always")]).is_empty());
	assert!(run("f(g(h(a)))", &[json!("never")]).is_empty());
}

#[test]
fn member_index_after_the_bracket_pair_is_not_single_contents() {
	let text = "pick( [a][0] )";
	let violations = run(text, &[json!("never")]);

	assert_eq!(violations.len(), 2);
	assert_eq!(testkit::apply_fixes(text, &violations), "pick([a][0])");
}

#[test]
fn unmatched_parens_are_skipped_without_reports() {
	assert!(run("broken( a", &[json!("always")]).is_empty());
	assert!(run("broken a )", &[json!("never")]).is_empty());
}

#[test]
fn exceptions_option_narrows_the_exception_classes() {
	// With only `[]` as an exception class, a brace argument is plain
	// contents and follows the generic always rule.
	let config = [json!("always"), json!({ "exceptions": ["[]"] })];
	let violations = run("send({ id: 1 })", &config);

	assert_eq!(violations.len(), 2);
}

#[test]
fn fixes_are_idempotent() {
	for (text, config) in [
		("foo( 'bar' )", [json!("always")]),
		("sum(a, b)", [json!("always")]),
		("sum( a, b )", [json!("never")]),
	] {
		let violations = run(text, &config);
		let fixed = testkit::apply_fixes(text, &violations);

		assert!(run(&fixed, &config).is_empty(), "fix of {text:?} should settle");
	}
}
