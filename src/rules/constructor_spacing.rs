//! `disallow-space-in-constructors`: no stray whitespace inside the
//! parens of a zero-argument constructor call.

use crate::{
	report::{Fix, Violation},
	source::SourceFile,
	syntax::NewExpression,
};

/// Stable identifier of this rule.
pub const RULE_ID: &str = "disallow-space-in-constructors";

/// Message for a spaced empty constructor-call paren pair.
pub const UNNECESSARY_SPACE: &str =
	"Unnecessary space in parens when invoking a constructor with no arguments.";

/// Checks every `new` expression the host supplied.
pub fn check(source: &SourceFile, expressions: &[NewExpression]) -> Vec<Violation> {
	let tokens = &source.tokens;
	let mut violations = Vec::new();

	for expression in expressions {
		// With arguments there have to be parens; nothing to check.
		if expression.argument_count != 0 {
			continue;
		}

		let Some(last_index) = tokens.last_index_in(expression.span) else {
			continue;
		};
		let Some(before_index) = last_index.checked_sub(1) else {
			continue;
		};
		let Some(last) = tokens.get(last_index) else {
			continue;
		};
		let Some(before_last) = tokens.get(before_index) else {
			continue;
		};

		// The pair counts only when the expression ends with its own
		// parens; `new new foo()` does not.
		let has_parens = last.is_punct(")")
			&& before_last.is_punct("(")
			&& expression.callee_end < expression.span.end;

		if has_parens && tokens.is_space_between(before_last, last) {
			violations.push(Violation {
				rule: RULE_ID,
				message: UNNECESSARY_SPACE.to_owned(),
				span: expression.span,
				fix: Some(Fix::remove(before_last.span.end, last.span.start)),
			});
		}
	}

	violations
}
