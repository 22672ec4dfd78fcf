//! `computed-property-spacing`: consistent spacing inside the square
//! brackets of computed member and property accesses.
//!
//! A bracketed single string or template literal rejects inner spacing
//! whatever the mode.

use crate::{
	config::{ComputedPropertyOptions, Mode},
	report::{Fix, Violation},
	source::SourceFile,
	syntax::ComputedAccess,
	token::Token,
};

/// Stable identifier of this rule.
pub const RULE_ID: &str = "computed-property-spacing";

/// Checks the bracket spacing of every computed access the host supplied.
pub fn check(
	source: &SourceFile,
	accesses: &[ComputedAccess],
	options: &ComputedPropertyOptions,
) -> Vec<Violation> {
	let tokens = &source.tokens;
	let mut violations = Vec::new();

	for access in accesses {
		if access.close_bracket <= access.open_bracket + 1 {
			continue;
		}

		let Some(before) = tokens.get(access.open_bracket) else {
			continue;
		};
		let Some(after) = tokens.get(access.close_bracket) else {
			continue;
		};
		let Some(first) = tokens.get(access.open_bracket + 1) else {
			continue;
		};
		let Some(last) = tokens.get(access.close_bracket - 1) else {
			continue;
		};
		let is_string = access.open_bracket + 1 == access.close_bracket - 1 && first.is_string_like();

		if is_string {
			if tokens.is_space_between(before, first) {
				violations.push(no_space_after(before, first));
			}
			if tokens.is_space_between(last, after) {
				violations.push(no_space_before(after, last));
			}

			continue;
		}

		match options.mode {
			Mode::Always => {
				if before.end.line == first.start.line && !tokens.is_space_between(before, first) {
					violations.push(space_required_after(before));
				}
				if last.end.line == after.start.line && !tokens.is_space_between(last, after) {
					violations.push(space_required_before(after));
				}
			},
			Mode::Never => {
				if before.end.line == first.start.line && tokens.is_space_between(before, first) {
					violations.push(no_space_after(before, first));
				}
				if last.end.line == after.start.line && tokens.is_space_between(last, after) {
					violations.push(no_space_before(after, last));
				}
			},
		}
	}

	violations
}

fn no_space_after(token: &Token, token_after: &Token) -> Violation {
	Violation {
		rule: RULE_ID,
		message: format!("There should be no space after '{}'", token.text),
		span: token.span,
		fix: Some(Fix::remove(token.span.end, token_after.span.start)),
	}
}

fn no_space_before(token: &Token, token_before: &Token) -> Violation {
	Violation {
		rule: RULE_ID,
		message: format!("There should be no space before '{}'", token.text),
		span: token.span,
		fix: Some(Fix::remove(token_before.span.end, token.span.start)),
	}
}

fn space_required_after(token: &Token) -> Violation {
	Violation {
		rule: RULE_ID,
		message: format!("A space is required after '{}'", token.text),
		span: token.span,
		fix: Some(Fix::insert(token.span.end, " ")),
	}
}

fn space_required_before(token: &Token) -> Violation {
	Violation {
		rule: RULE_ID,
		message: format!("A space is required before '{}'", token.text),
		span: token.span,
		fix: Some(Fix::insert(token.span.start, " ")),
	}
}
