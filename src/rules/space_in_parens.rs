//! `space-in-parens`: consistent spacing between parentheses and their
//! immediate neighbors.
//!
//! Idiomatic exceptions run before the generic mode rules, in a fixed
//! priority order; the first branch that claims a paren returns. Parens
//! whose partner cannot be resolved are skipped entirely.

use crate::{
	config::{Mode, ParenException, ParenSpacingOptions},
	report::{Fix, Violation},
	source::SourceFile,
	token::{Token, TokenKind, TokenStream},
};

/// Stable identifier of this rule.
pub const RULE_ID: &str = "space-in-parens";

/// Message for a missing space after `(`.
pub const MISSING_OPENING_SPACE: &str = "There must be a space after this paren.";
/// Message for a missing space before `)`.
pub const MISSING_CLOSING_SPACE: &str = "There must be a space before this paren.";
/// Message for a rejected space after `(`.
pub const REJECTED_OPENING_SPACE: &str = "There should be no space after this paren.";
/// Message for a rejected space before `)`.
pub const REJECTED_CLOSING_SPACE: &str = "There should be no space before this paren.";

const OPENERS: [&str; 3] = ["(", "[", "{"];
const CLOSERS: [&str; 3] = [")", "]", "}"];

/// Checks every parenthesis token of the file against the configured
/// spacing mode and the idiomatic exceptions.
pub fn check(source: &SourceFile, options: &ParenSpacingOptions) -> Vec<Violation> {
	let mut violations = Vec::new();

	for index in 0..source.tokens.len() {
		check_token(&source.tokens, index, options, &mut violations);
	}

	violations
}

fn check_token(
	tokens: &TokenStream,
	index: usize,
	options: &ParenSpacingOptions,
	violations: &mut Vec<Violation>,
) {
	let Some(token) = tokens.get(index) else {
		return;
	};
	let is_open = token.is_punct("(");
	let is_close = token.is_punct(")");

	if !is_open && !is_close {
		return;
	}

	let prev = index.checked_sub(1).and_then(|prev_index| tokens.get(prev_index));
	let next = tokens.get(index + 1);

	// An empty argument list carries no inner spacing to enforce.
	let is_empty = (is_open && next.is_some_and(|candidate| candidate.is_punct(")")))
		|| (is_close && prev.is_some_and(|candidate| candidate.is_punct("(")));

	if is_empty {
		return;
	}

	let (open_index, close_index) = if is_open {
		let Some(close_index) = matching_bracket(tokens, index) else {
			return;
		};

		(index, close_index)
	} else {
		let Some(open_index) = matching_bracket(tokens, index) else {
			return;
		};

		(open_index, index)
	};
	let after_open_index = open_index + 1;
	let before_close_index = close_index - 1;
	let Some(after_open) = tokens.get(after_open_index) else {
		return;
	};
	let Some(before_close) = tokens.get(before_close_index) else {
		return;
	};
	let after_open_exception = is_exception_opener(after_open, options);
	let before_close_exception = is_exception_closer(before_close, options);
	let single_contents = after_open_index == before_close_index
		|| (after_open_exception
			&& before_close_exception
			&& matching_bracket(tokens, after_open_index) == Some(before_close_index));

	// A paren directly wrapping a single string or template literal never
	// takes inner spacing, whatever the mode.
	let string_next = next.is_some_and(Token::is_string_like);
	let string_prev = prev.is_some_and(Token::is_string_like);

	if single_contents && ((is_open && string_next) || (is_close && string_prev)) {
		let (left, right) = if is_open {
			let Some(next) = next else {
				return;
			};

			(token, next)
		} else {
			let Some(prev) = prev else {
				return;
			};

			(prev, token)
		};

		if tokens.is_space_between(left, right) {
			violations.push(rejected(token, is_open, left.span.end, right.span.start));
		}

		return;
	}

	// A paren holding exactly one object or array literal and nothing
	// else never takes spacing against the nested bracket.
	if single_contents && after_open_exception && before_close_exception {
		let Some(open_paren) = tokens.get(open_index) else {
			return;
		};
		let Some(close_paren) = tokens.get(close_index) else {
			return;
		};

		if is_open && tokens.is_space_between(open_paren, after_open) {
			violations.push(rejected(token, true, open_paren.span.end, after_open.span.start));
		}
		if is_close && tokens.is_space_between(before_close, close_paren) {
			violations.push(rejected(token, false, before_close.span.end, close_paren.span.start));
		}

		return;
	}

	// A line-split nested block gets no enforced padding on the side that
	// touches the paren.
	if is_open && after_open_exception {
		if let Some(closer_index) = matching_bracket(tokens, after_open_index) {
			let Some(closer) = tokens.get(closer_index) else {
				return;
			};

			if after_open.end.line != closer.start.line {
				if tokens.is_space_between(token, after_open) {
					violations.push(rejected(token, true, token.span.end, after_open.span.start));
				}

				return;
			}
		}
	}
	if is_close && before_close_exception {
		if let Some(opener_index) = matching_bracket(tokens, before_close_index) {
			let Some(opener) = tokens.get(opener_index) else {
				return;
			};

			if opener.end.line != before_close.start.line {
				if tokens.is_space_between(before_close, token) {
					violations.push(rejected(token, false, before_close.span.end, token.span.start));
				}

				return;
			}
		}
	}

	match options.mode {
		Mode::Always => {
			if is_open {
				let Some(next) = next else {
					return;
				};

				if !next.is_punct(")") && !tokens.is_space_between(token, next) {
					violations.push(missing(token, true, token.span.end));
				}
			} else {
				let Some(prev) = prev else {
					return;
				};

				if !prev.is_punct("(") && !tokens.is_space_between(prev, token) {
					violations.push(missing(token, false, token.span.start));
				}
			}
		},
		Mode::Never => {
			if is_open {
				let Some(next) = next else {
					return;
				};

				if !next.is_punct(")") && tokens.is_space_between(token, next) {
					violations.push(rejected(token, true, token.span.end, next.span.start));
				}
			} else {
				let Some(prev) = prev else {
					return;
				};

				if !prev.is_punct("(") && tokens.is_space_between(prev, token) {
					violations.push(rejected(token, false, prev.span.end, token.span.start));
				}
			}
		},
	}
}

/// Resolves the partner of the bracket at `index` by depth counting over
/// the bracket's own kind, forward for an opener and backward for a
/// closer. Returns `None` for non-bracket tokens and unmatched brackets.
fn matching_bracket(tokens: &TokenStream, index: usize) -> Option<usize> {
	let token = tokens.get(index)?;

	if token.kind != TokenKind::Punctuator {
		return None;
	}

	if let Some(kind) = OPENERS.iter().position(|text| token.text == *text) {
		let mut depth = 1_usize;

		for candidate_index in (index + 1)..tokens.len() {
			let candidate = tokens.get(candidate_index)?;

			if candidate.is_punct(OPENERS[kind]) {
				depth += 1;
			} else if candidate.is_punct(CLOSERS[kind]) {
				depth -= 1;

				if depth == 0 {
					return Some(candidate_index);
				}
			}
		}

		return None;
	}
	if let Some(kind) = CLOSERS.iter().position(|text| token.text == *text) {
		let mut depth = 1_usize;

		for candidate_index in (0..index).rev() {
			let candidate = tokens.get(candidate_index)?;

			if candidate.is_punct(CLOSERS[kind]) {
				depth += 1;
			} else if candidate.is_punct(OPENERS[kind]) {
				depth -= 1;

				if depth == 0 {
					return Some(candidate_index);
				}
			}
		}

		return None;
	}

	None
}

fn is_exception_opener(token: &Token, options: &ParenSpacingOptions) -> bool {
	(options.exceptions.contains(&ParenException::Braces) && token.is_punct("{"))
		|| (options.exceptions.contains(&ParenException::Brackets) && token.is_punct("["))
		|| (options.exceptions.contains(&ParenException::Parens) && token.is_punct("("))
}

fn is_exception_closer(token: &Token, options: &ParenSpacingOptions) -> bool {
	(options.exceptions.contains(&ParenException::Braces) && token.is_punct("}"))
		|| (options.exceptions.contains(&ParenException::Brackets) && token.is_punct("]"))
		|| (options.exceptions.contains(&ParenException::Parens) && token.is_punct(")"))
}

fn rejected(token: &Token, opening: bool, gap_start: usize, gap_end: usize) -> Violation {
	Violation {
		rule: RULE_ID,
		message: if opening { REJECTED_OPENING_SPACE } else { REJECTED_CLOSING_SPACE }.to_owned(),
		span: token.span,
		fix: Some(Fix::remove(gap_start, gap_end)),
	}
}

fn missing(token: &Token, opening: bool, at: usize) -> Violation {
	Violation {
		rule: RULE_ID,
		message: if opening { MISSING_OPENING_SPACE } else { MISSING_CLOSING_SPACE }.to_owned(),
		span: token.span,
		fix: Some(Fix::insert(at, " ")),
	}
}
