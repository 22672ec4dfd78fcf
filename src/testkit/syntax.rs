//! Fixture syntax extraction: derives the host contract records from a
//! token stream with small heuristics. Good enough for the shapes the
//! tests use; not a parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
	source::{SourceFile, Span},
	syntax::{AssignmentKind, AssignmentStatement, ComputedAccess, NewExpression},
	token::{TokenKind, TokenStream},
};

static CALL_INIT_RE: Lazy<Regex> = Lazy::new(|| {
	Regex::new(r"^(?:new\s+)?[A-Za-z_$][A-Za-z0-9_$]*(?:\s*\.\s*[A-Za-z_$][A-Za-z0-9_$]*)*\s*\(")
		.expect("Expected operation to succeed.")
});

const KEYWORDS: [&str; 14] = [
	"var", "let", "const", "function", "return", "new", "typeof", "delete", "in", "of", "if",
	"for", "while", "do",
];
const STRUCTURE_KEYWORDS: [&str; 7] = ["function", "if", "for", "while", "else", "do", "try"];
const ASSIGNMENT_OPERATORS: [&str; 13] =
	[">>>=", "<<=", ">>=", "**=", "+=", "-=", "*=", "/=", "%=", "&=", "^=", "|=", "="];

/// Computed member accesses: every `[` whose preceding token can end a
/// member base, paired with its matching `]`.
pub fn computed_accesses(tokens: &TokenStream) -> Vec<ComputedAccess> {
	let mut accesses = Vec::new();

	for index in 0..tokens.len() {
		let Some(token) = tokens.get(index) else {
			continue;
		};

		if !token.is_punct("[") {
			continue;
		}

		let Some(prev) = index.checked_sub(1).and_then(|prev_index| tokens.get(prev_index)) else {
			continue;
		};
		let is_member_base = prev.is_punct(")")
			|| prev.is_punct("]")
			|| (prev.kind == TokenKind::Word && !KEYWORDS.contains(&prev.text.as_str()));

		if !is_member_base {
			continue;
		}

		let Some(close) = matching_close(tokens, index, "[", "]") else {
			continue;
		};

		accesses.push(ComputedAccess { open_bracket: index, close_bracket: close });
	}

	accesses
}

/// `new` expressions: `new` plus a dotted identifier callee plus an
/// optional argument list.
pub fn new_expressions(tokens: &TokenStream) -> Vec<NewExpression> {
	let mut expressions = Vec::new();
	let mut index = 0;

	while index < tokens.len() {
		let Some(token) = tokens.get(index) else {
			break;
		};

		if !(token.kind == TokenKind::Word && token.text == "new") {
			index += 1;

			continue;
		}

		let Some(head) = tokens.get(index + 1) else {
			break;
		};

		if head.kind != TokenKind::Word {
			index += 1;

			continue;
		}

		let new_start = token.span.start;
		let mut callee_end = head.span.end;
		let mut cursor = index + 2;

		while tokens.get(cursor).is_some_and(|candidate| candidate.is_punct("."))
			&& tokens.get(cursor + 1).is_some_and(|candidate| candidate.kind == TokenKind::Word)
		{
			let Some(member) = tokens.get(cursor + 1) else {
				break;
			};

			callee_end = member.span.end;
			cursor += 2;
		}

		if tokens.get(cursor).is_some_and(|candidate| candidate.is_punct("(")) {
			if let Some(close) = matching_close(tokens, cursor, "(", ")") {
				let Some(close_token) = tokens.get(close) else {
					break;
				};

				expressions.push(NewExpression {
					span: Span::new(new_start, close_token.span.end),
					callee_end,
					argument_count: count_arguments(tokens, cursor, close),
				});

				index = close + 1;

				continue;
			}
		}

		expressions.push(NewExpression {
			span: Span::new(new_start, callee_end),
			callee_end,
			argument_count: 0,
		});

		index = cursor;
	}

	expressions
}

/// Alignment candidates: declarations and assignment expression
/// statements, with the scope and loop-header facts the grouping needs.
pub fn assignment_statements(source: &SourceFile) -> Vec<AssignmentStatement> {
	let tokens = &source.tokens;
	let mut statements = Vec::new();
	let mut scopes = vec![0_usize];
	let mut index = 0;

	while index < tokens.len() {
		let Some(token) = tokens.get(index) else {
			break;
		};

		if matches!(token.kind, TokenKind::LineComment | TokenKind::BlockComment) {
			index += 1;

			continue;
		}
		if token.is_punct("{") {
			scopes.push(index + 1);

			index += 1;

			continue;
		}
		if token.is_punct("}") {
			if scopes.len() > 1 {
				scopes.pop();
			}

			index += 1;

			continue;
		}
		if token.is_punct(";") {
			index += 1;

			continue;
		}

		let parent = scopes.last().copied().unwrap_or(0);

		// Declarations inside a `for (...)` header are loop-header
		// statements; everything after the header is skipped whole.
		if token.kind == TokenKind::Word
			&& token.text == "for"
			&& tokens.get(index + 1).is_some_and(|candidate| candidate.is_punct("("))
		{
			if let Some(close) = matching_close(tokens, index + 1, "(", ")") {
				let header_end = statement_end(tokens, index + 2).min(close);

				if let Some(statement) = parse_statement(source, index + 2, header_end, parent, true)
				{
					statements.push(statement);
				}

				index = close + 1;

				continue;
			}
		}
		if token.kind == TokenKind::Word && STRUCTURE_KEYWORDS.contains(&token.text.as_str()) {
			index = skip_to_block_open(tokens, index);

			continue;
		}

		let end = statement_end(tokens, index);

		if let Some(statement) = parse_statement(source, index, end, parent, false) {
			statements.push(statement);
		}

		index = end.max(index + 1);
	}

	statements
}

fn matching_close(tokens: &TokenStream, open_index: usize, open: &str, close: &str) -> Option<usize> {
	let mut depth = 1_usize;

	for index in (open_index + 1)..tokens.len() {
		let token = tokens.get(index)?;

		if token.is_punct(open) {
			depth += 1;
		} else if token.is_punct(close) {
			depth -= 1;

			if depth == 0 {
				return Some(index);
			}
		}
	}

	None
}

fn count_arguments(tokens: &TokenStream, open: usize, close: usize) -> usize {
	if close <= open + 1 {
		return 0;
	}

	1 + count_top_level(tokens, open + 1, close, ",")
}

fn count_top_level(tokens: &TokenStream, start: usize, end: usize, text: &str) -> usize {
	let mut paren = 0_i32;
	let mut bracket = 0_i32;
	let mut brace = 0_i32;
	let mut count = 0;

	for index in start..end {
		let Some(token) = tokens.get(index) else {
			break;
		};

		match token.text.as_str() {
			"(" if token.kind == TokenKind::Punctuator => paren += 1,
			")" if token.kind == TokenKind::Punctuator => paren -= 1,
			"[" if token.kind == TokenKind::Punctuator => bracket += 1,
			"]" if token.kind == TokenKind::Punctuator => bracket -= 1,
			"{" if token.kind == TokenKind::Punctuator => brace += 1,
			"}" if token.kind == TokenKind::Punctuator => brace -= 1,
			_ => {},
		}

		if paren == 0 && bracket == 0 && brace == 0 && token.is_punct(text) {
			count += 1;
		}
	}

	count
}

fn statement_end(tokens: &TokenStream, start: usize) -> usize {
	let mut paren = 0_i32;
	let mut bracket = 0_i32;
	let mut brace = 0_i32;
	let mut index = start;

	while index < tokens.len() {
		let Some(token) = tokens.get(index) else {
			break;
		};

		if token.is_punct("(") {
			paren += 1;
		} else if token.is_punct(")") {
			if paren == 0 {
				return index;
			}

			paren -= 1;
		} else if token.is_punct("[") {
			bracket += 1;
		} else if token.is_punct("]") {
			if bracket == 0 {
				return index;
			}

			bracket -= 1;
		} else if token.is_punct("{") {
			brace += 1;
		} else if token.is_punct("}") {
			if brace == 0 {
				return index;
			}

			brace -= 1;
		} else if token.is_punct(";") && paren == 0 && bracket == 0 && brace == 0 {
			return index + 1;
		}

		index += 1;
	}

	index
}

fn skip_to_block_open(tokens: &TokenStream, start: usize) -> usize {
	let mut index = start + 1;

	while index < tokens.len() {
		let Some(token) = tokens.get(index) else {
			break;
		};

		if token.is_punct("{") || token.is_punct(";") {
			return index;
		}

		index += 1;
	}

	index
}

fn parse_statement(
	source: &SourceFile,
	start: usize,
	end: usize,
	parent: usize,
	is_loop_header: bool,
) -> Option<AssignmentStatement> {
	let tokens = &source.tokens;

	if end <= start {
		return None;
	}

	let first = tokens.get(start)?;
	let last = tokens.get(end - 1)?;
	let span = Span::new(first.span.start, last.span.end);
	let is_declaration = first.kind == TokenKind::Word
		&& matches!(first.text.as_str(), "var" | "let" | "const");

	if !is_declaration
		&& !(first.kind == TokenKind::Word && !KEYWORDS.contains(&first.text.as_str()))
	{
		return None;
	}

	let target_start = if is_declaration { start + 1 } else { start };
	let operator_index = find_operator_token(tokens, target_start, end)?;

	if operator_index <= target_start || operator_index + 1 >= end {
		return None;
	}

	let target_last = tokens.get(operator_index - 1)?;
	let init_first = tokens.get(operator_index + 1)?;
	let init_text = &source.text[init_first.span.start..span.end];
	let kind = if is_declaration {
		AssignmentKind::Declaration { declarators: 1 + count_top_level(tokens, start, end, ",") }
	} else {
		AssignmentKind::Expression
	};

	Some(AssignmentStatement {
		span,
		start: first.start,
		end_line: last.end.line,
		parent,
		is_loop_header,
		kind,
		init_is_call: CALL_INIT_RE.is_match(init_text),
		target_width: target_last.span.end - span.start,
	})
}

fn find_operator_token(tokens: &TokenStream, start: usize, end: usize) -> Option<usize> {
	let mut paren = 0_i32;
	let mut bracket = 0_i32;
	let mut brace = 0_i32;

	for index in start..end {
		let token = tokens.get(index)?;

		match token.text.as_str() {
			"(" if token.kind == TokenKind::Punctuator => paren += 1,
			")" if token.kind == TokenKind::Punctuator => paren -= 1,
			"[" if token.kind == TokenKind::Punctuator => bracket += 1,
			"]" if token.kind == TokenKind::Punctuator => bracket -= 1,
			"{" if token.kind == TokenKind::Punctuator => brace += 1,
			"}" if token.kind == TokenKind::Punctuator => brace -= 1,
			_ => {},
		}

		if paren == 0
			&& bracket == 0
			&& brace == 0
			&& token.kind == TokenKind::Punctuator
			&& ASSIGNMENT_OPERATORS.contains(&token.text.as_str())
		{
			return Some(index);
		}
	}

	None
}
