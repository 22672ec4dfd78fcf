//! `aligned-requires`: assignment operators of adjacent import-style
//! assignments line up on one column.
//!
//! Qualifying statements are partitioned into groups by adjacency; each
//! group is checked independently and reported at most once, with a fix
//! that rewrites the whole group.

use crate::{
	config::{AlignmentOptions, Mode},
	report::{Edit, Fix, Violation},
	source::{SourceFile, Span},
	syntax::{AssignmentKind, AssignmentStatement},
};

/// Stable identifier of this rule.
pub const RULE_ID: &str = "aligned-requires";

/// Message for a misaligned statement group.
pub const UNALIGNED_GROUP: &str = "This group of assignments is not aligned.";

// Longest first, so compound operators win over their prefixes.
const ASSIGNMENT_OPERATORS: [&str; 13] =
	[">>>=", "<<=", ">>=", "**=", "+=", "-=", "*=", "/=", "%=", "&=", "^=", "|=", "="];

struct OperatorSite {
	// Byte offset of the operator within the statement text.
	offset: usize,
	// Operator length in bytes.
	len: usize,
	// Source column of the operator's first character.
	column: usize,
}

/// Checks alignment across the host-supplied candidate statements, in
/// source order. Disabled unless the mode is `always`.
pub fn check(
	source: &SourceFile,
	statements: &[AssignmentStatement],
	options: &AlignmentOptions,
) -> Vec<Violation> {
	if options.mode != Mode::Always {
		return Vec::new();
	}

	let mut violations = Vec::new();

	for group in partition_groups(statements) {
		check_group(source, &group, &mut violations);
	}

	violations
}

fn qualifies(statement: &AssignmentStatement) -> bool {
	if !statement.init_is_call {
		return false;
	}

	match statement.kind {
		AssignmentKind::Expression => true,
		// Two bindings in one statement have no single alignment target.
		AssignmentKind::Declaration { declarators } => declarators == 1,
	}
}

fn partition_groups(statements: &[AssignmentStatement]) -> Vec<Vec<&AssignmentStatement>> {
	let mut groups: Vec<Vec<&AssignmentStatement>> = Vec::new();
	let mut previous: Option<&AssignmentStatement> = None;

	for statement in statements.iter().filter(|statement| qualifies(statement)) {
		let starts_group = match previous {
			None => true,
			Some(previous) => {
				previous.parent != statement.parent
					|| previous.is_loop_header
					|| statement.start.line > previous.end_line + 1
			},
		};

		if starts_group {
			groups.push(vec![statement]);
		} else if let Some(group) = groups.last_mut() {
			group.push(statement);
		}

		previous = Some(statement);
	}

	groups
}

fn check_group(source: &SourceFile, group: &[&AssignmentStatement], violations: &mut Vec<Violation>) {
	if group.len() < 2 {
		return;
	}

	// Operator sites, measured only where target and initializer share
	// the statement's first line; line-split statements are exempt.
	let sites = group
		.iter()
		.map(|statement| {
			let text = source.slice(statement.span);
			let (offset, len) = find_operator(text, statement.target_width)?;

			if text[..offset].contains('\n') {
				return None;
			}

			let after = &text[offset + len..];
			let gap = after.find(|ch: char| !ch.is_whitespace())?;

			if after[..gap].contains('\n') {
				return None;
			}

			Some(OperatorSite { offset, len, column: statement.start.column + offset })
		})
		.collect::<Vec<_>>();
	let Some(target_column) = sites
		.iter()
		.flatten()
		.map(|site| site.column)
		.max()
	else {
		return;
	};
	let aligned = sites.iter().flatten().all(|site| site.column == target_column);

	if aligned {
		return;
	}

	let mut edits = Vec::new();

	for (statement, site) in group.iter().zip(&sites) {
		let text = source.slice(statement.span);
		let replacement = match site {
			Some(site) if site.column != target_column => {
				realign(text, site, target_column, statement.start.column)
			},
			// Already aligned or exempt: verbatim.
			_ => text.to_owned(),
		};

		edits.push(Edit { start: statement.span.start, end: statement.span.end, replacement });
	}

	let Some(first) = group.first() else {
		return;
	};
	let Some(last) = group.last() else {
		return;
	};

	violations.push(Violation {
		rule: RULE_ID,
		message: UNALIGNED_GROUP.to_owned(),
		span: Span::new(first.span.start, last.span.end),
		fix: Some(Fix { edits }),
	});
}

/// Finds the first recognized assignment operator at or after `from`,
/// returning its byte offset and length. Comparison, arrow, and
/// strict-equality lookalikes are skipped.
fn find_operator(text: &str, from: usize) -> Option<(usize, usize)> {
	let bytes = text.as_bytes();
	let mut index = from.min(bytes.len());

	while index < bytes.len() {
		for operator in ASSIGNMENT_OPERATORS {
			if !bytes[index..].starts_with(operator.as_bytes()) {
				continue;
			}
			if operator == "=" && !is_plain_assignment(bytes, index) {
				continue;
			}

			return Some((index, operator.len()));
		}

		index += 1;
	}

	None
}

fn is_plain_assignment(bytes: &[u8], index: usize) -> bool {
	let prev = index.checked_sub(1).map(|prev_index| bytes[prev_index] as char);
	let next = bytes.get(index + 1).map(|byte| *byte as char);

	if matches!(prev, Some('=' | '!' | '<' | '>')) {
		return false;
	}
	if matches!(next, Some('=' | '>')) {
		return false;
	}

	true
}

fn realign(text: &str, site: &OperatorSite, target_column: usize, statement_column: usize) -> String {
	let head = text[..site.offset].trim_end();
	let operator = &text[site.offset..site.offset + site.len];
	let remainder = text[site.offset + site.len..].trim_start();
	let padding = target_column.saturating_sub(statement_column + head.len());

	format!("{head}{} {remainder}", " ".repeat(padding) + operator)
}
