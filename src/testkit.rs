//! In-repo stand-in for the host linter, used by this crate's tests.
//!
//! Production rules consume whatever tokenizer and parser the host
//! embeds; the fixture lexer and syntax extraction here exist so tests
//! can drive full scenarios from plain source text, and make no claim to
//! being a real parser. Fix application also lives here because applying
//! edits is a host concern the rules only describe.

mod lexer;
mod syntax;

pub use lexer::tokenize;
pub use syntax::{assignment_statements, computed_accesses, new_expressions};

use crate::{
	report::{Edit, Violation},
	source::SourceFile,
};

/// Builds a [`SourceFile`] from fixture text.
pub fn source_file(text: &str) -> SourceFile {
	SourceFile::new(text.to_owned(), tokenize(text))
}

/// Applies every fix attached to `violations` and returns the rewritten
/// text. Overlapping edits keep the earliest and drop the rest.
pub fn apply_fixes(text: &str, violations: &[Violation]) -> String {
	let mut edits = violations
		.iter()
		.filter_map(|violation| violation.fix.as_ref())
		.flat_map(|fix| fix.edits.iter().cloned())
		.collect::<Vec<_>>();

	edits.sort_by(|a, b| a.start.cmp(&b.start).then(a.end.cmp(&b.end)));

	let mut filtered: Vec<Edit> = Vec::new();
	let mut last_end = 0_usize;

	for edit in edits {
		if edit.start < last_end {
			continue;
		}

		last_end = edit.end;

		filtered.push(edit);
	}

	let mut out = text.to_owned();

	for edit in filtered.iter().rev() {
		if edit.end > out.len() || edit.start > edit.end {
			continue;
		}

		out.replace_range(edit.start..edit.end, &edit.replacement);
	}

	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{report::Fix, source::Span};

	fn violation(fix: Fix) -> Violation {
		Violation { rule: "space-in-parens", message: String::new(), span: Span::new(0, 1), fix: Some(fix) }
	}

	#[test]
	fn edits_apply_in_reverse_without_shifting_offsets() {
		let fixed = apply_fixes(
			"foo( a )",
			&[violation(Fix::remove(4, 5)), violation(Fix::remove(6, 7))],
		);

		assert_eq!(fixed, "foo(a)");
	}

	#[test]
	fn overlapping_edits_keep_the_earliest() {
		let fixed = apply_fixes(
			"abcdef",
			&[violation(Fix::remove(1, 4)), violation(Fix::remove(2, 5))],
		);

		assert_eq!(fixed, "aef");
	}
}
