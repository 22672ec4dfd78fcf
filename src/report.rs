use crate::source::{SourceFile, Span};

/// Machine-applicable replacement of one byte range. Plain data; applying
/// edits to text is the host's job.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edit {
	/// First byte replaced.
	pub start: usize,
	/// One past the last byte replaced.
	pub end: usize,
	/// Text that takes the range's place.
	pub replacement: String,
}

/// Suggested fix attached to a violation. The token rules carry a single
/// edit; the alignment rule carries one edit per statement in the group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fix {
	/// Edits in source order. Ranges never overlap.
	pub edits: Vec<Edit>,
}
impl Fix {
	/// Fix that inserts `text` at a single offset.
	pub fn insert(offset: usize, text: &str) -> Self {
		Self { edits: vec![Edit { start: offset, end: offset, replacement: text.to_owned() }] }
	}

	/// Fix that deletes the given byte range.
	pub fn remove(start: usize, end: usize) -> Self {
		Self { edits: vec![Edit { start, end, replacement: String::new() }] }
	}

	/// Fix that replaces the given byte range with `text`.
	pub fn replace(start: usize, end: usize, text: String) -> Self {
		Self { edits: vec![Edit { start, end, replacement: text }] }
	}
}

/// One reported style violation. Produced fresh per analysis call and
/// never retained by the rules.
#[derive(Clone, Debug)]
pub struct Violation {
	/// Stable rule identifier, e.g. `space-in-parens`.
	pub rule: &'static str,
	/// Human-readable message. The exact wording is part of the contract.
	pub message: String,
	/// Token or range the violation points at.
	pub span: Span,
	/// Suggested fix, when one exists.
	pub fix: Option<Fix>,
}
impl Violation {
	/// Renders `line:column: [rule-id] message`, flagging fixable entries.
	pub fn format(&self, source: &SourceFile) -> String {
		let start = source.position(self.span.start);

		format!(
			"{}:{}: [{}] {}{}",
			start.line,
			start.column,
			self.rule,
			self.message,
			if self.fix.is_some() { " (fixable)" } else { "" }
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::token::TokenStream;

	#[test]
	fn format_includes_rule_and_position() {
		let source = SourceFile::new("ab\ncd\n".to_owned(), TokenStream::new(Vec::new()));
		let violation = Violation {
			rule: "space-in-parens",
			message: "There must be a space after this paren.".to_owned(),
			span: Span::new(3, 4),
			fix: Some(Fix::insert(4, " ")),
		};

		assert_eq!(
			violation.format(&source),
			"2:0: [space-in-parens] There must be a space after this paren. (fixable)"
		);
	}
}
