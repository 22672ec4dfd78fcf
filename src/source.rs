use crate::token::TokenStream;

/// Half-open byte range into one file's text.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
	/// Offset of the first byte.
	pub start: usize,
	/// Offset one past the last byte.
	pub end: usize,
}
impl Span {
	/// Builds a span from byte offsets.
	pub fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	/// Length of the spanned text in bytes.
	pub fn len(&self) -> usize {
		self.end.saturating_sub(self.start)
	}

	/// Whether the span covers no text.
	pub fn is_empty(&self) -> bool {
		self.end <= self.start
	}
}

/// Source position as a 1-based line and 0-based column.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LineCol {
	/// 1-based line number.
	pub line: usize,
	/// 0-based column within the line.
	pub column: usize,
}

/// One analyzed file: raw text, its line index, and the host-produced
/// token stream. Built once by the host and read-only for every rule.
#[derive(Debug)]
pub struct SourceFile {
	/// Full file text.
	pub text: String,
	/// Byte offset of the first character of each line.
	pub line_starts: Vec<usize>,
	/// All tokens of the file, comments included, in source order.
	pub tokens: TokenStream,
}
impl SourceFile {
	/// Builds a file from its text and token stream.
	pub fn new(text: String, tokens: TokenStream) -> Self {
		let line_starts = build_line_starts(&text);

		Self { text, line_starts, tokens }
	}

	/// 1-based line holding the given byte offset.
	pub fn line_from_offset(&self, offset: usize) -> usize {
		match self.line_starts.binary_search(&offset) {
			Ok(pos) => pos + 1,
			Err(pos) => pos,
		}
	}

	/// Byte offset where the given 1-based line starts.
	pub fn offset_from_line(&self, line_one_based: usize) -> Option<usize> {
		if line_one_based == 0 {
			return None;
		}

		self.line_starts.get(line_one_based - 1).copied()
	}

	/// Line/column position of a byte offset.
	pub fn position(&self, offset: usize) -> LineCol {
		let line = self.line_from_offset(offset);
		let line_start = self.line_starts.get(line.saturating_sub(1)).copied().unwrap_or(0);

		LineCol { line, column: offset.saturating_sub(line_start) }
	}

	/// Text covered by a span.
	pub fn slice(&self, span: Span) -> &str {
		&self.text[span.start..span.end]
	}
}

fn build_line_starts(text: &str) -> Vec<usize> {
	let mut starts = vec![0_usize];

	for (idx, ch) in text.char_indices() {
		if ch == '\n' {
			starts.push(idx + 1);
		}
	}

	starts
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn line_lookup_round_trips() {
		let file = SourceFile::new("ab\ncd\n".to_owned(), TokenStream::new(Vec::new()));

		assert_eq!(file.line_from_offset(0), 1);
		assert_eq!(file.line_from_offset(2), 1);
		assert_eq!(file.line_from_offset(3), 2);
		assert_eq!(file.offset_from_line(2), Some(3));
		assert_eq!(file.offset_from_line(0), None);
	}

	#[test]
	fn position_reports_line_and_column() {
		let file = SourceFile::new("ab\ncd\n".to_owned(), TokenStream::new(Vec::new()));

		assert_eq!(file.position(4), LineCol { line: 2, column: 1 });
	}
}
