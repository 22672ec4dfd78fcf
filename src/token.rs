use crate::source::{LineCol, Span};

/// Lexical classes the rules distinguish. Kinds other than
/// [`TokenKind::Punctuator`], [`TokenKind::Str`], and
/// [`TokenKind::Template`] receive no special treatment anywhere.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
	/// Operator or delimiter.
	Punctuator,
	/// String literal, quotes included.
	Str,
	/// Template literal, backticks included.
	Template,
	/// Identifier or keyword.
	Word,
	/// Numeric literal.
	Number,
	/// `//` comment, marker included.
	LineComment,
	/// `/* */` comment, markers included.
	BlockComment,
}

/// Atomic lexical unit with its source position. Produced by the host,
/// never mutated.
#[derive(Clone, Debug)]
pub struct Token {
	/// Lexical class.
	pub kind: TokenKind,
	/// Literal source text.
	pub text: String,
	/// Byte range in the file.
	pub span: Span,
	/// Position of the first character.
	pub start: LineCol,
	/// Position one past the last character.
	pub end: LineCol,
}
impl Token {
	/// Whether this is a punctuator with exactly the given text.
	pub fn is_punct(&self, text: &str) -> bool {
		self.kind == TokenKind::Punctuator && self.text == text
	}

	/// Whether this is a string or template literal.
	pub fn is_string_like(&self) -> bool {
		matches!(self.kind, TokenKind::Str | TokenKind::Template)
	}
}

/// Ordered token sequence for one file, comments included.
///
/// Invariant: spans are strictly increasing and never overlap, so any gap
/// between two adjacent tokens is whitespace.
#[derive(Debug, Default)]
pub struct TokenStream {
	tokens: Vec<Token>,
}
impl TokenStream {
	/// Wraps a host-produced token list.
	pub fn new(tokens: Vec<Token>) -> Self {
		Self { tokens }
	}

	/// Token at the given position.
	pub fn get(&self, index: usize) -> Option<&Token> {
		self.tokens.get(index)
	}

	/// Number of tokens.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Whether the stream holds no tokens.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Iterates over the tokens in source order.
	pub fn iter(&self) -> std::slice::Iter<'_, Token> {
		self.tokens.iter()
	}

	/// Whether any whitespace separates `left` from the `right` token
	/// that follows it. Comments are tokens themselves, so a nonzero gap
	/// can only be whitespace.
	pub fn is_space_between(&self, left: &Token, right: &Token) -> bool {
		left.span.end < right.span.start
	}

	/// Index of the last token lying entirely inside `span`.
	pub fn last_index_in(&self, span: Span) -> Option<usize> {
		self.tokens.iter().rposition(|token| token.span.start >= span.start && token.span.end <= span.end)
	}
}
