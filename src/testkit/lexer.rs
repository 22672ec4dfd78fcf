//! Fixture tokenizer for a small C-family grammar: enough to exercise
//! the rules, nothing more. Unterminated literals and comments run to
//! the end of input instead of failing.

use crate::{
	source::{LineCol, Span},
	token::{Token, TokenKind, TokenStream},
};

// Longest first so maximal munch wins.
const PUNCTUATORS: [&str; 27] = [
	">>>=", "===", "!==", ">>>", "**=", "<<=", ">>=", "=>", "==", "!=", "<=", ">=", "&&", "||",
	"++", "--", "+=", "-=", "*=", "/=", "%=", "&=", "^=", "|=", "<<", ">>", "**",
];

struct Lexer<'a> {
	text: &'a str,
	offset: usize,
	line: usize,
	column: usize,
}
impl<'a> Lexer<'a> {
	fn new(text: &'a str) -> Self {
		Self { text, offset: 0, line: 1, column: 0 }
	}

	fn rest(&self) -> &'a str {
		&self.text[self.offset..]
	}

	fn peek(&self) -> Option<char> {
		self.rest().chars().next()
	}

	fn position(&self) -> LineCol {
		LineCol { line: self.line, column: self.column }
	}

	fn bump(&mut self) {
		let Some(ch) = self.peek() else {
			return;
		};

		self.offset += ch.len_utf8();

		if ch == '\n' {
			self.line += 1;
			self.column = 0;
		} else {
			self.column += ch.len_utf8();
		}
	}

	fn next_kind(&mut self, ch: char) -> TokenKind {
		if self.rest().starts_with("//") {
			while self.peek().is_some_and(|candidate| candidate != '\n') {
				self.bump();
			}

			return TokenKind::LineComment;
		}
		if self.rest().starts_with("/*") {
			self.bump();
			self.bump();

			while self.peek().is_some() && !self.rest().starts_with("*/") {
				self.bump();
			}

			if self.rest().starts_with("*/") {
				self.bump();
				self.bump();
			}

			return TokenKind::BlockComment;
		}
		if ch == '\'' || ch == '"' {
			self.consume_quoted(ch);

			return TokenKind::Str;
		}
		if ch == '`' {
			self.consume_quoted('`');

			return TokenKind::Template;
		}
		if ch.is_ascii_digit() {
			while self.peek().is_some_and(|candidate| candidate.is_ascii_alphanumeric() || candidate == '.') {
				self.bump();
			}

			return TokenKind::Number;
		}
		if is_word_start(ch) {
			while self.peek().is_some_and(is_word_continue) {
				self.bump();
			}

			return TokenKind::Word;
		}

		for punctuator in PUNCTUATORS {
			if self.rest().starts_with(punctuator) {
				for _ in 0..punctuator.len() {
					self.bump();
				}

				return TokenKind::Punctuator;
			}
		}

		self.bump();

		TokenKind::Punctuator
	}

	fn consume_quoted(&mut self, quote: char) {
		self.bump();

		while let Some(ch) = self.peek() {
			self.bump();

			if ch == '\\' {
				self.bump();
			} else if ch == quote {
				break;
			}
		}
	}
}

fn is_word_start(ch: char) -> bool {
	ch == '_' || ch == '$' || ch.is_alphabetic()
}

fn is_word_continue(ch: char) -> bool {
	ch == '_' || ch == '$' || ch.is_alphanumeric()
}

/// Tokenizes fixture text, comments included, in source order.
pub fn tokenize(text: &str) -> TokenStream {
	let mut lexer = Lexer::new(text);
	let mut tokens = Vec::new();

	while let Some(ch) = lexer.peek() {
		if ch.is_whitespace() {
			lexer.bump();

			continue;
		}

		let start_offset = lexer.offset;
		let start = lexer.position();
		let kind = lexer.next_kind(ch);

		tokens.push(Token {
			kind,
			text: text[start_offset..lexer.offset].to_owned(),
			span: Span::new(start_offset, lexer.offset),
			start,
			end: lexer.position(),
		});
	}

	TokenStream::new(tokens)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn kinds(text: &str) -> Vec<TokenKind> {
		tokenize(text).iter().map(|token| token.kind).collect()
	}

	#[test]
	fn classifies_the_fixture_grammar() {
		assert_eq!(
			kinds("foo('bar', 1) // done"),
			vec![
				TokenKind::Word,
				TokenKind::Punctuator,
				TokenKind::Str,
				TokenKind::Punctuator,
				TokenKind::Number,
				TokenKind::Punctuator,
				TokenKind::LineComment,
			]
		);
	}

	#[test]
	fn multi_character_punctuators_stay_whole() {
		let stream = tokenize("a >>>= b === c");
		let texts = stream.iter().map(|token| token.text.as_str()).collect::<Vec<_>>();

		assert_eq!(texts, vec!["a", ">>>=", "b", "===", "c"]);
	}

	#[test]
	fn string_escapes_do_not_end_the_literal() {
		let stream = tokenize(r#"'a\'b' x"#);

		assert_eq!(stream.get(0).expect("string").text, r#"'a\'b'"#);
		assert_eq!(stream.get(1).expect("word").text, "x");
	}

	#[test]
	fn positions_track_lines_and_columns() {
		let stream = tokenize("a\n  b");
		let second = stream.get(1).expect("second token");

		assert_eq!(second.start, LineCol { line: 2, column: 2 });
		assert_eq!(second.span, Span::new(4, 5));
	}

	#[test]
	fn template_literals_are_one_token() {
		let stream = tokenize("f(`a ${b} c`)");

		assert_eq!(stream.get(2).expect("template").kind, TokenKind::Template);
		assert_eq!(stream.len(), 4);
	}
}
