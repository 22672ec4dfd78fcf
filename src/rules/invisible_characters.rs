//! `no-invisible-characters`: no invisible filler code points anywhere in
//! the file.
//!
//! Scans the raw text code point by code point rather than token by
//! token, so fillers hiding in identifiers, literals, comments, and
//! whitespace are all caught.

use crate::{
	report::{Fix, Violation},
	source::{SourceFile, Span},
};

/// Stable identifier of this rule.
pub const RULE_ID: &str = "no-invisible-characters";

// Hangul fillers render as blank glyphs.
const INVISIBLE_CHARACTERS: [char; 3] = ['\u{3164}', '\u{115F}', '\u{1160}'];

/// Reports every denylisted code point with its escape as the fix.
pub fn check(source: &SourceFile) -> Vec<Violation> {
	let mut violations = Vec::new();

	for (offset, character) in source.text.char_indices() {
		if !INVISIBLE_CHARACTERS.contains(&character) {
			continue;
		}

		let end = offset + character.len_utf8();
		let instead = escaped(character);

		violations.push(Violation {
			rule: RULE_ID,
			message: format!("Unexpected invisible character. Use {instead} instead."),
			span: Span::new(offset, end),
			fix: Some(Fix::replace(offset, end, instead)),
		});
	}

	violations
}

fn escaped(character: char) -> String {
	format!("\\u{:X}", character as u32)
}
