//! Host-supplied syntax facts.
//!
//! The host parser extracts one record per construct a rule consumes;
//! the closed set of shapes below is the whole AST surface the rules see.

use crate::source::{LineCol, Span};

/// One computed member or property access, as the token indices of its
/// square brackets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ComputedAccess {
	/// Index of the `[` token.
	pub open_bracket: usize,
	/// Index of the matching `]` token.
	pub close_bracket: usize,
}

/// One `new` expression.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NewExpression {
	/// Byte range of the whole expression.
	pub span: Span,
	/// Byte offset where the callee ends. A paren pair belongs to the
	/// expression only if it sits past this offset.
	pub callee_end: usize,
	/// Number of call arguments; zero for paren-less `new` too.
	pub argument_count: usize,
}

/// Statement form of an alignment candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignmentKind {
	/// Bare assignment expression statement.
	Expression,
	/// `var`/`let`/`const` declaration.
	Declaration {
		/// Number of declarators in the statement.
		declarators: usize,
	},
}

/// One candidate statement for the alignment rule, in source order.
#[derive(Clone, Debug)]
pub struct AssignmentStatement {
	/// Byte range of the whole statement.
	pub span: Span,
	/// Position of the statement's first character.
	pub start: LineCol,
	/// 1-based line the statement ends on.
	pub end_line: usize,
	/// Opaque id of the enclosing syntactic parent. Statements group only
	/// with neighbors sharing the same parent.
	pub parent: usize,
	/// Whether this is a declaration in a `for`-loop header.
	pub is_loop_header: bool,
	/// Statement form.
	pub kind: AssignmentKind,
	/// Whether the right-hand side is a call expression.
	pub init_is_call: bool,
	/// Width in bytes of the statement text up to the end of the
	/// assignment target.
	pub target_width: usize,
}
