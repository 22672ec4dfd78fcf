//! Whitespace and alignment lint rules over a host-supplied token stream.
//!
//! Each rule is a pure, stateless function of one file's [`SourceFile`]
//! (raw text, line index, token stream), the syntax facts the host parser
//! extracted for it, and pre-validated [`config`] options. Rules return
//! [`Violation`]s carrying plain-data [`Fix`]es; tokenizing, parsing, and
//! applying fixes all belong to the host. The [`testkit`] module stands
//! in for that host in this crate's own tests.

#![deny(clippy::all, unused_crate_dependencies)]

pub mod config;
pub mod report;
pub mod rules;
pub mod source;
pub mod syntax;
pub mod testkit;
pub mod token;

pub use crate::{
	report::{Edit, Fix, Violation},
	source::{LineCol, SourceFile, Span},
	token::{Token, TokenKind, TokenStream},
};
