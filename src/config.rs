//! Typed rule configuration, validated once at the host boundary.
//!
//! The host hands each rule its raw config array (mode first, structured
//! options second). Everything is parsed into closed enums and named
//! fields here; the rules themselves assume pre-validated input and never
//! re-check.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Spacing mode shared by the configurable rules.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
	/// Require the spacing the rule governs.
	Always,
	/// Forbid it.
	#[default]
	Never,
}

/// Bracket kinds the paren rule may treat as exception neighbors.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd)]
pub enum ParenException {
	/// `{` / `}` neighbors.
	#[serde(rename = "{}")]
	Braces,
	/// `[` / `]` neighbors.
	#[serde(rename = "[]")]
	Brackets,
	/// `(` / `)` neighbors.
	#[serde(rename = "()")]
	Parens,
	/// Empty pairs. Accepted by the schema; empty argument lists are
	/// skipped unconditionally either way.
	#[serde(rename = "empty")]
	Empty,
}

/// Rejected rule configuration. Surfaced before any rule runs.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// First config element was not `"always"` or `"never"`.
	#[error("invalid spacing mode: {0}.")]
	Mode(#[source] serde_json::Error),
	/// Structured options carried an unknown key or a value outside its
	/// enum.
	#[error("invalid rule options: {0}.")]
	Options(#[source] serde_json::Error),
	/// More config elements than the rule's schema allows.
	#[error("unexpected trailing configuration element(s): {0}.")]
	TrailingElements(usize),
}

/// Validated options for `space-in-parens`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParenSpacingOptions {
	/// Whether inner spacing is required or forbidden.
	pub mode: Mode,
	/// Bracket kinds treated as exception neighbors.
	pub exceptions: BTreeSet<ParenException>,
}
impl ParenSpacingOptions {
	/// Parses and validates the rule's config array.
	pub fn from_config(config: &[Value]) -> Result<Self, ConfigError> {
		reject_trailing(config, 2)?;

		let exceptions = match config.get(1) {
			None => default_exceptions(),
			Some(value) => {
				let raw = serde_json::from_value::<RawParenOptions>(value.clone())
					.map_err(ConfigError::Options)?;

				match raw.exceptions {
					None => default_exceptions(),
					Some(listed) => listed.into_iter().collect(),
				}
			},
		};

		Ok(Self { mode: mode_from(config)?, exceptions })
	}
}
impl Default for ParenSpacingOptions {
	fn default() -> Self {
		Self { mode: Mode::Never, exceptions: default_exceptions() }
	}
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParenOptions {
	#[serde(default)]
	exceptions: Option<Vec<ParenException>>,
}

/// Validated options for `computed-property-spacing`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ComputedPropertyOptions {
	/// Whether inner spacing is required or forbidden.
	pub mode: Mode,
}
impl ComputedPropertyOptions {
	/// Parses and validates the rule's config array.
	pub fn from_config(config: &[Value]) -> Result<Self, ConfigError> {
		reject_trailing(config, 1)?;

		Ok(Self { mode: mode_from(config)? })
	}
}

/// Validated options for `aligned-requires`. `never` disables the rule.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AlignmentOptions {
	/// Whether alignment is enforced at all.
	pub mode: Mode,
}
impl AlignmentOptions {
	/// Parses and validates the rule's config array.
	pub fn from_config(config: &[Value]) -> Result<Self, ConfigError> {
		reject_trailing(config, 1)?;

		Ok(Self { mode: mode_from(config)? })
	}
}

fn default_exceptions() -> BTreeSet<ParenException> {
	[ParenException::Braces, ParenException::Brackets].into_iter().collect()
}

fn mode_from(config: &[Value]) -> Result<Mode, ConfigError> {
	match config.first() {
		None => Ok(Mode::default()),
		Some(value) => serde_json::from_value(value.clone()).map_err(ConfigError::Mode),
	}
}

fn reject_trailing(config: &[Value], allowed: usize) -> Result<(), ConfigError> {
	if config.len() > allowed {
		return Err(ConfigError::TrailingElements(config.len() - allowed));
	}

	Ok(())
}
